//! # Categorical Keys
//!
//! 国・学歴・経験年数・職種・業界の列挙型
//!
//! データセットのキーはここで定義された値に限定され、読み込み時に検証される。

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::errors::UnknownKeyError;

/// キー文字列・表示ラベル付きの列挙型を定義する
macro_rules! categorical_key {
    (
        $(#[$meta:meta])*
        pub enum $name:ident ($field:literal) {
            $($variant:ident => $key:literal, $label:literal;)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $key)]
                $variant,
            )+
        }

        impl $name {
            /// 全ての値（定義順）
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// 入力フォームのフィールド名
            pub const FIELD: &'static str = $field;

            /// データセット上のキー文字列
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $key,)+
                }
            }

            /// 表示用ラベル
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownKeyError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok($name::$variant),)+
                    _ => Err(UnknownKeyError {
                        field: $field,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

categorical_key! {
    /// 国
    pub enum Country ("country") {
        Japan => "japan", "日本";
        Usa => "usa", "アメリカ";
    }
}

impl Country {
    /// 現地通貨のISOコード
    pub fn currency_code(&self) -> &'static str {
        match self {
            Country::Japan => "JPY",
            Country::Usa => "USD",
        }
    }
}

categorical_key! {
    /// 最終学歴
    pub enum Education ("education") {
        HighSchool => "high-school", "高校卒業";
        Vocational => "vocational", "専門学校・短大卒業";
        Bachelor => "bachelor", "大学卒業";
        Master => "master", "大学院修士課程修了";
        Phd => "phd", "大学院博士課程修了";
    }
}

categorical_key! {
    /// 経験年数の区分
    pub enum Experience ("experience") {
        ZeroToTwo => "0-2", "0-2年の経験";
        ThreeToFive => "3-5", "3-5年の経験";
        SixToTen => "6-10", "6-10年の経験";
        ElevenToFifteen => "11-15", "11-15年の経験";
        SixteenToTwenty => "16-20", "16-20年の経験";
        OverTwenty => "20+", "20年以上の経験";
    }
}

categorical_key! {
    /// 職種
    pub enum JobCategory ("jobCategory") {
        SoftwareEngineer => "software-engineer", "ソフトウェアエンジニア";
        DataScientist => "data-scientist", "データサイエンティスト";
        ProjectManager => "project-manager", "プロジェクトマネージャー";
        Marketing => "marketing", "マーケティング職";
        Sales => "sales", "営業職";
        Finance => "finance", "財務・経理職";
        Hr => "hr", "人事職";
        Consultant => "consultant", "コンサルタント";
        Designer => "designer", "デザイナー";
        Researcher => "researcher", "研究職";
    }
}

categorical_key! {
    /// 業界
    pub enum Industry ("industry") {
        Technology => "technology", "テクノロジー・IT業界";
        Finance => "finance", "金融・銀行業界";
        Healthcare => "healthcare", "医療・ヘルスケア業界";
        Manufacturing => "manufacturing", "製造業界";
        Consulting => "consulting", "コンサルティング業界";
        Retail => "retail", "小売・消費財業界";
        Energy => "energy", "エネルギー・資源業界";
        Media => "media", "メディア・広告業界";
        Automotive => "automotive", "自動車業界";
        Pharmaceutical => "pharmaceutical", "製薬・バイオ業界";
        Education => "education", "教育業界";
        Government => "government", "公共・政府機関";
    }
}
