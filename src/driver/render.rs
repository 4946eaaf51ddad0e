//! Rendering
//!
//! 予測結果の表示（通貨書式・比較率・業界補正・補足情報）

use std::fmt::Write as _;

use crate::application::prediction_service::ServiceStatus;
use crate::domain::entities::categories::Country;
use crate::domain::entities::prediction::{CountryPrediction, PredictionInput, PredictionResult};
use crate::domain::entities::reference_dataset::CurrencyRates;
use crate::domain::errors::DataLoadError;
use crate::domain::rounding::round_half_up;

/// 3桁区切り
///
/// ```
/// use salary_predictor::driver::render::group_thousands;
///
/// assert_eq!(group_thousands(13_500_000), "13,500,000");
/// assert_eq!(group_thousands(-1_234), "-1,234");
/// assert_eq!(group_thousands(999), "999");
/// ```
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

pub fn format_jpy(amount: i64) -> String {
    format!("¥{}", group_thousands(amount))
}

pub fn format_usd(amount: i64) -> String {
    format!("${}", group_thousands(amount))
}

/// 国の通貨で金額を表示（アメリカは円換算を併記）
pub fn format_amount(country: Country, amount: i64, rates: &CurrencyRates) -> String {
    match country {
        Country::Japan => format_jpy(amount),
        Country::Usa => format!(
            "{} ({})",
            format_usd(amount),
            format_jpy(rates.usd_to_jpy(amount))
        ),
    }
}

/// 符号付きの百分率（0以上は `+`）
pub fn format_percentage(percentage: i64) -> String {
    if percentage >= 0 {
        format!("+{}%", percentage)
    } else {
        format!("{}%", percentage)
    }
}

/// 業界補正の傾向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MultiplierTrend {
    Premium,
    Discount,
    Neutral,
}

impl MultiplierTrend {
    pub fn of(multiplier: f64) -> Self {
        if multiplier > 1.0 {
            MultiplierTrend::Premium
        } else if multiplier < 1.0 {
            MultiplierTrend::Discount
        } else {
            MultiplierTrend::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MultiplierTrend::Premium => "プレミアム",
            MultiplierTrend::Discount => "ディスカウント",
            MultiplierTrend::Neutral => "標準",
        }
    }
}

/// 業界補正係数を百分率で表示（1.1 → `+10%`、0.9 → `-10%`）
pub fn format_multiplier(multiplier: f64) -> String {
    let adjustment = ((multiplier - 1.0) * 100.0).round() as i64;
    if multiplier >= 1.0 {
        format!("+{}%", adjustment)
    } else {
        format!("{}%", adjustment)
    }
}

/// アメリカの額面年収（円換算）が日本の何倍か
pub fn gross_ratio(result: &PredictionResult, rates: &CurrencyRates) -> f64 {
    let usa_in_jpy = rates.usd_to_jpy(result.usa.gross_salary) as f64;
    usa_in_jpy / result.japan.gross_salary as f64
}

/// 補足情報の文章
pub fn render_insights(
    input: &PredictionInput,
    result: &PredictionResult,
    rates: &CurrencyRates,
) -> String {
    let mut text = String::new();

    let _ = writeln!(
        text,
        "{}における{}の{}で{}の場合、",
        input.industry.label(),
        input.education.label(),
        input.job_category.label(),
        input.experience.label()
    );
    let _ = writeln!(
        text,
        "アメリカの年収は日本の約{:.1}倍となっています。",
        gross_ratio(result, rates)
    );
    let _ = writeln!(
        text,
        "（日本の額面年収はドル換算で約{}、アメリカは{}）",
        format_usd(rates.jpy_to_usd(result.japan.gross_salary)),
        format_usd(result.usa.gross_salary)
    );
    text.push('\n');
    let _ = writeln!(
        text,
        "業界補正: 日本 {}、アメリカ {}",
        format_multiplier(result.japan.industry_multiplier),
        format_multiplier(result.usa.industry_multiplier)
    );

    let description = &result.industry_info.description;
    if !description.is_empty() {
        text.push('\n');
        let _ = writeln!(text, "{}", description);
    }

    text.push('\n');
    text.push_str("※生活費や税制の違いにより実際の生活水準は異なります。\n");
    text.push_str(
        "企業規模、地域、個人のスキルレベルにより実際の年収は大きく変動する可能性があります。\n",
    );

    text
}

fn render_country(
    text: &mut String,
    country: Country,
    prediction: &CountryPrediction,
    rates: &CurrencyRates,
) {
    let _ = writeln!(text, "[{}]", country.label());
    let _ = writeln!(
        text,
        "  予測年収（額面）: {}",
        format_amount(country, prediction.gross_salary, rates)
    );
    let _ = writeln!(
        text,
        "  手取り年収:       {}",
        format_amount(country, prediction.net_salary, rates)
    );
    let _ = writeln!(
        text,
        "  手取り月収:       {}",
        format_amount(country, prediction.monthly_net, rates)
    );
    let _ = writeln!(
        text,
        "  業界平均との差:   {}（業界平均 {}）",
        format_percentage(prediction.comparison_percentage),
        format_amount(country, round_half_up(prediction.industry_average), rates)
    );
    let _ = writeln!(
        text,
        "  業界補正:         {}（{}）",
        format_multiplier(prediction.industry_multiplier),
        MultiplierTrend::of(prediction.industry_multiplier).label()
    );
}

/// 予測結果のテキスト表示
pub fn render_text(
    input: &PredictionInput,
    result: &PredictionResult,
    rates: &CurrencyRates,
) -> String {
    let mut text = String::new();

    text.push_str("━━ 年収予測結果 ━━\n");
    let _ = writeln!(
        text,
        "条件: {} / {} / {} / {}",
        input.education.label(),
        input.job_category.label(),
        input.experience.label(),
        input.industry.label()
    );
    text.push('\n');

    render_country(&mut text, Country::Japan, &result.japan, rates);
    text.push('\n');
    render_country(&mut text, Country::Usa, &result.usa, rates);
    text.push('\n');

    text.push_str(&render_insights(input, result, rates));
    text
}

/// 予測結果のJSON表示
pub fn render_json(result: &PredictionResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// 出力形式に応じて予測結果を表示
pub fn render_prediction(
    input: &PredictionInput,
    result: &PredictionResult,
    rates: &CurrencyRates,
    json: bool,
) -> serde_json::Result<String> {
    if json {
        Ok(format!("{}\n", render_json(result)?))
    } else {
        Ok(render_text(input, result, rates))
    }
}

/// サービス状態の表示
pub fn render_status(status: &ServiceStatus) -> String {
    match status {
        ServiceStatus::Ready {
            source,
            loaded_at,
            base_salary_entries,
        } => format!(
            "✓ 予測受付中\n  データセット: {}\n  読み込み日時: {}\n  基本年収データ: {}件\n",
            source,
            loaded_at.format("%Y-%m-%d %H:%M:%S UTC"),
            base_salary_entries
        ),
        ServiceStatus::Failed { source, error } => format!(
            "✗ 受付停止中（reload で再試行できます）\n  データセット: {}\n  エラー: {}\n",
            source, error
        ),
    }
}

/// データセット読み込み失敗時の表示（再試行の案内付き）
pub fn render_load_failure(source: &str, error: &DataLoadError) -> String {
    let mut text = String::new();

    text.push_str("✗ 初期化に失敗しました\n");
    let _ = writeln!(text, "  {}", error);
    text.push('\n');
    text.push_str("トラブルシューティング:\n");
    match error {
        DataLoadError::NotFound(_) => {
            let _ = writeln!(text, "  - データファイル（{}）が存在することを確認してください", source);
        }
        DataLoadError::Transport(_) => {
            text.push_str("  - ネットワーク接続、またはサーバーが起動していることを確認してください\n");
        }
        DataLoadError::Parse(_) | DataLoadError::Invalid(_) => {
            text.push_str("  - データファイルの形式が正しいか確認してください。管理者に連絡してください\n");
        }
    }
    text.push_str("  - RUST_LOG=debug を指定するとエラーの詳細を確認できます\n");
    text.push_str("  - --interactive で起動すると reload で再試行できます\n");

    text
}
