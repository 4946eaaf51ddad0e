//! Interactive Session
//!
//! 1行1コマンドの対話セッション。読み込みに失敗した場合は `reload` で再試行できる。

use anyhow::Result;
use log::{debug, info};
use std::fmt::Write as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::application::dto::prediction_request::PredictionRequest;
use crate::application::prediction_service::PredictionService;
use crate::domain::entities::categories::{Education, Experience, Industry, JobCategory};
use crate::domain::repositories::dataset_source::DatasetSource;

use super::render::{render_load_failure, render_prediction, render_status};

const PROMPT: &str = "> ";

/// コマンドの実行結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReply {
    pub output: String,
    pub quit: bool,
}

impl SessionReply {
    fn text(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    fn quit() -> Self {
        Self {
            output: "終了します\n".to_string(),
            quit: true,
        }
    }
}

/// 対話セッション
pub struct InteractiveSession<S: DatasetSource + ?Sized> {
    service: PredictionService<S>,
    json: bool,
}

impl<S: DatasetSource + ?Sized> InteractiveSession<S> {
    /// 新しいセッションを作成
    ///
    /// # Arguments
    ///
    /// * `service` - 初期化済み（失敗を含む）の予測サービス
    /// * `json` - 予測結果をJSONで表示する
    pub fn new(service: PredictionService<S>, json: bool) -> Self {
        Self { service, json }
    }

    pub fn service(&self) -> &PredictionService<S> {
        &self.service
    }

    /// 1行分のコマンドを処理する
    pub async fn handle_line(&mut self, line: &str) -> SessionReply {
        let mut tokens = line.split_whitespace();
        let Some(command) = tokens.next() else {
            return SessionReply::text("");
        };
        let arguments: Vec<&str> = tokens.collect();
        debug!("Session command: {} {:?}", command, arguments);

        match command {
            "predict" => self.predict(&arguments),
            "reload" | "retry" => self.reload().await,
            "status" => SessionReply::text(render_status(&self.service.status())),
            "help" => SessionReply::text(help_text()),
            "quit" | "exit" => SessionReply::quit(),
            other => SessionReply::text(format!(
                "不明なコマンド: {}（help でコマンド一覧を表示）\n",
                other
            )),
        }
    }

    fn predict(&self, arguments: &[&str]) -> SessionReply {
        if arguments.len() > 4 {
            return SessionReply::text(
                "引数が多すぎます: predict <education> <experience> <job-category> <industry>\n",
            );
        }

        let field = |i: usize| arguments.get(i).map(|v| v.to_string());
        let request = PredictionRequest {
            education: field(0),
            experience: field(1),
            job_category: field(2),
            industry: field(3),
        };

        let input = match request.validate() {
            Ok(input) => input,
            Err(e) => return SessionReply::text(format!("✗ {}\n", e)),
        };

        let result = match self.service.predict(&input) {
            Ok(result) => result,
            Err(e) => return SessionReply::text(format!("✗ {}\n", e)),
        };

        let Some(dataset) = self.service.dataset() else {
            return SessionReply::text("✗ データセットが利用できません\n");
        };

        match render_prediction(&input, &result, dataset.currency_rates(), self.json) {
            Ok(output) => SessionReply::text(output),
            Err(e) => SessionReply::text(format!("✗ 表示に失敗しました: {}\n", e)),
        }
    }

    async fn reload(&mut self) -> SessionReply {
        match self.service.reload().await {
            Ok(()) => {
                let entries = self
                    .service
                    .dataset()
                    .map(|dataset| dataset.base_salary_count())
                    .unwrap_or_default();
                SessionReply::text(format!(
                    "✓ データセットを再読み込みしました（基本年収データ {}件）\n",
                    entries
                ))
            }
            Err(e) => SessionReply::text(render_load_failure(&self.service.source(), &e)),
        }
    }

    /// 入力が終わるか `quit` が入力されるまでコマンドを処理する
    ///
    /// # Errors
    ///
    /// 入出力に失敗した場合にエラーを返す
    pub async fn run<R, W>(&mut self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Starting interactive session");

        writer.write_all(render_status(&self.service.status()).as_bytes()).await?;
        writer
            .write_all("help でコマンド一覧を表示します\n".as_bytes())
            .await?;

        let mut lines = reader.lines();
        loop {
            writer.write_all(PROMPT.as_bytes()).await?;
            writer.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let reply = self.handle_line(&line).await;
            writer.write_all(reply.output.as_bytes()).await?;
            if reply.quit {
                break;
            }
        }

        writer.flush().await?;
        info!("Interactive session finished");
        Ok(())
    }
}

fn keys<T>(values: &[T], as_str: fn(&T) -> &'static str) -> String {
    values.iter().map(as_str).collect::<Vec<_>>().join(", ")
}

fn help_text() -> String {
    let mut text = String::new();
    text.push_str("コマンド:\n");
    text.push_str("  predict <education> <experience> <job-category> <industry>  年収を予測\n");
    text.push_str("  reload   データセットを再読み込み\n");
    text.push_str("  status   サービスの状態を表示\n");
    text.push_str("  help     このヘルプを表示\n");
    text.push_str("  quit     終了\n");
    text.push('\n');
    let _ = writeln!(text, "  education:    {}", keys(Education::ALL, Education::as_str));
    let _ = writeln!(text, "  experience:   {}", keys(Experience::ALL, Experience::as_str));
    let _ = writeln!(
        text,
        "  job-category: {}",
        keys(JobCategory::ALL, JobCategory::as_str)
    );
    let _ = writeln!(text, "  industry:     {}", keys(Industry::ALL, Industry::as_str));
    text
}
