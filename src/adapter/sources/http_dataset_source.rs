//! HTTP Dataset Source
//!
//! DatasetSourceのHTTP実装

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use std::error::Error as StdError;
use std::time::Duration;

use crate::adapter::document::SalaryDataDocument;
use crate::domain::entities::reference_dataset::ReferenceDataset;
use crate::domain::errors::DataLoadError;
use crate::domain::repositories::dataset_source::DatasetSource;

/// URLからデータセットを取得する取得元
pub struct HttpDatasetSource {
    url: String,
    client: reqwest::Client,
}

impl HttpDatasetSource {
    /// 新しい取得元を作成
    ///
    /// # Errors
    ///
    /// HTTPクライアントの初期化に失敗した場合に `DataLoadError::Transport` を返す
    pub fn new(url: &str, timeout: Duration) -> Result<Self, DataLoadError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataLoadError::Transport(error_chain_to_string(&e)))?;

        Ok(Self {
            url: url.to_string(),
            client,
        })
    }
}

/// HTTPステータスを分類する（成功なら `None`）
pub fn classify_status(status: StatusCode, url: &str) -> Option<DataLoadError> {
    if status.is_success() {
        None
    } else if status == StatusCode::NOT_FOUND {
        Some(DataLoadError::NotFound(format!("{} (HTTP 404)", url)))
    } else {
        Some(DataLoadError::Transport(format!(
            "HTTP error! status: {} ({})",
            status, url
        )))
    }
}

/// エラーチェーン全体を文字列化する
fn error_chain_to_string(e: &(dyn StdError + 'static)) -> String {
    let mut messages = vec![e.to_string()];
    let mut source = e.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages.join(" | ")
}

#[async_trait]
impl DatasetSource for HttpDatasetSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<ReferenceDataset, DataLoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| DataLoadError::Transport(error_chain_to_string(&e)))?;

        let status = response.status();
        debug!("GET {} -> {}", self.url, status);

        if let Some(err) = classify_status(status, &self.url) {
            return Err(err);
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| DataLoadError::Transport(error_chain_to_string(&e)))?;
        debug!("Raw response length: {}", body.len());

        SalaryDataDocument::parse_slice(&body)?.into_dataset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::document::tests::MINIMAL_DOCUMENT;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn http_response(status_line: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        )
    }

    /// 1回だけ固定レスポンスを返すサーバーを起動し、URLを返す
    async fn serve_once(response: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });

        format!("http://{}/salary-data.json", addr)
    }

    fn source(url: &str) -> HttpDatasetSource {
        HttpDatasetSource::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let url = serve_once(http_response("200 OK", MINIMAL_DOCUMENT)).await;

        let dataset = source(&url).fetch().await.unwrap();

        assert_eq!(dataset, crate::test_support::sample_dataset());
    }

    #[tokio::test]
    async fn test_fetch_not_found() {
        let url = serve_once(http_response("404 Not Found", "")).await;

        let err = source(&url).fetch().await.unwrap_err();

        assert!(matches!(err, DataLoadError::NotFound(msg) if msg.contains("404")));
    }

    #[tokio::test]
    async fn test_fetch_server_error() {
        let url = serve_once(http_response("500 Internal Server Error", "")).await;

        let err = source(&url).fetch().await.unwrap_err();

        assert!(matches!(err, DataLoadError::Transport(msg) if msg.contains("500")));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let url = serve_once(http_response("200 OK", "<html>oops</html>")).await;

        let err = source(&url).fetch().await.unwrap_err();

        assert!(matches!(err, DataLoadError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let url = format!("http://{}/salary-data.json", addr);
        let err = source(&url).fetch().await.unwrap_err();

        assert!(matches!(err, DataLoadError::Transport(_)));
    }

    #[test]
    fn test_classify_status() {
        assert!(classify_status(StatusCode::OK, "u").is_none());
        assert!(matches!(
            classify_status(StatusCode::NOT_FOUND, "u"),
            Some(DataLoadError::NotFound(_))
        ));
        assert!(matches!(
            classify_status(StatusCode::FORBIDDEN, "u"),
            Some(DataLoadError::Transport(msg)) if msg.contains("403")
        ));
    }
}
