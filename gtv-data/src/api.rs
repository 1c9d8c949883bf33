//! Native dataset loader built on `reqwest`.
//!
//! One request, no retries: a non-success status becomes
//! [`FetchError::Status`], transport failures become [`FetchError::Network`].

use log::{info, warn};
use reqwest::Client;

use crate::dataset::Dataset;
use crate::error::FetchError;

/// Fetch the raw response body, failing on any non-success status.
pub async fn fetch_body(client: &Client, url: &str) -> Result<String, FetchError> {
    info!("Fetching dataset from {}", url);
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        warn!("Bad response status for {}: {}", url, status);
        return Err(FetchError::Status {
            status: status.as_u16(),
        });
    }

    response
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))
}

/// Fetch and decode the dataset.
pub async fn fetch_dataset(client: &Client, url: &str) -> Result<Dataset, FetchError> {
    let body = fetch_body(client, url).await?;
    Dataset::from_json(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve a single canned HTTP response on an ephemeral port.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/global-temperature.json", addr)
    }

    #[tokio::test]
    async fn server_error_carries_status() {
        let url = serve_once("500 Internal Server Error", "").await;
        let err = fetch_dataset(&Client::new(), &url).await.unwrap_err();
        assert_eq!(err, FetchError::Status { status: 500 });
    }

    #[tokio::test]
    async fn success_decodes_dataset() {
        let url = serve_once(
            "200 OK",
            r#"{"baseTemperature":8.66,"monthlyVariance":[{"year":1800,"month":6,"variance":0.5}]}"#,
        )
        .await;
        let dataset = fetch_dataset(&Client::new(), &url).await.unwrap();
        assert_eq!(dataset.len(), 1);
        assert_eq!(dataset.base_temperature, 8.66);
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let url = serve_once("200 OK", "not json").await;
        let err = fetch_dataset(&Client::new(), &url).await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
