//! HTTP client for the upload node.

use std::time::Duration;

use reqwest::Client;

use crate::error::StorageError;
use crate::storage::retry::UploadRetry;
use crate::storage::{gateway_uri, UploadReceipt};

/// Client for one upload node + gateway pair.
pub struct StorageClient {
    node_url: String,
    gateway_url: String,
    client: Client,
    retry: UploadRetry,
}

impl StorageClient {
    pub fn new(node_url: &str, gateway_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            node_url: node_url.trim_end_matches('/').to_string(),
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
            client,
            retry: UploadRetry::default(),
        }
    }

    pub fn with_retry(mut self, retry: UploadRetry) -> Self {
        self.retry = retry;
        self
    }

    /// Upload raw bytes; returns the gateway URI of the stored content.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let url = format!("{}/upload", self.node_url);
        tracing::info!(url = %url, size = bytes.len(), content_type, "uploading content");

        let receipt = self
            .send_with_retry(&url, bytes, content_type)
            .await?;
        let uri = gateway_uri(&self.gateway_url, &receipt.id);
        tracing::info!(uri = %uri, "upload complete");
        Ok(uri)
    }

    /// Serialize a document as JSON and upload it; returns the gateway URI.
    pub async fn upload_json<T: serde::Serialize>(
        &self,
        document: &T,
    ) -> Result<String, StorageError> {
        let body = serde_json::to_vec(document)
            .map_err(|e| StorageError::BadReceipt(format!("unserializable document: {e}")))?;
        self.upload(body, "application/json").await
    }

    async fn send_with_retry(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadReceipt, StorageError> {
        let mut last_error = None;

        for attempt in 0..=self.retry.max_retries {
            match self.send_once(url, bytes.clone(), content_type).await {
                Ok(receipt) => return Ok(receipt),
                Err(e) => {
                    let should_retry = match &e {
                        StorageError::ServerError { status, .. } => {
                            self.retry.retryable_statuses.contains(status)
                        }
                        StorageError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                tokio::time::sleep(Duration::from_millis(*ms)).await;
                            }
                            true
                        }
                        StorageError::Timeout => true,
                        StorageError::Reqwest(re) => {
                            re.is_connect() || re.is_timeout() || re.is_request()
                        }
                        _ => false,
                    };

                    if should_retry && attempt < self.retry.max_retries {
                        let delay = self.retry.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = self.retry.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "retrying upload to {}",
                            url
                        );
                        tokio::time::sleep(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(StorageError::MaxRetriesExceeded {
            attempts: self.retry.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn send_once(
        &self,
        url: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadReceipt, StorageError> {
        let resp = self
            .client
            .post(url)
            .header("Content-Type", content_type)
            .body(bytes)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return resp
                .json::<UploadReceipt>()
                .await
                .map_err(|e| StorageError::BadReceipt(e.to_string()));
        }

        let status_code = status.as_u16();
        let body = resp.text().await.unwrap_or_default();
        match status_code {
            429 => Err(StorageError::RateLimited {
                retry_after_ms: None,
            }),
            _ => Err(StorageError::ServerError {
                status: status_code,
                body,
            }),
        }
    }
}

impl Clone for StorageClient {
    fn clone(&self) -> Self {
        Self {
            node_url: self.node_url.clone(),
            gateway_url: self.gateway_url.clone(),
            client: self.client.clone(),
            retry: self.retry.clone(),
        }
    }
}
