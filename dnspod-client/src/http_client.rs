//! HTTP transport
//!
//! The client core only needs "POST this form to this action path and give
//! me the body". [`Transport`] is that seam; [`HttpTransport`] implements it
//! with reqwest. Retries, rate limiting and caching are left to the caller.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;

use crate::codec::Payload;
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::utils::log_sanitizer::{redact_form, truncate_for_log};

/// Executes one form POST against the API.
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `form` to the action `path` (e.g. `Record.List`) and return the
    /// body of a 2xx response.
    ///
    /// Network failures, timeouts and non-2xx statuses are errors here; the
    /// body is not interpreted.
    async fn post_form(&self, path: &str, form: &Payload) -> Result<String>;
}

/// reqwest-backed [`Transport`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::Config {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, path: &str, form: &Payload) -> Result<String> {
        let url = self.config.url_for(path);
        log::debug!("[dnspod] POST {url}");
        log::trace!("[dnspod] Request Form: {}", redact_form(form.iter()));

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .form(form.as_pairs())
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ClientError::Timeout {
                        detail: e.to_string(),
                    }
                } else {
                    ClientError::Network {
                        detail: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        log::debug!("[dnspod] Response Status: {}", status.as_u16());

        if !status.is_success() {
            // 状态码优先：读取 body 失败时仍返回 HttpStatus
            let message = match response.text().await {
                Ok(body) => {
                    log::debug!("[dnspod] Response Body: {}", truncate_for_log(&body));
                    error_message(&body)
                }
                Err(e) => {
                    log::debug!("[dnspod] Failed to read error body: {e}");
                    String::new()
                }
            };
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                message
            };
            return Err(ClientError::HttpStatus {
                url,
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(|e| ClientError::Network {
            detail: format!("Failed to read response body: {e}"),
        })?;
        log::debug!("[dnspod] Response Body: {}", truncate_for_log(&body));

        Ok(body)
    }
}

/// Message to report for a non-2xx body.
///
/// Prefers a top-level `message`, then `status.message`, then the truncated
/// raw body. An empty result makes the caller fall back to the reason phrase.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| value.pointer("/status/message").and_then(Value::as_str));
        if let Some(message) = message {
            return message.to_string();
        }
    }
    truncate_for_log(body.trim())
}
