//! Client configuration: the common parameter base and transport settings.

use std::env;

use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://dnsapi.cn/";
/// 默认连接超时（秒）
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Parameters sent with every request.
///
/// Built once per client and shared read-only by all calls. Only non-empty
/// values are encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonParams {
    /// `"<api id>,<api token>"`.
    pub login_token: String,
    /// Response format, `json` unless overridden.
    #[serde(default = "default_format")]
    pub format: String,
    /// Message language (`en` / `cn`).
    #[serde(default)]
    pub lang: String,
    /// Whether an empty result set is reported as an error (`yes` / `no`).
    #[serde(default)]
    pub error_on_empty: String,
    /// Act on behalf of a sub-account.
    #[serde(default)]
    pub user_id: String,
}

fn default_format() -> String {
    "json".to_string()
}

impl CommonParams {
    pub fn new(login_token: impl Into<String>) -> Self {
        Self {
            login_token: login_token.into(),
            format: default_format(),
            lang: String::new(),
            error_on_empty: String::new(),
            user_id: String::new(),
        }
    }

    /// Read `DNSPOD_LOGIN_TOKEN` (required), `DNSPOD_LANG` and `DNSPOD_USER_ID`.
    pub fn from_env() -> Result<Self> {
        let login_token = env::var("DNSPOD_LOGIN_TOKEN").map_err(|e| ClientError::Config {
            detail: format!("DNSPOD_LOGIN_TOKEN: {e}"),
        })?;
        let mut params = Self::new(login_token);
        params.lang = env::var("DNSPOD_LANG").unwrap_or_default();
        params.user_id = env::var("DNSPOD_USER_ID").unwrap_or_default();
        Ok(params)
    }

    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    #[must_use]
    pub fn error_on_empty(mut self, value: impl Into<String>) -> Self {
        self.error_on_empty = value.into();
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Key/value pairs in encoding order.
    pub(crate) fn pairs(&self) -> [(&'static str, &str); 5] {
        [
            ("login_token", self.login_token.as_str()),
            ("format", self.format.as_str()),
            ("lang", self.lang.as_str()),
            ("error_on_empty", self.error_on_empty.as_str()),
            ("user_id", self.user_id.as_str()),
        ]
    }
}

/// Transport settings for [`HttpTransport`](crate::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Endpoint the action path is appended to.
    pub base_url: String,
    /// `User-Agent` header value.
    pub user_agent: String,
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("dnspod-client/{}", env!("CARGO_PKG_VERSION")),
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    /// Join the base URL and an action path with exactly one `/`.
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}
