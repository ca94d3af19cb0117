//! Response envelope decoding
//!
//! Every body has the shape `{"status": {"code", "message", "created_at"}, ...}`
//! with the payload under an action-specific key (`domain`, `records`,
//! `info`, `line_ids`, ...). Decoding happens in three steps, each with its
//! own failure:
//!
//! 1. body → JSON value ([`ClientError::Decode`])
//! 2. status check ([`ClientError::Api`] unless `status.code == "1"`)
//! 3. payload key → typed value ([`ClientError::Decode`])

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ClientError, Result};
use crate::utils::datetime::parse_api_timestamp;
use crate::utils::lenient::{self, LooseValue};

/// `status.code` of a successful call.
pub const SUCCESS_CODE: &str = "1";

/// The `status` block of every response.
///
/// `code` keeps its wire shape: only the JSON string `"1"` is success, a
/// numeric `1` is not.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub code: LooseValue,
    #[serde(deserialize_with = "lenient::text")]
    pub message: String,
    #[serde(deserialize_with = "lenient::text")]
    pub created_at: String,
}

impl Status {
    pub fn is_success(&self) -> bool {
        self.code.as_text() == Some(SUCCESS_CODE)
    }

    /// `code` rendered as text, `""` when it has no text form.
    pub fn code_text(&self) -> String {
        self.code.clone().into_canonical_text().unwrap_or_default()
    }

    pub fn created_at_time(&self) -> Option<NaiveDateTime> {
        parse_api_timestamp(&self.created_at)
    }
}

/// A decoded response body whose status has not been judged yet.
#[derive(Debug, Clone)]
pub struct Envelope {
    status: Option<Status>,
    body: Value,
}

impl Envelope {
    /// Parse a response body. Only malformed JSON fails here.
    pub fn parse(text: &str) -> Result<Self> {
        let body: Value = serde_json::from_str(text).map_err(ClientError::decode)?;
        // 缺失或格式错误的 status 一律视为失败，留到 check 阶段报告
        let status = body
            .get("status")
            .and_then(|s| Status::deserialize(s).ok());
        Ok(Self { status, body })
    }

    pub fn status(&self) -> Option<&Status> {
        self.status.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.status.as_ref().is_some_and(Status::is_success)
    }

    /// Turn a non-success status into [`ClientError::Api`] prefixed with `context`.
    pub fn check(self, context: &str) -> Result<Self> {
        match &self.status {
            Some(status) if status.is_success() => Ok(self),
            Some(status) => Err(ClientError::Api {
                context: context.to_string(),
                code: status.code_text(),
                message: status.message.clone(),
            }),
            None => Err(ClientError::Api {
                context: context.to_string(),
                code: String::new(),
                message: "missing or malformed status in response".to_string(),
            }),
        }
    }

    /// Decode the value at `key`; a missing or `null` key is a decode error.
    pub fn required<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        match self.body.get(key) {
            None | Some(Value::Null) => {
                Err(ClientError::decode(format!("missing `{key}` in response")))
            }
            Some(value) => T::deserialize(value)
                .map_err(|e| ClientError::decode(format!("invalid `{key}`: {e}"))),
        }
    }

    /// Decode the value at `key`, falling back to `T::default()` when missing or `null`.
    pub fn optional<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        match self.body.get(key) {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => T::deserialize(value)
                .map_err(|e| ClientError::decode(format!("invalid `{key}`: {e}"))),
        }
    }
}
