//! 日期时间解析工具
//!
//! DNSPod 以 `YYYY-MM-DD HH:MM:SS`（北京时间，无时区标记）返回时间字段。

use chrono::NaiveDateTime;

/// Wire format of every timestamp the provider returns.
pub const API_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Parse a provider timestamp, `None` when empty or malformed.
pub fn parse_api_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, API_TIMESTAMP_FORMAT).ok()
}
