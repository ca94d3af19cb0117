//! 日志脱敏
//!
//! Two things leave this crate as text: the outgoing form (trace log) and the
//! provider's response body (debug log, `HttpStatus` message). The form's
//! `login_token` is masked and bodies are capped at `TRUNCATE_LIMIT` bytes.

/// Maximum number of bytes to include in truncated output.
const TRUNCATE_LIMIT: usize = 256;

/// Form keys whose values must never reach a log line.
const SENSITIVE_KEYS: &[&str] = &["login_token"];

/// Cap a response body at `TRUNCATE_LIMIT` bytes, cut on a char boundary,
/// with the full length appended.
pub fn truncate_for_log(body: &str) -> String {
    if body.len() <= TRUNCATE_LIMIT {
        return body.to_string();
    }
    let mut cut = TRUNCATE_LIMIT;
    while !body.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}... [truncated, total {} bytes]", &body[..cut], body.len())
}

/// Render form pairs as `k=v&k=v` with credential values masked.
pub fn redact_form<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    pairs
        .into_iter()
        .map(|(key, value)| {
            if SENSITIVE_KEYS.contains(&key) {
                format!("{key}=***")
            } else {
                format!("{key}={value}")
            }
        })
        .collect::<Vec<_>>()
        .join("&")
}
