//! Utility modules.

/// Parsing of the provider's timestamp text.
pub mod datetime;

/// Number-or-string tolerant decoding helpers.
pub mod lenient;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
