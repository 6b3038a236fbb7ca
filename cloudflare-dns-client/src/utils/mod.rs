//! Utility modules.

/// RFC3339 timestamp helpers for record payloads.
pub mod datetime;

/// `null`-tolerant field decoding.
pub mod nullable;

/// Keeps response bodies and API keys out of logs in full.
pub mod log_sanitizer;
