/// TTL sent with every record update, as the provider API expects it.
pub const RECORD_TTL: &str = "600";

/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
