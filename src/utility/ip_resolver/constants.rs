/// HTTP client settings
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
