/// Format of a minute bucket key, always rendered from UTC fields.
pub const MINUTE_BUCKET_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Bracketed access-log timestamp, e.g. `10/Oct/2023:13:55:36`.
pub const BRACKETED_TIMESTAMP_FORMAT: &str = "%d/%b/%Y:%H:%M:%S";

/// Same as [`BRACKETED_TIMESTAMP_FORMAT`] with a trailing offset, e.g. `+0200`.
pub const BRACKETED_TIMESTAMP_WITH_OFFSET_FORMAT: &str = "%d/%b/%Y:%H:%M:%S %z";

pub const ENDPOINT_COUNTS_FILE: &str = "endpoint_call_counts.txt";
pub const MINUTE_COUNTS_FILE: &str = "api_calls_per_minute.txt";
pub const STATUS_COUNTS_FILE: &str = "api_calls_by_status_code.txt";

pub const ENDPOINT_COUNTS_HEADER: &[&str] = &["Endpoint", "Call Count"];
pub const MINUTE_COUNTS_HEADER: &[&str] = &["Minute", "Call Count"];
pub const STATUS_COUNTS_HEADER: &[&str] = &["Status", "Status Code", "Call Count"];
