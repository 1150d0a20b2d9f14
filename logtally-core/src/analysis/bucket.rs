use crate::analysis::constants::{
    BRACKETED_TIMESTAMP_FORMAT, BRACKETED_TIMESTAMP_WITH_OFFSET_FORMAT, MINUTE_BUCKET_FORMAT,
};
use crate::analysis::error::AnalyzeError;
use chrono::{DateTime, NaiveDateTime, Utc};

const PLAIN_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Render a timestamp as its minute bucket key (`YYYY-MM-DD HH:MM`, UTC).
pub fn minute_bucket(ts: DateTime<Utc>) -> String {
    ts.format(MINUTE_BUCKET_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD HH:MM` timestamp. Plain timestamps carry no offset and
/// are taken to be UTC.
pub fn parse_plain_timestamp(input: &str) -> Result<DateTime<Utc>, AnalyzeError> {
    NaiveDateTime::parse_from_str(input.trim(), PLAIN_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| AnalyzeError::date_parse(input))
}

/// Parse an access-log timestamp such as `10/Oct/2023:13:55:36 +0200`.
///
/// The offset is optional; when present the result is shifted to UTC, when
/// absent the timestamp is taken to be UTC already.
pub fn parse_bracketed_timestamp(input: &str) -> Result<DateTime<Utc>, AnalyzeError> {
    let input_trimmed = input.trim();

    if let Ok(ts) = DateTime::parse_from_str(input_trimmed, BRACKETED_TIMESTAMP_WITH_OFFSET_FORMAT)
    {
        return Ok(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(input_trimmed, BRACKETED_TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| AnalyzeError::date_parse(input))
}
