//! Access Log Analysis
//!
//! This module turns the raw text of an access log into three sets of counts:
//! calls per endpoint, calls per HTTP status code and calls per minute.
//!
//! Every line is looked at on its own. A line can look like a request
//! (`"GET /api/users HTTP/1.1" 200`), it can carry a timestamp, it can do both
//! or it can do neither. Lines that match nothing are simply skipped; they are
//! not errors.
//!
//! Counting is order independent: feeding the same lines in a different order
//! gives the same counts, and two partial counts over separate chunks of a log
//! can be merged by adding them up key by key.
//!
//! The overall data processing architecture is:
//!
//! file contents
//! extract_request / extract_plain_timestamp
//! RequestLine
//! Aggregator
//! Tallies
//! Report
//!

mod aggregation;
mod bucket;
mod constants;
mod counter;
mod error;
mod extract;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use aggregation::{Aggregator, ScanStats, Tallies, analyze};
pub use bucket::{minute_bucket, parse_bracketed_timestamp, parse_plain_timestamp};
pub use constants::*;
pub use counter::Counter;
pub use error::AnalyzeError;
pub use extract::{extract_bracketed_timestamp, extract_plain_timestamp, extract_request};
pub use status::status_name;
pub use types::{BucketSource, RequestLine};
