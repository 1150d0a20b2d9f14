use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The request part of one access-log line.
///
/// Borrowed from the line it was extracted from and dropped once that line has
/// been folded into the counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestLine<'a> {
    pub method: &'a str,
    pub endpoint: &'a str,
    /// status is kept as text; it is a map key, never arithmetic
    pub status_code: &'a str,
    /// Text between the first `[` and the following `]`, if any.
    pub raw_timestamp: Option<&'a str>,
}

/// Where the minute bucket of a line comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketSource {
    /// First `YYYY-MM-DD HH:MM` substring found anywhere in the line.
    #[default]
    Plain,
    /// The `[10/Oct/2023:13:55:36]` timestamp of a request line.
    Bracketed,
}

impl FromStr for BucketSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(Self::Plain),
            "bracketed" => Ok(Self::Bracketed),
            _ => Err(format!(
                "invalid bucket source '{s}' (expected 'plain' or 'bracketed')"
            )),
        }
    }
}

impl fmt::Display for BucketSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("plain"),
            Self::Bracketed => f.write_str("bracketed"),
        }
    }
}
