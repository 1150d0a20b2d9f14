use crate::analysis::bucket::{minute_bucket, parse_bracketed_timestamp, parse_plain_timestamp};
use crate::analysis::counter::Counter;
use crate::analysis::extract::{extract_plain_timestamp, extract_request};
use crate::analysis::types::BucketSource;
use serde::Serialize;
use tracing::{debug, warn};

/// Running counts for one pass over a log.
///
/// Owns every counter; nothing is shared or global. Call [`Aggregator::push`]
/// once per line and [`Aggregator::finish`] when the pass is done.
#[derive(Debug, Clone)]
pub struct Aggregator {
    bucket_source: BucketSource,
    endpoints: Counter,
    statuses: Counter,
    minutes: Counter,
    stats: ScanStats,
}

/// Line level bookkeeping, reported once at the end of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    pub lines: u64,
    pub requests: u64,
    pub bucketed: u64,
    pub rejected_timestamps: u64,
}

impl ScanStats {
    fn merge(&mut self, other: &ScanStats) {
        self.lines += other.lines;
        self.requests += other.requests;
        self.bucketed += other.bucketed;
        self.rejected_timestamps += other.rejected_timestamps;
    }
}

/// Frozen result of a pass. Read-only from here on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tallies {
    pub endpoints: Counter,
    pub statuses: Counter,
    pub minutes: Counter,
    #[serde(skip)]
    pub stats: ScanStats,
}

impl Aggregator {
    pub fn new(bucket_source: BucketSource) -> Self {
        Self {
            bucket_source,
            endpoints: Counter::new(),
            statuses: Counter::new(),
            minutes: Counter::new(),
            stats: ScanStats::default(),
        }
    }

    /// Fold one line into the counts. `line_no` is 1-based and only used for
    /// diagnostics.
    pub fn push(&mut self, line_no: usize, line: &str) {
        self.stats.lines += 1;

        let request = extract_request(line);

        if let Some(req) = &request {
            self.stats.requests += 1;
            self.endpoints.increment(req.endpoint);
            self.statuses.increment(req.status_code);
        }

        let bucket = match self.bucket_source {
            BucketSource::Plain => extract_plain_timestamp(line).map(parse_plain_timestamp),
            BucketSource::Bracketed => request
                .and_then(|req| req.raw_timestamp)
                .map(parse_bracketed_timestamp),
        };

        match bucket {
            Some(Ok(ts)) => {
                self.stats.bucketed += 1;
                self.minutes.increment(&minute_bucket(ts));
            }
            Some(Err(e)) => {
                // Only this line's bucket is skipped.
                self.stats.rejected_timestamps += 1;
                warn!(line = line_no, error = %e, "skipping minute bucket");
            }
            None => {}
        }
    }

    /// Fold a whole log held in memory.
    pub fn push_text(&mut self, text: &str) {
        for (i, line) in text.lines().enumerate() {
            self.push(i + 1, line);
        }
    }

    /// Add the counts of an aggregator that scanned a different part of the
    /// log. Counts are summed per key.
    pub fn merge(&mut self, other: &Aggregator) {
        self.endpoints.merge(&other.endpoints);
        self.statuses.merge(&other.statuses);
        self.minutes.merge(&other.minutes);
        self.stats.merge(&other.stats);
    }

    pub fn finish(self) -> Tallies {
        debug!(
            endpoints = self.endpoints.len(),
            statuses = self.statuses.len(),
            minutes = self.minutes.len(),
            "aggregation finished"
        );

        Tallies {
            endpoints: self.endpoints,
            statuses: self.statuses,
            minutes: self.minutes,
            stats: self.stats,
        }
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(BucketSource::default())
    }
}

/// Run a fresh aggregation over `text`.
pub fn analyze(text: &str, bucket_source: BucketSource) -> Tallies {
    let mut agg = Aggregator::new(bucket_source);
    agg.push_text(text);
    agg.finish()
}
