use crate::analysis::{
    Counter, ENDPOINT_COUNTS_HEADER, MINUTE_COUNTS_HEADER, STATUS_COUNTS_HEADER, Tallies,
    status_name,
};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountRow {
    pub key: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusRow {
    pub name: &'static str,
    pub status_code: String,
    pub count: u64,
}

/// The three datasets, in first-seen order, ready for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub endpoints: Vec<CountRow>,
    pub minutes: Vec<CountRow>,
    pub statuses: Vec<StatusRow>,
}

impl Report {
    pub fn from_tallies(tallies: &Tallies) -> Self {
        let rows = |c: &Counter| -> Vec<CountRow> {
            c.iter()
                .map(|(key, count)| CountRow {
                    key: key.to_string(),
                    count,
                })
                .collect()
        };

        Self {
            endpoints: rows(&tallies.endpoints),
            minutes: rows(&tallies.minutes),
            statuses: tallies
                .statuses
                .iter()
                .map(|(code, count)| StatusRow {
                    name: status_name(code),
                    status_code: code.to_string(),
                    count,
                })
                .collect(),
        }
    }

    pub(crate) fn endpoint_cells(&self) -> (&'static [&'static str], Vec<Vec<String>>) {
        (ENDPOINT_COUNTS_HEADER, count_cells(&self.endpoints))
    }

    pub(crate) fn minute_cells(&self) -> (&'static [&'static str], Vec<Vec<String>>) {
        (MINUTE_COUNTS_HEADER, count_cells(&self.minutes))
    }

    pub(crate) fn status_cells(&self) -> (&'static [&'static str], Vec<Vec<String>>) {
        let rows = self
            .statuses
            .iter()
            .map(|r| vec![r.name.to_string(), r.status_code.clone(), r.count.to_string()])
            .collect();
        (STATUS_COUNTS_HEADER, rows)
    }
}

fn count_cells(rows: &[CountRow]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| vec![r.key.clone(), r.count.to_string()])
        .collect()
}
