//! Report shaping and output.
//!
//! [`Report`] is built once from frozen [`Tallies`](crate::analysis::Tallies)
//! and then rendered as console tables, JSON, or the three tab-delimited
//! report files.

mod files;
mod shape;
mod table;

#[cfg(test)]
mod tests;

pub use files::{render_delimited, write_reports};
pub use shape::{CountRow, Report, StatusRow};
pub use table::{render_json, render_tables};
