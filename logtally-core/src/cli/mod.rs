pub mod analyze;
pub mod config;

pub use analyze::{AnalyzeArgs, AnalyzeOutcome, AnalyzeSettings, analyze_file, run_analyze};
