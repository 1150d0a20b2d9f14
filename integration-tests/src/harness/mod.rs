pub mod log_dir;
pub mod tracing;

pub use log_dir::LogDir;
pub use tracing::{CapturedEvent, captured_events, init_test_tracing};
