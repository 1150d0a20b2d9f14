use logtally_core::cli::{AnalyzeArgs, AnalyzeOutcome, run_analyze};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch working directory holding one access log.
///
/// Each test gets its own directory, so runs are parallel-safe.
pub struct LogDir {
    dir: TempDir,
    log: PathBuf,
}

impl LogDir {
    /// Working directory with `access.log` containing `contents`.
    pub fn with_contents(contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let log = dir.path().join("access.log");
        fs::write(&log, contents).expect("failed to write log");
        Self { dir, log }
    }

    /// Working directory with a copy of `integration-tests/fixtures/<name>`.
    pub fn fixture(name: &str) -> Self {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("fixtures")
            .join(name);
        let contents = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()));
        Self::with_contents(&contents)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn log(&self) -> &Path {
        &self.log
    }

    /// Arguments that analyze this directory's log.
    pub fn args(&self) -> AnalyzeArgs {
        AnalyzeArgs {
            path: Some(self.log.clone()),
            ..AnalyzeArgs::default()
        }
    }

    pub fn analyze(&self, args: &AnalyzeArgs) -> AnalyzeOutcome {
        run_analyze(args, self.path()).expect("analysis failed")
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path().join(name))
            .unwrap_or_else(|e| panic!("failed to read {name}: {e}"))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path().join(name).exists()
    }
}
