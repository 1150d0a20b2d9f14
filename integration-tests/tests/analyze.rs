use integration_tests::harness::LogDir;
use logtally_core::analysis::{
    AnalyzeError, BucketSource, ENDPOINT_COUNTS_FILE, MINUTE_COUNTS_FILE, STATUS_COUNTS_FILE,
};
use logtally_core::cli::{AnalyzeArgs, run_analyze};
use logtally_core::conf::{ConfigError, OutputFormat};
use pretty_assertions::assert_eq;
use std::fs;

const ENDPOINTS: &str = "Endpoint\tCall Count
/api/users\t2
/api/users/42\t3
/api/login\t2
/static/app.js\t1
/favicon.ico\t1
/health\t1
";

const STATUSES: &str = "Status\tStatus Code\tCall Count
OK\t200\t4
Unauthorized\t401\t1
Not Modified\t304\t1
Partial Content\t206\t1
Not Found\t404\t1
Unprocessable Entity\t422\t1
Server Error\t500\t1
";

/// The fixture log produces all three report files
#[test]
fn writes_reports_for_fixture_log() {
    let dir = LogDir::fixture("access.log");

    let outcome = dir.analyze(&dir.args());

    assert_eq!(outcome.written.len(), 3);
    assert_eq!(dir.read(ENDPOINT_COUNTS_FILE), ENDPOINTS);
    assert_eq!(dir.read(STATUS_COUNTS_FILE), STATUSES);
    assert_eq!(
        dir.read(MINUTE_COUNTS_FILE),
        "Minute\tCall Count\n2023-10-10 13:55\t1\n2023-10-10 13:56\t1\n2023-10-10 13:57\t1\n"
    );
    assert_eq!(outcome.stats.lines, 14);
    assert_eq!(outcome.stats.requests, 10);
}

/// A logtally.toml in the working directory is picked up
#[test]
fn config_file_selects_bracketed_buckets() {
    let dir = LogDir::fixture("access.log");
    fs::write(
        dir.path().join("logtally.toml"),
        "[analysis]\nbucket_source = \"bracketed\"\n",
    )
    .unwrap();

    dir.analyze(&dir.args());

    assert_eq!(
        dir.read(MINUTE_COUNTS_FILE),
        "Minute\tCall Count
2023-10-10 13:55\t3
2023-10-10 13:56\t4
2023-10-10 13:57\t2
2023-10-10 13:58\t1
"
    );
    // Endpoint and status counts do not depend on the bucket source.
    assert_eq!(dir.read(ENDPOINT_COUNTS_FILE), ENDPOINTS);
}

/// Command line flags win over the config file
#[test]
fn flags_override_config_file() {
    let dir = LogDir::fixture("access.log");
    fs::write(
        dir.path().join("logtally.toml"),
        "[analysis]\nbucket_source = \"bracketed\"\n[output]\ndir = \"ignored\"\n",
    )
    .unwrap();

    let args = AnalyzeArgs {
        bucket_source: Some(BucketSource::Plain),
        out_dir: Some("reports".into()),
        ..dir.args()
    };
    let outcome = dir.analyze(&args);

    assert!(!dir.exists("ignored"));
    assert_eq!(outcome.written[0], dir.path().join("reports").join(ENDPOINT_COUNTS_FILE));
    assert_eq!(
        dir.read("reports/api_calls_per_minute.txt").lines().count(),
        4
    );
}

#[test]
fn no_write_leaves_directory_untouched() {
    let dir = LogDir::fixture("access.log");
    let args = AnalyzeArgs {
        no_write: true,
        format: Some(OutputFormat::Json),
        ..dir.args()
    };

    let outcome = dir.analyze(&args);

    assert!(outcome.written.is_empty());
    assert_eq!(outcome.report.endpoints.len(), 6);
    assert!(!dir.exists(ENDPOINT_COUNTS_FILE));
    assert!(!dir.exists(MINUTE_COUNTS_FILE));
    assert!(!dir.exists(STATUS_COUNTS_FILE));
}

#[test]
fn missing_path_is_usage_error() {
    let dir = LogDir::with_contents("");

    let err = run_analyze(&AnalyzeArgs::default(), dir.path()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AnalyzeError>(),
        Some(AnalyzeError::MissingInputPath)
    ));
    assert!(!dir.exists(ENDPOINT_COUNTS_FILE));
}

#[test]
fn unreadable_log_writes_nothing() {
    let dir = LogDir::with_contents("");
    let args = AnalyzeArgs {
        path: Some(dir.path().join("missing.log")),
        ..AnalyzeArgs::default()
    };

    let err = run_analyze(&args, dir.path()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AnalyzeError>(),
        Some(AnalyzeError::FileRead { .. })
    ));
    assert!(!dir.exists(ENDPOINT_COUNTS_FILE));
    assert!(!dir.exists(MINUTE_COUNTS_FILE));
    assert!(!dir.exists(STATUS_COUNTS_FILE));
}

#[test]
fn broken_config_aborts_before_reading() {
    let dir = LogDir::fixture("access.log");
    fs::write(dir.path().join("logtally.toml"), "[analysis\n").unwrap();

    let err = run_analyze(&dir.args(), dir.path()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AnalyzeError>(),
        Some(AnalyzeError::Config(_))
    ));
    assert!(!dir.exists(ENDPOINT_COUNTS_FILE));
}

/// `output.dir` naming a file in the working directory is a config error
#[test]
fn output_dir_file_in_working_dir_is_config_error() {
    let dir = LogDir::fixture("access.log");
    fs::write(dir.path().join("reports"), "").unwrap();
    fs::write(
        dir.path().join("logtally.toml"),
        "[output]\ndir = \"reports\"\n",
    )
    .unwrap();

    let err = run_analyze(&dir.args(), dir.path()).unwrap_err();

    assert!(matches!(
        err.downcast_ref::<AnalyzeError>(),
        Some(AnalyzeError::Config(ConfigError::OutputDirNotADirectory { .. }))
    ));
    assert!(!dir.exists(ENDPOINT_COUNTS_FILE));
}

#[test]
fn empty_log_writes_header_only_reports() {
    let dir = LogDir::with_contents("");

    let outcome = dir.analyze(&dir.args());

    assert!(outcome.report.endpoints.is_empty());
    assert_eq!(dir.read(ENDPOINT_COUNTS_FILE), "Endpoint\tCall Count\n");
    assert_eq!(dir.read(MINUTE_COUNTS_FILE), "Minute\tCall Count\n");
    assert_eq!(
        dir.read(STATUS_COUNTS_FILE),
        "Status\tStatus Code\tCall Count\n"
    );
}

#[test]
fn relative_log_path_resolves_against_working_dir() {
    let dir = LogDir::fixture("access.log");
    let args = AnalyzeArgs {
        path: Some("access.log".into()),
        no_write: true,
        ..AnalyzeArgs::default()
    };

    let outcome = dir.analyze(&args);

    assert_eq!(outcome.stats.lines, 14);
    assert!(dir.log().is_file());
}
