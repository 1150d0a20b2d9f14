use crate::analysis::{AnalyzeError, BucketSource, ScanStats, analyze};
use crate::conf::{LogtallyConfig, OutputFormat, resolve_config};
use crate::report::{Report, render_json, render_tables, write_reports};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Args, Debug, Default, Clone)]
pub struct AnalyzeArgs {
    /// Path to the access log to analyze
    pub path: Option<PathBuf>,

    /// Path to a config file (defaults to ./logtally.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Directory the report files are written to
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Print the reports without writing report files
    #[arg(long)]
    pub no_write: bool,

    /// Timestamp used for per-minute counts: plain or bracketed
    #[arg(long, value_name = "SOURCE")]
    pub bucket_source: Option<BucketSource>,

    /// Console output: table or json
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,
}

/// Effective options after merging the config file with command line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeSettings {
    pub bucket_source: BucketSource,
    pub out_dir: PathBuf,
    pub write_files: bool,
    pub format: OutputFormat,
}

impl AnalyzeArgs {
    /// Flags win over the config file.
    pub fn settings(&self, cfg: &LogtallyConfig) -> AnalyzeSettings {
        AnalyzeSettings {
            bucket_source: self.bucket_source.unwrap_or(cfg.analysis.bucket_source),
            out_dir: self.out_dir.clone().unwrap_or_else(|| cfg.output.dir.clone()),
            write_files: cfg.output.write_files && !self.no_write,
            format: self.format.unwrap_or(cfg.output.format),
        }
    }
}

#[derive(Debug)]
pub struct AnalyzeOutcome {
    pub report: Report,
    pub stats: ScanStats,
    /// Report files written, empty when writing was disabled.
    pub written: Vec<PathBuf>,
}

/// Read the log, count it, print the reports and write the report files.
pub fn run_analyze(args: &AnalyzeArgs, cwd: &Path) -> Result<AnalyzeOutcome> {
    let path = args.path.as_deref().ok_or(AnalyzeError::MissingInputPath)?;
    let cfg = resolve_config(args.config.as_deref(), cwd).map_err(AnalyzeError::from)?;
    let settings = args.settings(&cfg);
    debug!(?settings, "resolved settings");

    let (report, stats) = analyze_file(&cwd.join(path), settings.bucket_source)?;

    let mut stdout = io::stdout().lock();
    match settings.format {
        OutputFormat::Table => {
            let color = stdout.is_terminal();
            write!(stdout, "{}", render_tables(&report, color))?;
        }
        OutputFormat::Json => writeln!(stdout, "{}", render_json(&report)?)?,
    }

    let written = if settings.write_files {
        let written = write_reports(&cwd.join(&settings.out_dir), &report)?;
        if settings.format == OutputFormat::Table {
            writeln!(stdout, "Log data dumped into text files.")?;
        }
        written
    } else {
        Vec::new()
    };
    stdout.flush()?;

    Ok(AnalyzeOutcome {
        report,
        stats,
        written,
    })
}

/// Read and count a whole log file. Nothing is written.
pub fn analyze_file(
    path: &Path,
    bucket_source: BucketSource,
) -> Result<(Report, ScanStats), AnalyzeError> {
    let text = fs::read_to_string(path).map_err(|e| AnalyzeError::file_read(path, e))?;

    let tallies = analyze(&text, bucket_source);

    info!(
        path = %path.display(),
        bucket_source = %bucket_source,
        lines = tallies.stats.lines,
        requests = tallies.stats.requests,
        bucketed = tallies.stats.bucketed,
        rejected_timestamps = tallies.stats.rejected_timestamps,
        "scanned log"
    );

    Ok((Report::from_tallies(&tallies), tallies.stats))
}
