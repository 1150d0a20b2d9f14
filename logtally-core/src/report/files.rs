use crate::analysis::{AnalyzeError, ENDPOINT_COUNTS_FILE, MINUTE_COUNTS_FILE, STATUS_COUNTS_FILE};
use crate::report::shape::Report;
use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::{NamedTempFile, TempPath};
use tracing::{debug, warn};

/// Tab separated text: a header row, then one row per entry.
///
/// Tabs and line breaks inside a cell are written as `\t`, `\n` and `\r` so
/// every row keeps the header's column count.
pub fn render_delimited(header: &[&str], rows: &[Vec<String>]) -> String {
    let mut content = header.join("\t");
    content.push('\n');

    for row in rows {
        let cells: Vec<Cow<'_, str>> = row.iter().map(|c| escape_cell(c)).collect();
        content.push_str(&cells.join("\t"));
        content.push('\n');
    }

    content
}

fn escape_cell(cell: &str) -> Cow<'_, str> {
    if !cell.contains(['\t', '\n', '\r']) {
        return Cow::Borrowed(cell);
    }

    Cow::Owned(
        cell.replace('\t', "\\t")
            .replace('\n', "\\n")
            .replace('\r', "\\r"),
    )
}

/// Write the three report files into `dir`.
///
/// All three are staged as temporary files in `dir` first. They are then
/// renamed into place one by one; files they replace are kept aside until the
/// last rename succeeds. If any step fails, reports already renamed are
/// removed and the files they replaced are put back.
pub fn write_reports(dir: &Path, report: &Report) -> Result<Vec<PathBuf>, AnalyzeError> {
    fs::create_dir_all(dir).map_err(|e| AnalyzeError::write_report(dir, e))?;

    let outputs = [
        (ENDPOINT_COUNTS_FILE, report.endpoint_cells()),
        (MINUTE_COUNTS_FILE, report.minute_cells()),
        (STATUS_COUNTS_FILE, report.status_cells()),
    ];

    let mut staged = Vec::with_capacity(outputs.len());
    for (name, (header, rows)) in &outputs {
        let target = dir.join(name);
        let tmp = stage(dir, &render_delimited(header, rows))
            .map_err(|e| AnalyzeError::write_report(&target, e))?;
        staged.push((tmp, target));
    }

    let mut committed: Vec<(PathBuf, Option<TempPath>)> = Vec::with_capacity(staged.len());
    for (tmp, target) in staged {
        match commit(dir, tmp, &target) {
            Ok(previous) => {
                debug!(path = %target.display(), "wrote report");
                committed.push((target, previous));
            }
            Err(e) => {
                rollback(committed);
                return Err(AnalyzeError::write_report(&target, e));
            }
        }
    }

    // Dropping the kept-aside previous reports deletes them.
    Ok(committed.into_iter().map(|(target, _)| target).collect())
}

fn stage(dir: &Path, content: &str) -> io::Result<NamedTempFile> {
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.as_file().sync_all()?;
    Ok(tmp)
}

/// Rename `tmp` onto `target`, returning whatever `target` held before.
fn commit(dir: &Path, tmp: NamedTempFile, target: &Path) -> io::Result<Option<TempPath>> {
    let previous = if target.exists() {
        let aside = NamedTempFile::new_in(dir)?.into_temp_path();
        fs::rename(target, &aside)?;
        Some(aside)
    } else {
        None
    };

    if let Err(e) = tmp.persist(target) {
        if let Some(aside) = previous {
            let _ = aside.persist(target);
        }
        return Err(e.error);
    }

    Ok(previous)
}

fn rollback(committed: Vec<(PathBuf, Option<TempPath>)>) {
    for (target, previous) in committed.into_iter().rev() {
        let restored = match previous {
            Some(aside) => aside.persist(&target).map_err(|e| e.error),
            None => fs::remove_file(&target),
        };

        if let Err(e) = restored {
            warn!(path = %target.display(), error = %e, "failed to roll back report");
        }
    }
}
