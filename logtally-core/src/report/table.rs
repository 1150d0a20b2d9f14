use crate::report::shape::Report;
use owo_colors::OwoColorize;

/// Console tables for all three datasets, in the order endpoints, minutes,
/// statuses.
pub fn render_tables(report: &Report, color: bool) -> String {
    let mut out = String::new();

    let (header, rows) = report.endpoint_cells();
    out.push_str("Endpoint Call Counts:\n");
    out.push_str(&render_table(header, &rows, color));

    let (header, rows) = report.minute_cells();
    out.push_str("\nAPI Calls per Minute:\n");
    out.push_str(&render_table(header, &rows, color));

    let (header, rows) = report.status_cells();
    out.push_str("\nAPI Calls by HTTP Status Code:\n");
    out.push_str(&render_table(header, &rows, color));

    out
}

pub fn render_json(report: &Report) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

fn render_table(header: &[&str], rows: &[Vec<String>], color: bool) -> String {
    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| c.chars().count())
                .fold(h.chars().count(), usize::max)
        })
        .collect();

    let rule = {
        let mut s = String::from("+");
        for w in &widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s.push('\n');
        s
    };

    let mut out = String::new();
    out.push_str(&rule);

    out.push('|');
    for (h, w) in header.iter().zip(&widths) {
        // pad before styling; escape codes have no display width
        let cell = format!("{h:<w$}");
        if color {
            out.push_str(&format!(" {} |", cell.bold()));
        } else {
            out.push_str(&format!(" {cell} |"));
        }
    }
    out.push('\n');
    out.push_str(&rule);

    for row in rows {
        out.push('|');
        for (i, w) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            // counts are right aligned
            if i + 1 == widths.len() {
                out.push_str(&format!(" {cell:>w$} |"));
            } else {
                out.push_str(&format!(" {cell:<w$} |"));
            }
        }
        out.push('\n');
    }

    if !rows.is_empty() {
        out.push_str(&rule);
    }

    out
}
