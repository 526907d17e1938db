use tabled::{Table, Tabled};

use crate::compare::ComparisonResult;

#[derive(Tabled)]
struct ReportRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Status")]
    status: String,
}

/// Render the multi-line diagnostic surfaced when the check fails.
///
/// The three lists are JSON-encoded so the message stays machine-greppable,
/// and they arrive pre-sorted, so the output is stable across runs and safe
/// to diff in CI logs.
pub fn render(result: &ComparisonResult) -> String {
    format!(
        "dev and prod environments do not match:\nmissing from prod: {}\nmissing from dev: {}\nfiles differing: {}",
        json_list(&result.only_in_dev),
        json_list(&result.only_in_prod),
        json_list(&result.differing),
    )
}

/// Human-readable summary: one row per discrepancy, grouped by category.
pub fn summary_table(result: &ComparisonResult) -> String {
    if result.is_match() {
        return "environments match".to_string();
    }

    let rows: Vec<ReportRow> = result
        .only_in_dev
        .iter()
        .map(|file| row(file, "missing from prod"))
        .chain(result.only_in_prod.iter().map(|file| row(file, "missing from dev")))
        .chain(result.differing.iter().map(|file| row(file, "content differs")))
        .collect();

    Table::new(rows).to_string()
}

fn row(file: &str, status: &str) -> ReportRow {
    ReportRow {
        file: file.to_string(),
        status: status.to_string(),
    }
}

// Serializing a Vec<String> cannot fail; the fallback keeps the diagnostic
// well-formed regardless.
fn json_list(names: &[String]) -> String {
    serde_json::to_string(names).unwrap_or_else(|_| "[]".to_string())
}
