/// Report extraction - locating score rows and their display names
///
/// A grading report carries two regions of interest, both bounded by a
/// fixed dashed rule the harness prints around its summary block:
///
/// - the summary region, strictly between the first and second occurrence
///   of the rule, holding one whitespace-delimited score line per test
///   category;
/// - the detail region, everything after the second occurrence, holding
///   expanded per-test headings such as
///   `Functionality of system calls (tests/userprog/Rubric.functionality):`
///   from which the human-readable category names are recovered.
///
/// The report format is known to be irregular, so this module tolerates
/// noise silently: lines with an unexpected column count and summary rows
/// whose label never shows up again are dropped without diagnostics.

use crate::types::{Category, RawRow};

/// Dashed rule the harness prints above and below the summary block.
/// Matched by substring so surrounding padding does not matter.
pub const SUMMARY_DELIMITER: &str =
    "--------------------------------------------- --- --- ------ ------";

/// Scan position relative to the two delimiter occurrences
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    BeforeSummary,
    InSummary,
    InDetail,
}

/// Extract every scored category from a report: summary rows joined with
/// their detail-region display names, in summary order.
pub fn extract_categories(report: &str) -> Vec<Category> {
    let rows = parse_summary_rows(report);
    resolve_display_names(report, &rows)
}

/// Parse the whitespace-delimited score rows between the first and second
/// occurrence of the delimiter. A report with fewer than two occurrences
/// has no well-formed summary block and yields no rows.
pub fn parse_summary_rows(report: &str) -> Vec<RawRow> {
    let mut state = ScanState::BeforeSummary;
    let mut rows = Vec::new();

    for line in report.lines() {
        if line.contains(SUMMARY_DELIMITER) {
            match state {
                ScanState::BeforeSummary => state = ScanState::InSummary,
                ScanState::InSummary | ScanState::InDetail => {
                    state = ScanState::InDetail;
                    break;
                }
            }
            continue;
        }
        if state == ScanState::InSummary {
            if let Some(row) = split_summary_line(line) {
                rows.push(row);
            } else if !line.trim().is_empty() {
                log::debug!("dropping malformed summary line: {:?}", line);
            }
        }
    }

    if state == ScanState::InDetail {
        rows
    } else {
        Vec::new()
    }
}

/// Split one summary line into a RawRow.
///
/// The harness right-pads small pass/total fractions into fixed columns,
/// so a row like `70/ 91` whitespace-splits into five tokens; tokens 1
/// and 2 are re-joined into the fraction. Four tokens pass through as-is.
/// Any other shape is format noise.
fn split_summary_line(line: &str) -> Option<RawRow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [label, fraction, test_percent, max_percent] => Some(RawRow {
            label: label.to_string(),
            fraction: fraction.to_string(),
            test_percent: test_percent.to_string(),
            max_percent: max_percent.to_string(),
        }),
        [label, left, right, test_percent, max_percent] => Some(RawRow {
            label: label.to_string(),
            fraction: format!("{}{}", left, right),
            test_percent: test_percent.to_string(),
            max_percent: max_percent.to_string(),
        }),
        _ => None,
    }
}

/// Pair each summary row with the first detail-region line containing its
/// label as a substring. The display name is the text before the first
/// `(` on that line, minus the single separator character the harness
/// inserts ahead of it. Rows never mentioned in the detail region are
/// dropped; the survivors keep their summary order.
pub fn resolve_display_names(report: &str, rows: &[RawRow]) -> Vec<Category> {
    let mut names: Vec<Option<String>> = vec![None; rows.len()];
    let mut state = ScanState::BeforeSummary;

    for line in report.lines() {
        if line.contains(SUMMARY_DELIMITER) {
            state = match state {
                ScanState::BeforeSummary => ScanState::InSummary,
                ScanState::InSummary | ScanState::InDetail => ScanState::InDetail,
            };
            continue;
        }
        if state != ScanState::InDetail {
            continue;
        }
        for (row, name) in rows.iter().zip(names.iter_mut()) {
            if name.is_none() && line.contains(row.label.as_str()) {
                *name = Some(display_name(line));
            }
        }
    }

    rows.iter()
        .zip(names)
        .filter_map(|(row, name)| match name {
            Some(name) => Some(Category::from_raw(name, row)),
            None => {
                log::debug!("no detail heading found for {}", row.label);
                None
            }
        })
        .collect()
}

/// Text before the first `(`, minus one trailing separator character.
fn display_name(line: &str) -> String {
    let prefix = line.split('(').next().unwrap_or("");
    match prefix.char_indices().last() {
        Some((idx, _)) => prefix[..idx].to_string(),
        None => String::new(),
    }
}

#[path = "extract_test.rs"]
mod extract_test;
