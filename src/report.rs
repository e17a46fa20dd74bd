/// Scoring and aggregation over extracted categories
///
/// This module shapes the extractor's textual rows into per-category
/// scores plus running totals, decides the pass/fail sentinel, and exports
/// the optional JSON report. Rendering stays in console_format.
///
/// Tolerance ends here: the extractor drops format noise silently, but a
/// row that made it into the table must carry well-formed score tokens.
/// A percent without its `%`, a fraction that is not `passed/total`, or a
/// zero max score all abort the run.

use crate::types::Category;
use serde::Serialize;
use std::fs::File;
use std::path::Path;

/// A category with its score fields parsed, ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    pub name: String,      // "Functionality of system calls"
    pub label: String,     // "tests/userprog/Rubric.functionality"
    pub passed: u32,       // tests passed in this category
    pub total: u32,        // tests run in this category
    pub score: f64,        // earned share of the grade, 0-100
    pub max_score: f64,    // category's share of the grade, 0-100
    pub extra_credit: bool,
}

impl ScoredRow {
    /// Share of the category's maximum that was earned, 0-100
    pub fn percent_of_max(&self) -> f64 {
        self.score / self.max_score * 100.0
    }

    /// The "passed/total" cell as printed in the table
    pub fn points(&self) -> String {
        format!("{}/{}", self.passed, self.total)
    }
}

/// Aggregate totals across all displayed rows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    pub passed: u32,          // non-extra tests passed
    pub total: u32,           // non-extra tests run
    pub extra_passed: u32,    // extra-credit tests passed
    pub extra_total: u32,     // extra-credit tests run
    pub overall_percent: f64, // sum of displayed rows' scores
    pub all_percent: f64,     // sum of displayed rows' max scores
}

impl Totals {
    /// Sentinel condition: every non-extra-credit test passed
    pub fn all_required_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Parse and tally the extracted categories.
///
/// Extra-credit categories that earned nothing are hidden entirely: not
/// displayed and not counted. Everything else accumulates into the totals,
/// with pass/total counts split into normal and extra-credit buckets.
pub fn score_categories(categories: &[Category]) -> Result<(Vec<ScoredRow>, Totals), String> {
    let mut rows = Vec::new();
    let mut totals = Totals::default();

    for category in categories {
        let score = parse_percent(&category.test_percent)
            .map_err(|e| format!("bad test score for {}: {}", category.label, e))?;
        let extra_credit = category.is_extra_credit();
        if extra_credit && score == 0.0 {
            continue;
        }

        let max_score = parse_percent(&category.max_percent)
            .map_err(|e| format!("bad max score for {}: {}", category.label, e))?;
        if max_score == 0.0 {
            return Err(format!("max score for {} is zero", category.label));
        }
        let (passed, total) = parse_fraction(&category.fraction)
            .map_err(|e| format!("bad test count for {}: {}", category.label, e))?;

        totals.overall_percent += score;
        totals.all_percent += max_score;
        if extra_credit {
            totals.extra_passed += passed;
            totals.extra_total += total;
        } else {
            totals.passed += passed;
            totals.total += total;
        }

        rows.push(ScoredRow {
            name: category.name.clone(),
            label: category.label.clone(),
            passed,
            total,
            score,
            max_score,
            extra_credit,
        });
    }

    Ok((rows, totals))
}

/// Numeric prefix of a percent token, e.g. "16.7%/" -> 16.7
fn parse_percent(token: &str) -> Result<f64, String> {
    let (number, _) = token
        .split_once('%')
        .ok_or_else(|| format!("'{}' has no % suffix", token))?;
    number.parse::<f64>().map_err(|e| format!("'{}': {}", number, e))
}

/// A "passed/total" pair, e.g. "59/124" -> (59, 124)
fn parse_fraction(token: &str) -> Result<(u32, u32), String> {
    let (passed, total) = token
        .split_once('/')
        .ok_or_else(|| format!("'{}' is not a passed/total pair", token))?;
    let passed = passed.parse::<u32>().map_err(|e| format!("'{}': {}", passed, e))?;
    let total = total.parse::<u32>().map_err(|e| format!("'{}': {}", total, e))?;
    Ok((passed, total))
}

/// Write the single-character pass/fail sentinel consumed by outer tooling:
/// "0" when every required test passed, "1" otherwise, newline-terminated.
pub fn write_sentinel(path: &Path, totals: &Totals) -> std::io::Result<()> {
    let flag = if totals.all_required_passed() { "0" } else { "1" };
    std::fs::write(path, format!("{}\n", flag))
}

/// Export the scored rows and totals as a JSON document.
///
/// The shape follows the autograder results format: a version marker, an
/// overall pass/fail status matching the sentinel, the per-category
/// records, and the summed score against its maximum.
pub fn export_json_report(rows: &[ScoredRow], totals: &Totals, path: &Path) -> std::io::Result<()> {
    use serde_json::json;

    let status = if totals.all_required_passed() { "pass" } else { "fail" };
    let report = json!({
        "version": 1,
        "status": status,
        "tests": rows,
        "score": totals.overall_percent,
        "max_score": totals.all_percent,
    });

    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, &report)?;
    Ok(())
}

#[path = "report_test.rs"]
mod report_test;
