/// Console formatting module - pure rendering concerns
///
/// This module lays scored rows out as a box-drawing table:
/// - column sizing from the widest display name
/// - Unicode-aware right-justified cells
/// - the magenta title line (body text stays uncolored)
///
/// It accepts pre-shaped data from the report module and renders it to any
/// `std::io::Write` destination, so the same code drives the console, test
/// buffers, and file exports.

use crate::report::{ScoredRow, Totals};
use crate::ui::color;
use std::io::{self, Write};
use unicode_width::UnicodeWidthStr;

/// Fixed widths of the three numeric columns; the category column is
/// sized to its content.
const POINTS_WIDTH: usize = 9;
const SCORE_WIDTH: usize = 18;
const MAX_SCORE_WIDTH: usize = 11;

const HEADER: [&str; 4] = ["Test Category", "Points", "Test Score", "Max Score"];

/// Column widths for the four-column table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableWidths {
    pub category: usize,
    pub points: usize,
    pub score: usize,
    pub max_score: usize,
}

impl TableWidths {
    /// Size the category column to the widest display name plus one cell
    /// of padding on each side. The header text bounds the minimum so an
    /// empty report still lines up.
    pub fn fit(rows: &[ScoredRow]) -> Self {
        let widest = rows
            .iter()
            .map(|row| display_width(&row.name))
            .max()
            .unwrap_or(0)
            .max(display_width(HEADER[0]));
        TableWidths {
            category: widest + 2,
            points: POINTS_WIDTH,
            score: SCORE_WIDTH,
            max_score: MAX_SCORE_WIDTH,
        }
    }

    fn as_array(&self) -> [usize; 4] {
        [self.category, self.points, self.score, self.max_score]
    }
}

/// Count the display width of a string, accounting for wide Unicode
/// characters
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Writer for table output - configurable for color/plain text
pub struct TableWriter<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> TableWriter<W> {
    /// Create a new table writer
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Render the full report: title, header, one line per scored row,
    /// and the trailing totals row.
    ///
    /// Data rows are separated by a light rule; a heavy rule sets the
    /// totals row apart from the last data row, mirroring the one under
    /// the header.
    pub fn write_report(&mut self, rows: &[ScoredRow], totals: &Totals) -> io::Result<()> {
        let widths = TableWidths::fit(rows);

        writeln!(self.writer)?;
        self.write_title("Test Summary")?;

        self.write_rule('┌', '┬', '┐', '─', &widths)?;
        self.write_row(&HEADER.map(String::from), &widths)?;
        self.write_rule('╞', '╪', '╡', '═', &widths)?;

        for (i, row) in rows.iter().enumerate() {
            self.write_row(&format_row_cells(row), &widths)?;
            if i == rows.len() - 1 {
                self.write_rule('╞', '╪', '╡', '═', &widths)?;
            } else {
                self.write_rule('├', '┼', '┤', '─', &widths)?;
            }
        }

        self.write_row(&format_totals_cells(totals), &widths)?;
        self.write_rule('└', '┴', '┘', '─', &widths)
    }

    /// Write the title line, magenta when colors are enabled
    fn write_title(&mut self, title: &str) -> io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{}{}{}", color::MAGENTA, title, color::RESET)
        } else {
            writeln!(self.writer, "{}", title)
        }
    }

    /// Write one table row with right-justified, space-padded cells
    fn write_row(&mut self, cells: &[String; 4], widths: &TableWidths) -> io::Result<()> {
        write!(self.writer, "│")?;
        for (cell, width) in cells.iter().zip(widths.as_array()) {
            write!(self.writer, " {} │", pad_left(cell, width.saturating_sub(2)))?;
        }
        writeln!(self.writer)
    }

    /// Write a horizontal rule with the given corner/junction characters
    fn write_rule(
        &mut self,
        left: char,
        mid: char,
        right: char,
        line: char,
        widths: &TableWidths,
    ) -> io::Result<()> {
        let columns = widths.as_array();
        let mut rule = String::with_capacity(columns.iter().sum::<usize>() + columns.len() + 1);
        rule.push(left);
        for (i, width) in columns.iter().enumerate() {
            for _ in 0..*width {
                rule.push(line);
            }
            rule.push(if i == columns.len() - 1 { right } else { mid });
        }
        writeln!(self.writer, "{}", rule)
    }
}

/// Render the report into a String; handy for tests and file exports
pub fn format_report(rows: &[ScoredRow], totals: &Totals, use_colors: bool) -> String {
    let mut buffer = Vec::new();
    // writes to a Vec<u8> cannot fail
    let _ = TableWriter::new(&mut buffer, use_colors).write_report(rows, totals);
    String::from_utf8(buffer).unwrap_or_default()
}

/// The four display cells for one scored row
fn format_row_cells(row: &ScoredRow) -> [String; 4] {
    [
        row.name.clone(),
        row.points(),
        format!("{:.1} ({:.1}%)", row.score, row.percent_of_max()),
        format!("{:.1}", row.max_score),
    ]
}

/// The trailing totals row, combining normal and extra-credit counts
fn format_totals_cells(totals: &Totals) -> [String; 4] {
    [
        "Total Grade".to_string(),
        format!(
            "{}/{}",
            totals.passed + totals.extra_passed,
            totals.total + totals.extra_total
        ),
        format!("{:.1}%", totals.overall_percent),
        format!("{:.1}", totals.all_percent),
    ]
}

/// Right-justify `s` in `width` display columns. Text wider than the
/// column passes through untouched rather than being truncated.
fn pad_left(s: &str, width: usize) -> String {
    let w = display_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

#[path = "console_format_test.rs"]
mod console_format_test;
