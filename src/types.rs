/// Core data structures for extracted report rows
///
/// This module defines the records the extractor produces from a grading
/// report. Score fields stay as the raw tokens the harness printed; they
/// are parsed into numbers by the report module, which is where malformed
/// values in a kept row become fatal.

/// A single line of the summary block, split into columns
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub label: String,        // "tests/userprog/Rubric.functionality"
    pub fraction: String,     // "59/124" (passed/total)
    pub test_percent: String, // "16.7%/" (earned share of the grade)
    pub max_percent: String,  // "35.0%" (category's share of the grade)
}

/// A summary row joined with the long display name recovered from the
/// detail region
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,         // "Functionality of system calls"
    pub label: String,        // "tests/userprog/Rubric.functionality"
    pub fraction: String,     // "59/124"
    pub test_percent: String, // "16.7%/"
    pub max_percent: String,  // "35.0%"
}

impl Category {
    /// Attach a display name to a summary row
    pub fn from_raw(name: String, raw: &RawRow) -> Self {
        Category {
            name,
            label: raw.label.clone(),
            fraction: raw.fraction.clone(),
            test_percent: raw.test_percent.clone(),
            max_percent: raw.max_percent.clone(),
        }
    }

    /// Extra-credit categories are hidden from the table when unearned
    /// and tallied in their own pass/total bucket
    pub fn is_extra_credit(&self) -> bool {
        self.label.contains("extra")
    }
}
