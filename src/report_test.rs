/// Tests for scoring, totals, the sentinel file, and the JSON export

#[cfg(test)]
mod tests {
    use crate::report::*;
    use crate::types::Category;

    fn category(name: &str, label: &str, fraction: &str, test: &str, max: &str) -> Category {
        Category {
            name: name.to_string(),
            label: label.to_string(),
            fraction: fraction.to_string(),
            test_percent: test.to_string(),
            max_percent: max.to_string(),
        }
    }

    fn sample_categories() -> Vec<Category> {
        vec![
            category(
                "Functionality of system calls",
                "tests/userprog/Rubric.functionality",
                "59/124",
                "16.7%/",
                "35.0%",
            ),
            category(
                "Robustness of system calls",
                "tests/userprog/Rubric.robustness",
                "70/91",
                "19.2%/",
                "25.0%",
            ),
        ]
    }

    #[test]
    fn test_scores_and_totals_accumulate() {
        let (rows, totals) = score_categories(&sample_categories()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].score, 16.7);
        assert_eq!(rows[0].max_score, 35.0);
        assert_eq!(rows[0].points(), "59/124");
        assert_eq!(totals.passed, 129);
        assert_eq!(totals.total, 215);
        assert!((totals.overall_percent - 35.9).abs() < 1e-9);
        assert_eq!(totals.all_percent, 60.0);
        assert!(!totals.all_required_passed());
    }

    #[test]
    fn test_totals_percent_matches_displayed_rows() {
        let (rows, totals) = score_categories(&sample_categories()).unwrap();
        let summed: f64 = rows.iter().map(|r| r.score).sum();
        assert!((totals.overall_percent - summed).abs() < 1e-9);
    }

    #[test]
    fn test_unearned_extra_credit_hidden_and_uncounted() {
        let mut categories = sample_categories();
        categories.push(category("Bonus work", "tests/vm/Rubric.extra", "0/3", "0.0%/", "5.0%"));
        let (rows, totals) = score_categories(&categories).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(totals.extra_total, 0);
        assert_eq!(totals.all_percent, 60.0);
    }

    #[test]
    fn test_earned_extra_credit_counts_in_its_own_bucket() {
        let categories = vec![
            category("Required", "tests/x/Rubric", "2/2", "10.0%/", "10.0%"),
            category("Bonus work", "tests/x/Rubric.extra", "1/3", "2.0%/", "5.0%"),
        ];
        let (rows, totals) = score_categories(&categories).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows[1].extra_credit);
        assert_eq!(totals.passed, 2);
        assert_eq!(totals.total, 2);
        assert_eq!(totals.extra_passed, 1);
        assert_eq!(totals.extra_total, 3);
        assert!((totals.overall_percent - 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_sentinel_ignores_extra_credit_failures() {
        let categories = vec![
            category("Required", "tests/x/Rubric", "2/2", "10.0%/", "10.0%"),
            category("Bonus work", "tests/x/Rubric.extra", "1/3", "2.0%/", "5.0%"),
        ];
        let (_, totals) = score_categories(&categories).unwrap();
        assert!(totals.all_required_passed());
    }

    #[test]
    fn test_percent_without_suffix_is_fatal() {
        let categories = vec![category("A", "t/a", "1/2", "16.7", "35.0%")];
        let err = score_categories(&categories).unwrap_err();
        assert!(err.contains("no % suffix"), "unexpected error: {}", err);
    }

    #[test]
    fn test_non_numeric_percent_is_fatal() {
        let categories = vec![category("A", "t/a", "1/2", "n/a%", "35.0%")];
        assert!(score_categories(&categories).is_err());
    }

    #[test]
    fn test_zero_max_score_is_fatal() {
        let categories = vec![category("A", "t/a", "1/2", "3.0%/", "0.0%")];
        let err = score_categories(&categories).unwrap_err();
        assert!(err.contains("zero"), "unexpected error: {}", err);
    }

    #[test]
    fn test_malformed_fraction_is_fatal() {
        let categories = vec![category("A", "t/a", "1-2", "3.0%/", "4.0%")];
        assert!(score_categories(&categories).is_err());
    }

    #[test]
    fn test_hidden_extra_row_skips_further_validation() {
        // A zero-score extra-credit row is dropped before its fraction or
        // max score are ever parsed
        let categories = vec![category("Bonus", "t/extra", "garbage", "0.0%/", "bogus")];
        let (rows, totals) = score_categories(&categories).unwrap();
        assert!(rows.is_empty());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_empty_input_yields_empty_report() {
        let (rows, totals) = score_categories(&[]).unwrap();
        assert!(rows.is_empty());
        assert!(totals.all_required_passed());
    }

    #[test]
    fn test_sentinel_file_contents() {
        let dir = tempfile::tempdir().unwrap();

        let passing = Totals::default();
        let path = dir.path().join("grade.result");
        write_sentinel(&path, &passing).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "0\n");

        let failing = Totals { passed: 1, total: 2, ..Totals::default() };
        write_sentinel(&path, &failing).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1\n");
    }

    #[test]
    fn test_json_export_mirrors_sentinel_and_totals() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grade.json");

        let (rows, totals) = score_categories(&sample_categories()).unwrap();
        export_json_report(&rows, &totals, &path).unwrap();

        let doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(doc["version"], 1);
        assert_eq!(doc["status"], "fail");
        assert_eq!(doc["tests"].as_array().unwrap().len(), 2);
        assert_eq!(doc["tests"][0]["name"], "Functionality of system calls");
        assert_eq!(doc["tests"][0]["passed"], 59);
        assert_eq!(doc["max_score"], 60.0);
    }
}
