//! Integration tests for the CSV → analysis pipeline.
//!
//! Each test writes a small return table to a temp file, runs the full
//! pipeline through `run_analysis`, and checks the documented scenarios.

use std::path::PathBuf;

use streaklab_core::MissingPolicy;
use streaklab_runner::{run_analysis, AnalysisConfig, RunError};

fn write_csv(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn rebound_after_three_day_streak() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "returns.csv",
        "Date,005930\n\
         2024-01-02,-1\n\
         2024-01-03,-2\n\
         2024-01-04,-1\n\
         2024-01-05,5\n\
         2024-01-08,-3\n",
    );

    let result = run_analysis(&AnalysisConfig::default(), &path).unwrap();

    assert_eq!(result.ranked.len(), 1);
    let event = &result.ranked[0];
    assert_eq!(event.company, "005930");
    assert!((event.cumulative_return_pct - (0.99 * 0.98 * 0.99 - 1.0) * 100.0).abs() < 1e-9);
    assert_eq!(event.start_date, "2024-01-02");
    assert_eq!(event.end_date, "2024-01-04");
    assert_eq!(event.next_date, "2024-01-05");

    assert_eq!(result.summary.positive_count, 1);
    assert_eq!(result.summary.negative_count, 0);
    assert_eq!(result.summary.ratio, 1.0);
    assert_eq!(result.summary.average_next_day_return_pct, 5.0);
}

#[test]
fn streak_at_end_of_series_is_excluded() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "tail.csv", "Date,A\nd1,-1\nd2,-2\nd3,0\n");

    let result = run_analysis(&AnalysisConfig::default(), &path).unwrap();

    assert!(result.ranked.is_empty());
    assert!(result.summary.outcomes.is_empty());
    assert_eq!(result.summary.ratio, 0.0);
    assert_eq!(result.summary.average_next_day_return_pct, 0.0);
}

#[test]
fn all_missing_column_never_appears() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "gaps.csv",
        "Date,EMPTY,A\n\
         d1,,-1\n\
         d2,NaN,-1\n\
         d3,,-1\n\
         d4,,2\n",
    );

    let result = run_analysis(&AnalysisConfig::default(), &path).unwrap();

    let companies: Vec<_> = result.ranked.iter().map(|e| e.company.as_str()).collect();
    assert_eq!(companies, vec!["A"]);
}

#[test]
fn equal_declines_keep_column_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "ties.csv",
        "Date,Z,M,A\n\
         d1,-1,-5,-1\n\
         d2,-1,-5,-1\n\
         d3,-1,-5,-1\n\
         d4,1,1,-1\n",
    );

    let result = run_analysis(&AnalysisConfig::default(), &path).unwrap();

    let companies: Vec<_> = result.ranked.iter().map(|e| e.company.as_str()).collect();
    assert_eq!(companies, vec!["M", "Z", "A"]);
}

#[test]
fn longer_streak_length_filters_more() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "lengths.csv",
        "Date,THREE,FOUR\n\
         d1,-1,-1\n\
         d2,-1,-1\n\
         d3,-1,-1\n\
         d4,1,-1\n\
         d5,1,3\n",
    );

    let mut config = AnalysisConfig::default();
    let three = run_analysis(&config, &path).unwrap();
    config.analysis.streak_length = 4;
    let four = run_analysis(&config, &path).unwrap();

    assert_eq!(three.ranked.len(), 2);
    assert_eq!(four.ranked.len(), 1);
    assert_eq!(four.ranked[0].company, "FOUR");
    assert_eq!(four.ranked[0].next_day_return_pct, 3.0);
}

#[test]
fn interpolation_changes_next_day_semantics() {
    let dir = tempfile::tempdir().unwrap();
    // Under Drop the gap is skipped and the next retained day is +4.
    // Under Interpolate the gap becomes +1.5 (midpoint of -1 and +4).
    let path = write_csv(&dir, "interp.csv", "Date,A\nd1,-1\nd2,-1\nd3,-1\nd4,\nd5,4\n");

    let mut config = AnalysisConfig::default();
    let dropped = run_analysis(&config, &path).unwrap();
    config.analysis.missing = MissingPolicy::Interpolate;
    let interpolated = run_analysis(&config, &path).unwrap();

    assert_eq!(dropped.ranked[0].next_day_return_pct, 4.0);
    assert_eq!(dropped.ranked[0].next_date, "d5");
    assert_eq!(interpolated.ranked[0].next_day_return_pct, 1.5);
    assert_eq!(interpolated.ranked[0].next_date, "d4");
    assert_ne!(dropped.run_id, interpolated.run_id);
}

#[test]
fn short_streak_length_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "any.csv", "Date,A\nd1,-1\n");

    let mut config = AnalysisConfig::default();
    config.analysis.streak_length = 2;

    assert!(matches!(
        run_analysis(&config, &path).unwrap_err(),
        RunError::Config(_)
    ));
}

#[test]
fn missing_input_is_a_data_error() {
    let err = run_analysis(
        &AnalysisConfig::default(),
        std::path::Path::new("/nonexistent/returns.csv"),
    )
    .unwrap_err();
    assert!(matches!(err, RunError::Data(_)));
    assert!(err.to_string().contains("/nonexistent/returns.csv"));
}

#[test]
fn repeated_runs_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "repeat.csv",
        "Date,A,B\nd1,-1,-2\nd2,-1,-2\nd3,-1,-2\nd4,1,-1\n",
    );

    let a = run_analysis(&AnalysisConfig::default(), &path).unwrap();
    let b = run_analysis(&AnalysisConfig::default(), &path).unwrap();

    assert_eq!(a.run_id, b.run_id);
    assert_eq!(a.dataset_hash, b.dataset_hash);
    assert_eq!(a.ranked, b.ranked);
    assert_eq!(a.summary, b.summary);
}
