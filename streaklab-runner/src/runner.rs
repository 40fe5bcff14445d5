//! Analysis runner - wires together loading, scanning, aggregation and ranking.
//!
//! Two entry points:
//! - `run_analysis()`: loads the CSV named by the caller, then runs. Used by CLI.
//! - `run_analysis_on()`: takes an already-loaded table. Used by the TUI and tests.

use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use streaklab_core::{aggregate, rank, scan_par, scan_with_policy, DeclineEvent, NextDaySummary};

use crate::config::{AnalysisConfig, ConfigError};
use crate::data_loader::{load_table, DataSource, LoadError, LoadedTable};

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("data error: {0}")]
    Data(#[from] LoadError),
}

/// Current schema version for persisted artifacts.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete result of one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Schema version for forward-compatible deserialization.
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    /// BLAKE3 over the config and the dataset hash.
    pub run_id: String,
    pub config: AnalysisConfig,
    pub source: DataSource,
    pub dataset_hash: String,
    pub row_count: usize,
    pub company_count: usize,
    /// Decline events, steepest first.
    pub ranked: Vec<DeclineEvent>,
    pub summary: NextDaySummary,
    pub timestamp: DateTime<Utc>,
    pub duration_secs: f64,
}

/// Default schema version for serde deserialization of older JSON without the field.
fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl AnalysisResult {
    pub fn is_synthetic(&self) -> bool {
        matches!(self.source, DataSource::Synthetic { .. })
    }

    /// The first `config.report.top` ranked events.
    pub fn top(&self) -> &[DeclineEvent] {
        streaklab_core::top(&self.ranked, self.config.report.top)
    }
}

/// Load a CSV and analyze it.
pub fn run_analysis(config: &AnalysisConfig, input: &Path) -> Result<AnalysisResult, RunError> {
    config.validate()?;
    let loaded = load_table(input)?;
    run_analysis_on(config, &loaded)
}

/// Analyze a pre-loaded table - no I/O.
pub fn run_analysis_on(
    config: &AnalysisConfig,
    loaded: &LoadedTable,
) -> Result<AnalysisResult, RunError> {
    let started = Instant::now();
    let n = config.streak_length()?;
    let policy = config.analysis.missing;

    let events = if config.analysis.parallel {
        scan_par(&loaded.table, n, policy).map_err(ConfigError::from)?
    } else {
        scan_with_policy(&loaded.table, n, policy).map_err(ConfigError::from)?
    };

    let summary = aggregate(&events);
    let ranked = rank(&events);

    tracing::info!(
        streak_length = n.get(),
        events = ranked.len(),
        positive = summary.positive_count,
        negative = summary.negative_count,
        average_next_day = summary.average_next_day_return_pct,
        "analysis complete"
    );

    Ok(AnalysisResult {
        schema_version: SCHEMA_VERSION,
        run_id: compute_run_id(config, &loaded.dataset_hash),
        config: config.clone(),
        source: loaded.source.clone(),
        dataset_hash: loaded.dataset_hash.clone(),
        row_count: loaded.table.row_count(),
        company_count: loaded.table.company_count(),
        ranked,
        summary,
        timestamp: Utc::now(),
        duration_secs: started.elapsed().as_secs_f64(),
    })
}

/// Deterministic run id: identical config on identical data gives the same id.
///
/// Only the fields that change the analysis are hashed; report layout is not.
pub fn compute_run_id(config: &AnalysisConfig, dataset_hash: &str) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(&(config.analysis.streak_length as u64).to_le_bytes());
    hasher.update(format!("{:?}", config.analysis.missing).as_bytes());
    hasher.update(dataset_hash.as_bytes());
    let hex = hasher.finalize().to_hex();
    hex[..16].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_loader::{compute_dataset_hash, read_table, synthetic_table};
    use streaklab_core::MissingPolicy;

    fn loaded(csv: &str) -> LoadedTable {
        let table = read_table(csv.as_bytes()).unwrap();
        let dataset_hash = compute_dataset_hash(&table);
        LoadedTable {
            table,
            source: DataSource::Csv {
                path: "inline.csv".into(),
            },
            dataset_hash,
        }
    }

    #[test]
    fn ranked_and_summarized() {
        let data = loaded(
            "Date,A,B,C\n\
             d1,-1,-4,1\n\
             d2,-2,-4,1\n\
             d3,-1,-4,1\n\
             d4,5,-1,1\n",
        );
        let result = run_analysis_on(&AnalysisConfig::default(), &data).unwrap();

        assert_eq!(result.ranked.len(), 2);
        assert_eq!(result.ranked[0].company, "B");
        assert_eq!(result.ranked[1].company, "A");
        assert_eq!(result.summary.positive_count, 1);
        assert_eq!(result.summary.negative_count, 1);
        assert!((result.summary.ratio - 0.5).abs() < 1e-12);
        assert!((result.summary.average_next_day_return_pct - 2.0).abs() < 1e-12);
        assert_eq!(result.company_count, 3);
        assert_eq!(result.row_count, 4);
        assert!(!result.is_synthetic());
    }

    #[test]
    fn empty_result_set_degrades_gracefully() {
        let data = loaded("Date,A\nd1,1\nd2,2\nd3,3\nd4,4\n");
        let result = run_analysis_on(&AnalysisConfig::default(), &data).unwrap();
        assert!(result.ranked.is_empty());
        assert_eq!(result.summary.ratio, 0.0);
        assert_eq!(result.summary.average_next_day_return_pct, 0.0);
        assert!(result.top().is_empty());
    }

    #[test]
    fn invalid_streak_length_fails_before_scanning() {
        let data = loaded("Date,A\nd1,-1\n");
        let mut config = AnalysisConfig::default();
        config.analysis.streak_length = 2;
        let err = run_analysis_on(&config, &data).unwrap_err();
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let data = synthetic_table(40, 120, 9).unwrap();
        let mut config = AnalysisConfig::default();
        let seq = run_analysis_on(&config, &data).unwrap();
        config.analysis.parallel = true;
        let par = run_analysis_on(&config, &data).unwrap();

        assert_eq!(seq.ranked, par.ranked);
        assert_eq!(seq.summary, par.summary);
        assert_eq!(seq.run_id, par.run_id);
    }

    #[test]
    fn run_id_tracks_analysis_inputs() {
        let base = AnalysisConfig::default();
        let mut longer = base.clone();
        longer.analysis.streak_length = 4;
        let mut interpolated = base.clone();
        interpolated.analysis.missing = MissingPolicy::Interpolate;
        let mut wider = base.clone();
        wider.report.top = 25;

        let id = compute_run_id(&base, "hash");
        assert_eq!(id, compute_run_id(&base, "hash"));
        assert_eq!(id, compute_run_id(&wider, "hash"));
        assert_ne!(id, compute_run_id(&longer, "hash"));
        assert_ne!(id, compute_run_id(&interpolated, "hash"));
        assert_ne!(id, compute_run_id(&base, "other"));
    }

    #[test]
    fn top_respects_report_setting() {
        let data = synthetic_table(60, 250, 3).unwrap();
        let mut config = AnalysisConfig::default();
        config.report.top = 5;
        let result = run_analysis_on(&config, &data).unwrap();
        assert!(result.ranked.len() > 5);
        assert_eq!(result.top().len(), 5);
    }
}
