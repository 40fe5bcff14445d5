//! Run manifest export (JSON).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::data_loader::DataSource;
use crate::runner::AnalysisResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunManifest {
    pub run_id: String,
    pub schema_version: u32,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub duration_secs: f64,
    pub streak_length: usize,
    pub source: DataSource,
    pub dataset_hash: String,
    pub companies: usize,
    pub rows: usize,
    pub events: usize,
}

pub fn write_manifest(path: &Path, result: &AnalysisResult) -> Result<()> {
    let manifest = RunManifest {
        run_id: result.run_id.clone(),
        schema_version: result.schema_version,
        timestamp: result.timestamp,
        duration_secs: result.duration_secs,
        streak_length: result.config.analysis.streak_length,
        source: result.source.clone(),
        dataset_hash: result.dataset_hash.clone(),
        companies: result.company_count,
        rows: result.row_count,
        events: result.ranked.len(),
    };

    let json = serde_json::to_string_pretty(&manifest)
        .context("Failed to serialize run manifest")?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
    Ok(())
}
