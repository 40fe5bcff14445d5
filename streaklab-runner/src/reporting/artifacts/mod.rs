//! Artifact manager for persisting run outputs.

mod declines;
mod manifest;
mod outcomes;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::runner::AnalysisResult;

pub use manifest::RunManifest;

/// Artifact paths returned after export.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub run_dir: PathBuf,
    pub manifest: PathBuf,
    pub result_json: PathBuf,
    pub declines_csv: PathBuf,
    pub outcomes_csv: PathBuf,
    pub report_markdown: Option<PathBuf>,
}

/// Manages writing all artifacts for a run.
#[derive(Debug, Clone)]
pub struct ArtifactManager {
    output_dir: PathBuf,
}

impl ArtifactManager {
    pub fn new(output_dir: impl AsRef<Path>) -> Result<Self> {
        let output_dir = output_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&output_dir)
            .context("Failed to create artifact output directory")?;
        Ok(Self { output_dir })
    }

    /// Save complete run artifacts under `<output_dir>/<run_id>/`.
    pub fn save_run(&self, result: &AnalysisResult) -> Result<ArtifactPaths> {
        let run_dir = self.output_dir.join(&result.run_id);
        std::fs::create_dir_all(&run_dir)
            .context("Failed to create run artifact directory")?;

        let manifest_path = run_dir.join("manifest.json");
        manifest::write_manifest(&manifest_path, result)?;

        let result_json = run_dir.join("result.json");
        let json = crate::reporting::export::export_json(result)?;
        std::fs::write(&result_json, json)
            .with_context(|| format!("Failed to write {}", result_json.display()))?;

        let declines_csv = run_dir.join("declines.csv");
        declines::write_declines_csv(&declines_csv, &result.ranked)?;

        let outcomes_csv = run_dir.join("outcomes.csv");
        outcomes::write_outcomes_csv(&outcomes_csv, &result.summary.outcomes)?;

        tracing::info!(run_dir = %run_dir.display(), "artifacts written");

        Ok(ArtifactPaths {
            run_dir,
            manifest: manifest_path,
            result_json,
            declines_csv,
            outcomes_csv,
            report_markdown: None,
        })
    }
}
