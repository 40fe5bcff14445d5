//! JSON round-trip and the export orchestrator for artifacts and reports.
//!
//! All persisted results carry a `schema_version`. Newer versions are
//! rejected on load.

use anyhow::{bail, Context, Result};
use std::path::Path;

use crate::reporting::artifacts::{ArtifactManager, ArtifactPaths};
use crate::reporting::reports::MarkdownReportGenerator;
use crate::runner::{AnalysisResult, SCHEMA_VERSION};

/// Serialize an `AnalysisResult` to pretty JSON.
pub fn export_json(result: &AnalysisResult) -> Result<String> {
    serde_json::to_string_pretty(result).context("failed to serialize AnalysisResult to JSON")
}

/// Deserialize an `AnalysisResult` from JSON, rejecting unknown schema versions.
pub fn import_json(json: &str) -> Result<AnalysisResult> {
    let result: AnalysisResult =
        serde_json::from_str(json).context("failed to deserialize AnalysisResult from JSON")?;
    if result.schema_version > SCHEMA_VERSION {
        bail!(
            "unsupported schema version {} (max supported: {})",
            result.schema_version,
            SCHEMA_VERSION
        );
    }
    Ok(result)
}

/// Load a previously saved `result.json`.
pub fn load_result(path: &Path) -> Result<AnalysisResult> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    import_json(&json)
}

pub fn export_run_with_report(
    output_dir: impl AsRef<Path>,
    result: &AnalysisResult,
    include_report: bool,
) -> Result<ArtifactPaths> {
    let manager = ArtifactManager::new(output_dir)?;
    let mut paths = manager.save_run(result)?;

    if include_report {
        let report_path = paths.run_dir.join("report.md");
        let report = MarkdownReportGenerator.generate(result);
        std::fs::write(&report_path, report)
            .with_context(|| format!("failed to write {}", report_path.display()))?;
        paths.report_markdown = Some(report_path);
    }

    Ok(paths)
}
