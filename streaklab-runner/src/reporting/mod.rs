//! Reporting and artifact export pipeline.

pub mod artifacts;
pub mod chart;
pub mod export;
pub mod reports;

pub use artifacts::{ArtifactManager, ArtifactPaths, RunManifest};
pub use chart::{format_pct, ChartRenderer, ChartStyle, TextBarChart};
pub use export::{export_json, export_run_with_report, import_json, load_result};
pub use reports::{MarkdownReportGenerator, SummaryStats};
