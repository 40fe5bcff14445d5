//! StreakLab Runner - analysis orchestration, reports and artifacts.
//!
//! This crate builds on `streaklab-core` to provide:
//! - TOML analysis configuration
//! - CSV loading with dataset fingerprinting, plus synthetic tables
//! - Single-run orchestration producing a serializable `AnalysisResult`
//! - Text bar chart, Markdown report, CSV/JSON artifacts

pub mod config;
pub mod data_loader;
pub mod reporting;
pub mod runner;

pub use config::{AnalysisConfig, AnalysisSection, ConfigError, ReportSection};
pub use data_loader::{
    load_table, read_table, synthetic_table, write_table_csv, DataSource, LoadError, LoadedTable,
};
pub use reporting::{
    export_json, export_run_with_report, import_json, ArtifactManager, ArtifactPaths,
    ChartRenderer, ChartStyle, MarkdownReportGenerator, SummaryStats, TextBarChart,
};
pub use runner::{run_analysis, run_analysis_on, AnalysisResult, RunError, SCHEMA_VERSION};
