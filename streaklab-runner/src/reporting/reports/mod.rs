//! Report generators.

mod markdown;
mod summary;

pub use markdown::MarkdownReportGenerator;
pub use summary::SummaryStats;
