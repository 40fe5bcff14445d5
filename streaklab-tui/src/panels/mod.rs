//! TUI panels
//!
//! - DeclineChart: horizontal bars of cumulative decline per company
//! - SummaryPanel: next-day outcome counts and the selected streak

pub mod decline_chart;
pub mod summary;

pub use decline_chart::DeclineChart;
pub use summary::SummaryPanel;
