//! StreakLab TUI - terminal viewer for decline-streak results
//!
//! Shows the top decliners as a horizontal bar chart next to the next-day
//! outcome summary. Streak length and missing-value policy can be changed
//! live; each change re-runs the analysis on the loaded table.

pub mod app;
pub mod input;
pub mod panels;
pub mod theme;
pub mod ui;

pub use app::App;
pub use input::handle_key;
pub use theme::Theme;
