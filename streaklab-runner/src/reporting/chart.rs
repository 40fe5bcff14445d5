//! Horizontal bar chart of the steepest declines.
//!
//! Rendering is behind `ChartRenderer` so the analysis never depends on a
//! particular output. All styling lives in `ChartStyle`, passed per call.

use serde::{Deserialize, Serialize};
use streaklab_core::DeclineEvent;

/// Anything that can turn ranked declines into a displayable chart.
pub trait ChartRenderer {
    fn render(&self, entries: &[DeclineEvent], streak_length: usize) -> String;
}

/// Styling for the text chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    /// Width in characters of the longest bar.
    pub bar_width: usize,
    pub bar_glyph: char,
    pub show_title: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_width: 40,
            bar_glyph: '█',
            show_title: true,
        }
    }
}

/// Plain-text horizontal bar chart, one row per company.
///
/// ```text
/// 000660 | ████████████████████████████████████████ -11.53%
/// 005930 | █████████████                             -3.95%
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextBarChart {
    pub style: ChartStyle,
}

impl TextBarChart {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }
}

/// Bar label: the percentage to two decimals.
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

impl ChartRenderer for TextBarChart {
    fn render(&self, entries: &[DeclineEvent], streak_length: usize) -> String {
        let mut out = String::new();
        if self.style.show_title {
            out.push_str(&format!(
                "Top {} cumulative declines over {streak_length}-day streaks\n",
                entries.len()
            ));
        }

        if entries.is_empty() {
            out.push_str("(no companies matched the streak condition)\n");
            return out;
        }

        let name_width = entries
            .iter()
            .map(|e| e.company.chars().count())
            .max()
            .unwrap_or(0);
        let max_magnitude = entries
            .iter()
            .map(|e| e.cumulative_return_pct.abs())
            .fold(0.0_f64, f64::max);

        for entry in entries {
            let len = if max_magnitude > 0.0 {
                (entry.cumulative_return_pct.abs() / max_magnitude * self.style.bar_width as f64)
                    .round() as usize
            } else {
                0
            };
            let bar: String = std::iter::repeat(self.style.bar_glyph).take(len).collect();
            out.push_str(&format!(
                "{:<name_width$} | {:<bar_width$} {:>8}\n",
                entry.company,
                bar,
                format_pct(entry.cumulative_return_pct),
                bar_width = self.style.bar_width,
            ));
        }
        out
    }
}
