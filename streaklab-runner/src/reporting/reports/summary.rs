//! Summary statistics for reports.

use crate::runner::AnalysisResult;

#[derive(Debug, Clone)]
pub struct SummaryStats {
    pub streak_length: usize,
    pub companies_scanned: usize,
    pub events: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub ratio: f64,
    pub average_next_day_return_pct: f64,
    /// Steepest cumulative decline, if any company qualified.
    pub worst_decline_pct: Option<f64>,
}

impl SummaryStats {
    pub fn from_result(result: &AnalysisResult) -> Self {
        Self {
            streak_length: result.config.analysis.streak_length,
            companies_scanned: result.company_count,
            events: result.ranked.len(),
            positive_count: result.summary.positive_count,
            negative_count: result.summary.negative_count,
            ratio: result.summary.ratio,
            average_next_day_return_pct: result.summary.average_next_day_return_pct,
            worst_decline_pct: result.ranked.first().map(|e| e.cumulative_return_pct),
        }
    }

    /// Share of scanned companies that had a qualifying streak.
    pub fn hit_rate(&self) -> f64 {
        if self.companies_scanned == 0 {
            0.0
        } else {
            self.events as f64 / self.companies_scanned as f64
        }
    }
}
