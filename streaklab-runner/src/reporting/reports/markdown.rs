//! Markdown report generator.

use super::SummaryStats;
use crate::reporting::chart::{format_pct, ChartRenderer, ChartStyle, TextBarChart};
use crate::runner::AnalysisResult;

pub struct MarkdownReportGenerator;

impl MarkdownReportGenerator {
    pub fn generate(&self, result: &AnalysisResult) -> String {
        let summary = SummaryStats::from_result(result);
        let mut report = format!(
            "# StreakLab Run Report\n\n\
Run ID: `{}`\n\n\
## Summary\n\
- Streak length: {} days\n\
- Companies scanned: {}\n\
- Companies with a streak: {} ({:.1}%)\n\
- Next day up: {}\n\
- Next day flat or down: {}\n\
- Rebound ratio: {:.1}%\n\
- Average next-day return: {:+.2}%\n",
            result.run_id,
            summary.streak_length,
            summary.companies_scanned,
            summary.events,
            summary.hit_rate() * 100.0,
            summary.positive_count,
            summary.negative_count,
            summary.ratio * 100.0,
            summary.average_next_day_return_pct,
        );

        if let Some(worst) = summary.worst_decline_pct {
            report.push_str(&format!("- Steepest decline: {}\n", format_pct(worst)));
        }

        if result.is_synthetic() {
            report.push_str("\n> **WARNING**: results computed on SYNTHETIC data\n");
        }

        let top = result.top();
        if !top.is_empty() {
            report.push_str(&format!("\n## Top {} Declines\n\n", top.len()));
            report.push_str("| Rank | Company | Window | Cumulative | Next Day | Next Return |\n");
            report.push_str("|------|---------|--------|------------|----------|-------------|\n");
            for (i, e) in top.iter().enumerate() {
                report.push_str(&format!(
                    "| {} | {} | {} → {} | {} | {} | {:+.2}% |\n",
                    i + 1,
                    e.company,
                    e.start_date,
                    e.end_date,
                    format_pct(e.cumulative_return_pct),
                    e.next_date,
                    e.next_day_return_pct,
                ));
            }

            let chart = TextBarChart::new(ChartStyle {
                bar_width: result.config.report.bar_width,
                show_title: false,
                ..ChartStyle::default()
            });
            report.push_str("\n```text\n");
            report.push_str(&chart.render(top, summary.streak_length));
            report.push_str("```\n");
        }

        report.push_str(
            "\n## Notes\n\
- Missing returns are handled before indexing; \"next day\" is the next retained value.\n\
- Full decline and outcome lists are exported alongside this report.\n",
        );

        report
    }
}
