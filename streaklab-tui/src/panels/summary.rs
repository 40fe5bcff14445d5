//! Summary panel - next-day outcome statistics plus the selected streak.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use streaklab_core::DeclineEvent;
use streaklab_runner::reporting::chart::format_pct;
use streaklab_runner::{AnalysisResult, SummaryStats};

use crate::app::missing_label;
use crate::theme::Theme;

pub struct SummaryPanel<'a> {
    result: &'a AnalysisResult,
    selected: Option<&'a DeclineEvent>,
    theme: &'a Theme,
}

impl<'a> SummaryPanel<'a> {
    pub fn new(
        result: &'a AnalysisResult,
        selected: Option<&'a DeclineEvent>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            result,
            selected,
            theme,
        }
    }

    fn row(&self, label: &'a str, value: String, color: ratatui::style::Color) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!("{label:<16}"), Style::default().fg(self.theme.muted)),
            Span::styled(value, Style::default().fg(color)),
        ])
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let stats = SummaryStats::from_result(self.result);
        let t = self.theme;

        let mut lines = vec![
            self.row("Streak length", format!("{} days", stats.streak_length), t.text_primary),
            self.row(
                "Missing",
                missing_label(self.result.config.analysis.missing).to_string(),
                t.text_primary,
            ),
            self.row(
                "Matched",
                format!("{} / {}", stats.events, stats.companies_scanned),
                t.text_primary,
            ),
            Line::from(""),
            self.row("Next day up", stats.positive_count.to_string(), t.positive),
            self.row("Flat or down", stats.negative_count.to_string(), t.negative),
            self.row(
                "Rebound ratio",
                format!("{:.1}%", stats.ratio * 100.0),
                t.ratio_color(stats.ratio),
            ),
            self.row(
                "Average return",
                format!("{:+.2}%", stats.average_next_day_return_pct),
                t.return_color(stats.average_next_day_return_pct),
            ),
        ];

        if let Some(event) = self.selected {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                event.company.clone(),
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            )));
            lines.push(self.row(
                "Window",
                format!("{} .. {}", event.start_date, event.end_date),
                t.text_secondary,
            ));
            lines.push(self.row(
                "Cumulative",
                format_pct(event.cumulative_return_pct),
                t.negative,
            ));
            lines.push(self.row(
                "Next day",
                format!("{} {:+.2}%", event.next_date, event.next_day_return_pct),
                t.return_color(event.next_day_return_pct),
            ));
        }

        if self.result.is_synthetic() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "SYNTHETIC DATA",
                Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
            )));
        }

        lines
    }
}

impl<'a> Widget for SummaryPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Next Day ")
            .title_style(self.theme.title())
            .borders(Borders::ALL)
            .border_style(self.theme.border(false))
            .style(Style::default().bg(self.theme.background));

        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
