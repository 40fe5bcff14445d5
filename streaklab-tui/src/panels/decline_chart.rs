//! Decline chart - horizontal bar per company
//!
//! Bar length is the magnitude of the cumulative decline; the label shows the
//! signed percentage with two decimals. The selected row uses the accent color.

use ratatui::{
    buffer::Buffer,
    layout::{Direction, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Widget},
};
use streaklab_core::DeclineEvent;
use streaklab_runner::reporting::chart::format_pct;

use crate::theme::Theme;

pub struct DeclineChart<'a> {
    events: &'a [DeclineEvent],
    streak_length: usize,
    selected: usize,
    theme: &'a Theme,
}

impl<'a> DeclineChart<'a> {
    pub fn new(
        events: &'a [DeclineEvent],
        streak_length: usize,
        selected: usize,
        theme: &'a Theme,
    ) -> Self {
        Self {
            events,
            streak_length,
            selected,
            theme,
        }
    }

    /// Bar height in hundredths of a percent.
    fn bar_value(event: &DeclineEvent) -> u64 {
        (event.cumulative_return_pct.abs() * 100.0).round() as u64
    }
}

impl<'a> Widget for DeclineChart<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(format!(
                " Top {} by {}-day cumulative decline ",
                self.events.len(),
                self.streak_length
            ))
            .title_style(self.theme.title())
            .borders(Borders::ALL)
            .border_style(self.theme.border(true))
            .style(Style::default().bg(self.theme.background));

        if self.events.is_empty() {
            Paragraph::new(format!(
                "No company had {} consecutive non-positive days.",
                self.streak_length
            ))
            .style(Style::default().fg(self.theme.muted))
            .block(block)
            .render(area, buf);
            return;
        }

        let bars: Vec<Bar> = self
            .events
            .iter()
            .enumerate()
            .map(|(i, event)| {
                let color = if i == self.selected {
                    self.theme.accent
                } else {
                    self.theme.negative
                };
                Bar::default()
                    .label(Line::from(event.company.clone()))
                    .value(Self::bar_value(event))
                    .text_value(format_pct(event.cumulative_return_pct))
                    .style(Style::default().fg(color))
                    .value_style(
                        Style::default()
                            .fg(self.theme.background)
                            .bg(color)
                            .add_modifier(Modifier::BOLD),
                    )
            })
            .collect();

        BarChart::default()
            .block(block)
            .direction(Direction::Horizontal)
            .bar_width(1)
            .bar_gap(0)
            .label_style(Style::default().fg(self.theme.text_primary))
            .data(BarGroup::default().bars(&bars))
            .render(area, buf);
    }
}
