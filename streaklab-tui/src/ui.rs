//! Top-level UI layout: header, chart and summary side by side, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, StatusLevel};
use crate::input::key_hints;
use crate::panels::{DeclineChart, SummaryPanel};
use crate::theme::Theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &App) {
    let theme = Theme::default();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], app, &theme);
    draw_main(f, chunks[1], app, &theme);
    draw_status_bar(f, chunks[2], app, &theme);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let table = &app.data.table;
    let mut spans = vec![
        Span::styled(" StreakLab ", theme.title()),
        Span::styled(
            format!(
                "{} companies x {} days",
                table.company_count(),
                table.row_count()
            ),
            Style::default().fg(theme.text_secondary),
        ),
    ];
    if let Some(result) = &app.result {
        spans.push(Span::styled(
            format!("  run {}", result.run_id),
            Style::default().fg(theme.muted),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_main(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
        .split(area);

    let Some(result) = &app.result else {
        f.render_widget(
            Paragraph::new("No analysis yet").style(Style::default().fg(theme.muted)),
            area,
        );
        return;
    };

    f.render_widget(
        DeclineChart::new(
            result.top(),
            app.config.analysis.streak_length,
            app.selected,
            theme,
        ),
        columns[0],
    );
    f.render_widget(
        SummaryPanel::new(result, app.selected_event(), theme),
        columns[1],
    );
}

fn draw_status_bar(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![
        Span::styled(key_hints(), Style::default().fg(theme.muted)),
        Span::raw(" | "),
    ];

    if let Some((msg, level)) = &app.status_message {
        let color = match level {
            StatusLevel::Info => theme.accent,
            StatusLevel::Warning => theme.warning,
            StatusLevel::Error => theme.negative,
        };
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
