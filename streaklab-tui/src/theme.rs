//! Parrot/neon theme tokens for the StreakLab TUI
//!
//! All colors live here and are passed to widgets explicitly; nothing in the
//! analysis crates knows about styling.
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, selection)
//! - **Positive**: Neon green (next-day rebounds)
//! - **Negative**: Hot pink (declines, next-day losses)
//! - **Warning**: Neon orange (synthetic data, config errors)
//! - **Muted**: Steel blue (secondary text)

use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (rebounds)
    pub positive: Color,
    /// Hot pink (declines)
    pub negative: Color,
    /// Neon orange (warnings, alerts)
    pub warning: Color,
    /// Cool purple (borders)
    pub neutral: Color,
    /// Steel blue (muted text)
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    pub fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    /// Color for a next-day return: only strictly positive days are green.
    pub fn return_color(&self, value: f64) -> Color {
        if value > 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    /// Color for the rebound ratio.
    pub fn ratio_color(&self, ratio: f64) -> Color {
        match ratio {
            r if r >= 0.6 => self.positive,
            r if r >= 0.5 => self.accent,
            r if r >= 0.4 => self.neutral,
            _ => self.warning,
        }
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.accent)
        } else {
            Style::default().fg(self.neutral)
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }
}
