//! Application state for the streak viewer.
//!
//! The loaded table stays in memory; every parameter change re-runs the
//! analysis synchronously since a full scan is a few milliseconds.

use streaklab_core::{DeclineEvent, MissingPolicy, MIN_STREAK_LENGTH};
use streaklab_runner::{run_analysis_on, AnalysisConfig, AnalysisResult, LoadedTable};

/// Severity of the status bar message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

pub struct App {
    pub data: LoadedTable,
    pub config: AnalysisConfig,
    pub result: Option<AnalysisResult>,
    /// Index into the displayed top slice.
    pub selected: usize,
    pub status_message: Option<(String, StatusLevel)>,
    pub running: bool,
}

impl App {
    /// Build the app and run the first analysis.
    pub fn new(data: LoadedTable, config: AnalysisConfig) -> Self {
        let mut app = Self {
            data,
            config,
            result: None,
            selected: 0,
            status_message: None,
            running: true,
        };
        app.rerun();
        app
    }

    /// Re-run the analysis with the current config.
    ///
    /// On failure the previous result stays on screen and the error goes to
    /// the status bar.
    pub fn rerun(&mut self) {
        match run_analysis_on(&self.config, &self.data) {
            Ok(result) => {
                tracing::info!(
                    run_id = %result.run_id,
                    events = result.ranked.len(),
                    "analysis refreshed"
                );
                let msg = format!(
                    "N={} missing={} -> {} companies matched",
                    self.config.analysis.streak_length,
                    missing_label(self.config.analysis.missing),
                    result.ranked.len()
                );
                let level = if result.is_synthetic() {
                    StatusLevel::Warning
                } else {
                    StatusLevel::Info
                };
                self.result = Some(result);
                self.clamp_selection();
                self.status_message = Some((msg, level));
            }
            Err(e) => {
                tracing::warn!(error = %e, "analysis failed");
                self.status_message = Some((e.to_string(), StatusLevel::Error));
            }
        }
    }

    pub fn increase_streak(&mut self) {
        self.config.analysis.streak_length += 1;
        self.rerun();
    }

    pub fn decrease_streak(&mut self) {
        if self.config.analysis.streak_length <= MIN_STREAK_LENGTH {
            self.status_message = Some((
                format!("streak length cannot go below {MIN_STREAK_LENGTH}"),
                StatusLevel::Warning,
            ));
            return;
        }
        self.config.analysis.streak_length -= 1;
        self.rerun();
    }

    pub fn toggle_missing_policy(&mut self) {
        self.config.analysis.missing = match self.config.analysis.missing {
            MissingPolicy::Drop => MissingPolicy::Interpolate,
            MissingPolicy::Interpolate => MissingPolicy::Drop,
        };
        self.rerun();
    }

    /// Events shown in the chart.
    pub fn visible_events(&self) -> &[DeclineEvent] {
        self.result.as_ref().map(|r| r.top()).unwrap_or(&[])
    }

    pub fn selected_event(&self) -> Option<&DeclineEvent> {
        self.visible_events().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_events().len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_events().len();
        if len > 0 {
            self.selected = (self.selected + len - 1) % len;
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_events().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}

pub fn missing_label(policy: MissingPolicy) -> &'static str {
    match policy {
        MissingPolicy::Drop => "drop",
        MissingPolicy::Interpolate => "interpolate",
    }
}
