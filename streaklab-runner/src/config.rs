//! Serializable analysis configuration.
//!
//! Loaded from TOML; every field has a default, unknown keys are rejected.
//!
//! ```toml
//! [analysis]
//! streak_length = 3
//! missing = "drop"
//! parallel = false
//!
//! [report]
//! top = 10
//! bar_width = 40
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use streaklab_core::{MissingPolicy, StreakLength, DEFAULT_TOP, MIN_STREAK_LENGTH};

/// Errors from loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error(transparent)]
    Streak(#[from] streaklab_core::ConfigError),

    #[error("report.top must be at least 1")]
    InvalidTop,

    #[error("report.bar_width must be between 1 and {MAX_BAR_WIDTH}, got {0}")]
    InvalidBarWidth(usize),
}

/// Widest text bar the chart renderer accepts.
pub const MAX_BAR_WIDTH: usize = 200;

/// `[analysis]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisSection {
    /// N: consecutive non-positive days that make a streak.
    pub streak_length: usize,
    pub missing: MissingPolicy,
    /// Scan companies on the rayon pool.
    pub parallel: bool,
}

impl Default for AnalysisSection {
    fn default() -> Self {
        Self {
            streak_length: MIN_STREAK_LENGTH,
            missing: MissingPolicy::Drop,
            parallel: false,
        }
    }
}

/// `[report]` section.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ReportSection {
    pub top: usize,
    pub bar_width: usize,
}

impl Default for ReportSection {
    fn default() -> Self {
        Self {
            top: DEFAULT_TOP,
            bar_width: 40,
        }
    }
}

/// Complete analysis configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    pub analysis: AnalysisSection,
    pub report: ReportSection,
}

impl AnalysisConfig {
    /// Load and validate a config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> String {
        toml::to_string_pretty(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.streak_length()?;
        if self.report.top == 0 {
            return Err(ConfigError::InvalidTop);
        }
        if self.report.bar_width == 0 || self.report.bar_width > MAX_BAR_WIDTH {
            return Err(ConfigError::InvalidBarWidth(self.report.bar_width));
        }
        Ok(())
    }

    pub fn streak_length(&self) -> Result<StreakLength, ConfigError> {
        Ok(StreakLength::new(self.analysis.streak_length)?)
    }
}
