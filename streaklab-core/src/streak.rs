//! Streak scanner - first N-day non-positive run per company.
//!
//! For each company (header order) the scanner slides a window of width N
//! over the company's series and stops at the first window whose returns are
//! all `<= 0`. The scan range reserves one trailing slot, so every reported
//! window has a next day; a run that ends on the last retained value is never
//! reported.
//!
//! The window start and the next-day return are captured in the same pass.
//! Downstream aggregation is an indexed read, not a second scan.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::table::{CompanySeries, MissingPolicy, ReturnTable};

/// Smallest streak length accepted by the scanner.
pub const MIN_STREAK_LENGTH: usize = 3;

/// Invalid analysis parameters. Raised before any scanning happens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("streak length must be at least {MIN_STREAK_LENGTH}, got {requested}")]
    StreakTooShort { requested: usize },
}

/// Validated streak length N (`N >= 3`, no upper bound).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct StreakLength(usize);

impl StreakLength {
    pub fn new(n: usize) -> Result<Self, ConfigError> {
        if n < MIN_STREAK_LENGTH {
            return Err(ConfigError::StreakTooShort { requested: n });
        }
        Ok(Self(n))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl Default for StreakLength {
    fn default() -> Self {
        Self(MIN_STREAK_LENGTH)
    }
}

impl TryFrom<usize> for StreakLength {
    type Error = ConfigError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<StreakLength> for usize {
    fn from(n: StreakLength) -> usize {
        n.0
    }
}

impl std::fmt::Display for StreakLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The first qualifying decline window of one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeclineEvent {
    pub company: String,
    /// Index of the first window value in the company's series.
    pub window_start: usize,
    pub streak_length: usize,
    /// Compounded return over the window, in percent.
    pub cumulative_return_pct: f64,
    /// `series[window_start + streak_length]`, in percent.
    pub next_day_return_pct: f64,
    pub start_date: String,
    pub end_date: String,
    pub next_date: String,
}

/// Scan every company with `MissingPolicy::Drop`.
///
/// Fails with `ConfigError::StreakTooShort` when `n < 3`.
pub fn scan(table: &ReturnTable, n: usize) -> Result<Vec<DeclineEvent>, ConfigError> {
    scan_with_policy(table, StreakLength::new(n)?, MissingPolicy::Drop)
}

/// Scan every company under an explicit missing-value policy.
pub fn scan_with_policy(
    table: &ReturnTable,
    n: StreakLength,
    policy: MissingPolicy,
) -> Result<Vec<DeclineEvent>, ConfigError> {
    let events: Vec<DeclineEvent> = table
        .columns()
        .iter()
        .filter_map(|column| {
            let series = CompanySeries::from_column(column, policy);
            scan_series(&series, n, table.dates())
        })
        .collect();

    tracing::debug!(
        companies = table.company_count(),
        events = events.len(),
        streak_length = n.get(),
        "streak scan complete"
    );
    Ok(events)
}

/// Parallel form of [`scan_with_policy`].
///
/// Companies are scanned on the rayon pool; results come back in header order,
/// so the output is identical to the sequential scan.
pub fn scan_par(
    table: &ReturnTable,
    n: StreakLength,
    policy: MissingPolicy,
) -> Result<Vec<DeclineEvent>, ConfigError> {
    let events: Vec<DeclineEvent> = table
        .columns()
        .par_iter()
        .filter_map(|column| {
            let series = CompanySeries::from_column(column, policy);
            scan_series(&series, n, table.dates())
        })
        .collect();

    tracing::debug!(
        companies = table.company_count(),
        events = events.len(),
        streak_length = n.get(),
        "parallel streak scan complete"
    );
    Ok(events)
}

/// Scan a single series. `dates` is the table's date axis, used for labels.
pub fn scan_series(
    series: &CompanySeries,
    n: StreakLength,
    dates: &[String],
) -> Option<DeclineEvent> {
    let n = n.get();
    let start = first_decline_window(&series.values, n)?;
    let window = &series.values[start..start + n];
    let label = |idx: usize| {
        series
            .rows
            .get(idx)
            .and_then(|&row| dates.get(row))
            .cloned()
            .unwrap_or_default()
    };

    Some(DeclineEvent {
        company: series.company.clone(),
        window_start: start,
        streak_length: n,
        cumulative_return_pct: compounded_return_pct(window),
        next_day_return_pct: series.values[start + n],
        start_date: label(start),
        end_date: label(start + n - 1),
        next_date: label(start + n),
    })
}

/// Start index of the first all-non-positive window of width `n` that still
/// leaves one value after it.
pub fn first_decline_window(values: &[f64], n: usize) -> Option<usize> {
    if n == 0 || values.len() <= n {
        return None;
    }
    (0..values.len() - n).find(|&i| values[i..i + n].iter().all(|&r| r <= 0.0))
}

/// `(Π(1 + r/100) - 1) * 100` over percentage returns.
pub fn compounded_return_pct(returns: &[f64]) -> f64 {
    let growth = returns.iter().fold(1.0, |acc, r| acc * (1.0 + r / 100.0));
    (growth - 1.0) * 100.0
}
