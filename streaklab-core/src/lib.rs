//! StreakLab Core - decline-streak analysis over daily return tables.
//!
//! This crate contains the pure analysis, with no I/O and no rendering:
//! - Typed return table with explicit missing-value policy
//! - Streak scanner: first N-day non-positive window per company
//! - Next-day aggregation: rebound counts, ratio, average return
//! - Ranking by cumulative decline

pub mod outcome;
pub mod rank;
pub mod streak;
pub mod table;

pub use outcome::{aggregate, NextDayOutcome, NextDaySummary};
pub use rank::{rank, top, DEFAULT_TOP};
pub use streak::{
    scan, scan_par, scan_with_policy, ConfigError, DeclineEvent, StreakLength, MIN_STREAK_LENGTH,
};
pub use table::{CompanyColumn, CompanySeries, MissingPolicy, ReturnTable, TableError};
