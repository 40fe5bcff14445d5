//! Decline ranking - steepest cumulative decline first.
//!
//! `sort_by` is stable, so companies with equal declines keep the order in
//! which the scanner found them.

use crate::streak::DeclineEvent;

/// Default number of entries shown by reports and charts.
pub const DEFAULT_TOP: usize = 10;

/// Sort events ascending by `cumulative_return_pct`.
pub fn rank(events: &[DeclineEvent]) -> Vec<DeclineEvent> {
    let mut ranked = events.to_vec();
    ranked.sort_by(|a, b| a.cumulative_return_pct.total_cmp(&b.cumulative_return_pct));
    ranked
}

/// First `k` ranked events (fewer if the list is shorter).
pub fn top(ranked: &[DeclineEvent], k: usize) -> &[DeclineEvent] {
    &ranked[..k.min(ranked.len())]
}
