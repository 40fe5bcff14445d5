//! Next-day aggregation over detected decline events.
//!
//! Every event already carries the return of the day after its window, so
//! aggregation is a fold: classify each next-day return, count, and average.
//! An empty event list yields zero counts, `ratio == 0` and `average == 0`.

use serde::{Deserialize, Serialize};

use crate::streak::DeclineEvent;

/// Direction of the day after a streak for one company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextDayOutcome {
    pub company: String,
    pub next_day_return_pct: f64,
    /// `true` only for strictly positive returns; a flat day counts as negative.
    pub is_positive: bool,
}

impl NextDayOutcome {
    pub fn from_event(event: &DeclineEvent) -> Self {
        Self {
            company: event.company.clone(),
            next_day_return_pct: event.next_day_return_pct,
            is_positive: event.next_day_return_pct > 0.0,
        }
    }
}

/// Counts, rebound ratio and mean next-day return across all events.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NextDaySummary {
    pub positive_count: usize,
    pub negative_count: usize,
    /// `positive_count / total`, 0 when there are no events.
    pub ratio: f64,
    /// Mean of all next-day returns in percent, 0 when there are no events.
    pub average_next_day_return_pct: f64,
    pub outcomes: Vec<NextDayOutcome>,
}

impl NextDaySummary {
    pub fn total(&self) -> usize {
        self.positive_count + self.negative_count
    }
}

/// Aggregate next-day outcomes, preserving event order.
pub fn aggregate(events: &[DeclineEvent]) -> NextDaySummary {
    let outcomes: Vec<NextDayOutcome> = events.iter().map(NextDayOutcome::from_event).collect();

    let positive_count = outcomes.iter().filter(|o| o.is_positive).count();
    let negative_count = outcomes.len() - positive_count;

    let (ratio, average_next_day_return_pct) = if outcomes.is_empty() {
        (0.0, 0.0)
    } else {
        let total = outcomes.len() as f64;
        // Scaling each term first keeps the mean finite for finite inputs.
        let average = outcomes
            .iter()
            .map(|o| o.next_day_return_pct / total)
            .sum::<f64>();
        (positive_count as f64 / total, average)
    };

    NextDaySummary {
        positive_count,
        negative_count,
        ratio,
        average_next_day_return_pct,
        outcomes,
    }
}
