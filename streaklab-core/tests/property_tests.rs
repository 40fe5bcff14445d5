//! Property tests for analysis invariants.
//!
//! Uses proptest to verify:
//! 1. Streak lengths below 3 are always rejected
//! 2. Every reported window is all non-positive, compounded, and the first one
//! 3. Parallel and sequential scans agree
//! 4. Ranking is sorted and stable
//! 5. Aggregation never produces NaN

use proptest::prelude::*;
use streaklab_core::streak::{compounded_return_pct, first_decline_window};
use streaklab_core::{
    aggregate, rank, scan, scan_par, CompanyColumn, MissingPolicy, ReturnTable, StreakLength,
};

// ── Strategies (proptest) ────────────────────────────────────────────

fn arb_cell() -> impl Strategy<Value = Option<f64>> {
    prop_oneof![
        1 => Just(None),
        1 => Just(Some(0.0)),
        6 => (-8.0..8.0_f64).prop_map(|r| Some((r * 100.0).round() / 100.0)),
    ]
}

fn arb_table() -> impl Strategy<Value = ReturnTable> {
    (1usize..30, 1usize..8).prop_flat_map(|(rows, companies)| {
        prop::collection::vec(prop::collection::vec(arb_cell(), rows), companies).prop_map(
            move |cols| {
                let dates = (0..rows).map(|i| format!("day{i}")).collect();
                let columns = cols
                    .into_iter()
                    .enumerate()
                    .map(|(i, returns)| CompanyColumn {
                        company: format!("C{i:03}"),
                        returns,
                    })
                    .collect();
                ReturnTable::new(dates, columns).unwrap()
            },
        )
    })
}

proptest! {
    #[test]
    fn short_streaks_always_rejected(table in arb_table(), n in 0usize..3) {
        prop_assert!(scan(&table, n).is_err());
    }

    #[test]
    fn reported_windows_are_first_and_compounded(table in arb_table(), n in 3usize..6) {
        let events = scan(&table, n).unwrap();

        let mut seen = std::collections::HashSet::new();
        for event in &events {
            prop_assert!(seen.insert(event.company.clone()), "company reported twice");

            let series = table.series(&event.company, MissingPolicy::Drop).unwrap();
            let window = &series.values[event.window_start..event.window_start + n];

            prop_assert!(window.iter().all(|&r| r <= 0.0));
            prop_assert_eq!(first_decline_window(&series.values, n), Some(event.window_start));
            prop_assert_eq!(event.next_day_return_pct, series.values[event.window_start + n]);

            let expected = compounded_return_pct(window);
            prop_assert!((event.cumulative_return_pct - expected).abs() < 1e-9);
            prop_assert!(event.cumulative_return_pct <= 0.0);
        }
    }

    #[test]
    fn unreported_companies_have_no_window(table in arb_table(), n in 3usize..6) {
        let events = scan(&table, n).unwrap();
        for company in table.companies() {
            let series = table.series(company, MissingPolicy::Drop).unwrap();
            let reported = events.iter().any(|e| e.company == company);
            prop_assert_eq!(reported, first_decline_window(&series.values, n).is_some());
        }
    }

    #[test]
    fn parallel_scan_agrees(table in arb_table(), n in 3usize..6) {
        let n = StreakLength::new(n).unwrap();
        for policy in [MissingPolicy::Drop, MissingPolicy::Interpolate] {
            let seq = streaklab_core::scan_with_policy(&table, n, policy).unwrap();
            let par = scan_par(&table, n, policy).unwrap();
            prop_assert_eq!(seq, par);
        }
    }

    #[test]
    fn ranking_is_sorted_and_stable(table in arb_table()) {
        let events = scan(&table, 3).unwrap();
        let ranked = rank(&events);

        prop_assert_eq!(ranked.len(), events.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].cumulative_return_pct <= pair[1].cumulative_return_pct);
            if pair[0].cumulative_return_pct == pair[1].cumulative_return_pct {
                let pos = |c: &str| events.iter().position(|e| e.company == c).unwrap();
                prop_assert!(pos(&pair[0].company) < pos(&pair[1].company));
            }
        }
    }

    #[test]
    fn aggregation_is_finite_and_consistent(table in arb_table(), n in 3usize..5) {
        let events = scan(&table, n).unwrap();
        let summary = aggregate(&events);

        prop_assert_eq!(summary.total(), events.len());
        prop_assert!(summary.ratio.is_finite());
        prop_assert!((0.0..=1.0).contains(&summary.ratio));
        prop_assert!(summary.average_next_day_return_pct.is_finite());
    }
}
