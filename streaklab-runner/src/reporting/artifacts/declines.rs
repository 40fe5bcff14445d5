//! Ranked decline export (CSV).

use anyhow::{Context, Result};
use std::path::Path;

use streaklab_core::DeclineEvent;

pub fn write_declines_csv(path: &Path, ranked: &[DeclineEvent]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create declines CSV {}", path.display()))?;

    wtr.write_record([
        "rank",
        "company",
        "window_start",
        "streak_length",
        "start_date",
        "end_date",
        "cumulative_return_pct",
        "next_date",
        "next_day_return_pct",
    ])?;

    for (i, e) in ranked.iter().enumerate() {
        wtr.write_record([
            &(i + 1).to_string(),
            &e.company,
            &e.window_start.to_string(),
            &e.streak_length.to_string(),
            &e.start_date,
            &e.end_date,
            &format!("{:.4}", e.cumulative_return_pct),
            &e.next_date,
            &format!("{:.4}", e.next_day_return_pct),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
