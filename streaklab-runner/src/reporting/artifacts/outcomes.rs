//! Next-day outcome export (CSV), in discovery order.

use anyhow::{Context, Result};
use std::path::Path;

use streaklab_core::NextDayOutcome;

pub fn write_outcomes_csv(path: &Path, outcomes: &[NextDayOutcome]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create outcomes CSV {}", path.display()))?;

    wtr.write_record(["company", "next_day_return_pct", "direction"])?;
    for o in outcomes {
        let direction = if o.is_positive { "up" } else { "down" };
        let next = format!("{:.4}", o.next_day_return_pct);
        wtr.write_record([o.company.as_str(), next.as_str(), direction])?;
    }
    wtr.flush()?;
    Ok(())
}
