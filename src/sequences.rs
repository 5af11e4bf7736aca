//! Per-innings run sequences: runs per over and cumulative score, gap-filled.

use crate::types::{Innings, Over, OverSeries};

/// Build both series for an innings, ascending over number.
///
/// A missing over number contributes 0 to runs-per-over and repeats the last
/// value in the cumulative series — an over with no recorded deliveries, not
/// an error. Both series share identical indexing. Runs are scoreboard
/// semantics: every run counts, byes and leg-byes included.
pub fn over_series(innings: &Innings) -> OverSeries {
  let mut overs: Vec<&Over> = innings.overs.iter().collect();
  overs.sort_by_key(|o| o.number);

  let mut series = OverSeries::default();
  let mut total = 0u32;
  let mut next = 0u32;

  for over in overs {
    while next < over.number {
      series.runs_per_over.push(0);
      series.cumulative.push(total);
      next += 1;
    }
    let over_runs: u32 = over.deliveries.iter().map(|d| d.runs.total).sum();
    total += over_runs;
    series.runs_per_over.push(over_runs);
    series.cumulative.push(total);
    next = over.number + 1;
  }

  series
}

/// Shared chart axis across innings: the longest series length. Shorter
/// series are not padded — an innings that finished early just ends.
pub fn shared_axis_len(all: &[OverSeries]) -> usize {
  all.iter().map(|s| s.cumulative.len()).max().unwrap_or(0)
}
