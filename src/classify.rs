//! Delivery classification: the single source of truth for legal-ball status
//! and bowler-conceded runs, shared by every aggregator.

use crate::types::{Delivery, WicketEvent};

/// Classified view of one delivery.
#[derive(Debug, Clone, Copy)]
pub struct BallOutcome<'a> {
  /// Neither a wide nor a no-ball; counts toward the 6-ball over.
  pub is_legal: bool,
  /// Runs credited to the batter alone.
  pub batter_runs: u32,
  /// Runs charged to the bowler: total minus byes and leg-byes.
  pub conceded_runs: u32,
  /// Wicket events on this delivery, unchanged.
  pub wickets: &'a [WicketEvent],
}

/// Classify one delivery. No error conditions: absent fields are already
/// zero/empty after normalization, and byes/leg-byes larger than the total
/// saturate to zero conceded rather than underflowing.
pub fn classify(delivery: &Delivery) -> BallOutcome<'_> {
  BallOutcome {
    is_legal: delivery.extras.wides == 0 && delivery.extras.no_balls == 0,
    batter_runs: delivery.runs.batter,
    conceded_runs: delivery
      .runs
      .total
      .saturating_sub(delivery.extras.byes + delivery.extras.leg_byes),
    wickets: &delivery.wickets,
  }
}
