//! Engine configuration with sane defaults.

/// Tunable thresholds for ranking, bucketing, and defensive clamps.
#[derive(Debug, Clone)]
pub struct Config {
  /// Entries kept by leaderboards and before the "Others" bucket.
  pub top_n: usize,
  /// Minimum balls faced to qualify for the strike-rate leaderboard.
  pub strike_rate_min_balls: u32,
  /// Minimum legal deliveries to qualify for the economy leaderboard.
  pub economy_min_deliveries: u32,
  /// Reported wickets per innings are clamped to this.
  pub max_wickets: u32,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      top_n: 5,
      strike_rate_min_balls: 10,
      economy_min_deliveries: 1,
      max_wickets: 10,
    }
  }
}
