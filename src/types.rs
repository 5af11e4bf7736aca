//! Core types for the scorecard engine (JSON contracts + internal models).

use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

/// Balls in a completed over; also the divisor for overs and economy figures.
pub const BALLS_PER_OVER: u32 = 6;

// ---------------------------------------------------------------------------
// Inbound types (JSON contract — what the caller sends)
// ---------------------------------------------------------------------------

/// Top-level inbound match record. Unknown fields are silently ignored;
/// absent optional fields default to zero/empty during normalization.
#[derive(Debug, Clone, Deserialize)]
pub struct InboundMatch {
  #[serde(default)]
  pub info: Option<InboundInfo>,
  #[serde(default)]
  pub innings: Option<Vec<InboundInnings>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundInfo {
  #[serde(default)]
  pub teams: Vec<String>,
  /// Match dates as "YYYY-MM-DD"; only the first is used.
  #[serde(default)]
  pub dates: Vec<String>,
  #[serde(default)]
  pub event: Option<InboundEvent>,
  #[serde(default)]
  pub venue: Option<String>,
  #[serde(default)]
  pub outcome: Option<InboundOutcome>,
}

/// The event field appears both as a bare string and as an object with a
/// name in real feeds.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum InboundEvent {
  Name(String),
  Detail {
    #[serde(default)]
    name: String,
  },
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundOutcome {
  #[serde(default)]
  pub winner: Option<String>,
  #[serde(default)]
  pub by: Option<InboundMargin>,
  #[serde(default)]
  pub result: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundMargin {
  #[serde(default)]
  pub runs: Option<u32>,
  #[serde(default)]
  pub wickets: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundInnings {
  #[serde(default)]
  pub team: String,
  /// Absent overs list: the innings yields empty aggregates, never an error.
  #[serde(default)]
  pub overs: Option<Vec<InboundOver>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundOver {
  /// 0-based over number as bowled. Gaps are tolerated (see sequences).
  #[serde(default)]
  pub over: u32,
  #[serde(default)]
  pub deliveries: Option<Vec<InboundDelivery>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundDelivery {
  #[serde(default)]
  pub batter: String,
  #[serde(default)]
  pub non_striker: String,
  #[serde(default)]
  pub bowler: String,
  #[serde(default)]
  pub runs: InboundRuns,
  #[serde(default)]
  pub extras: InboundExtras,
  #[serde(default)]
  pub wickets: Vec<InboundWicket>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundRuns {
  #[serde(default)]
  pub batter: u32,
  #[serde(default)]
  pub extras: u32,
  #[serde(default)]
  pub total: u32,
}

/// Extras sub-split. Field names match the feed (no underscores).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InboundExtras {
  #[serde(default)]
  pub byes: u32,
  #[serde(default)]
  pub legbyes: u32,
  #[serde(default)]
  pub wides: u32,
  #[serde(default)]
  pub noballs: u32,
  #[serde(default)]
  pub penalty: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundWicket {
  #[serde(default)]
  pub kind: String,
  #[serde(default)]
  pub player_out: String,
  #[serde(default)]
  pub fielders: Vec<InboundFielder>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InboundFielder {
  #[serde(default)]
  pub name: String,
}

// ---------------------------------------------------------------------------
// Canonical internal model (after normalization)
// ---------------------------------------------------------------------------

/// Canonical match record: defaults applied, fielders flattened to names.
#[derive(Debug, Clone)]
pub struct MatchRecord {
  pub teams: [String; 2],
  pub date: Option<NaiveDate>,
  pub event: String,
  pub venue: String,
  pub outcome: Outcome,
  pub innings: Vec<Innings>,
}

#[derive(Debug, Clone, Default)]
pub struct Outcome {
  pub winner: Option<String>,
  pub by_runs: Option<u32>,
  pub by_wickets: Option<u32>,
  pub result: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Innings {
  pub team: String,
  pub overs: Vec<Over>,
}

#[derive(Debug, Clone)]
pub struct Over {
  pub number: u32,
  pub deliveries: Vec<Delivery>,
}

#[derive(Debug, Clone, Default)]
pub struct Delivery {
  pub batter: String,
  pub non_striker: String,
  pub bowler: String,
  pub runs: RunsBreakdown,
  pub extras: ExtrasBreakdown,
  pub wickets: Vec<WicketEvent>,
}

#[derive(Debug, Clone, Default)]
pub struct RunsBreakdown {
  /// Runs credited to the batter alone; never includes extras.
  pub batter: u32,
  pub extras: u32,
  pub total: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ExtrasBreakdown {
  pub byes: u32,
  pub leg_byes: u32,
  pub wides: u32,
  pub no_balls: u32,
  pub penalty: u32,
}

/// One dismissal on a delivery. `kind` keeps the raw feed text; parse it
/// with DismissalKind::from_str_loose for the closed set.
#[derive(Debug, Clone, Default)]
pub struct WicketEvent {
  pub kind: String,
  pub player_out: String,
  /// Fielder names; empty for bowled/lbw.
  pub fielders: Vec<String>,
}

// ---------------------------------------------------------------------------
// Derived ledger entries (rates are always computed on read, never stored)
// ---------------------------------------------------------------------------

/// One batting-card entry, accumulated per batter per innings.
#[derive(Debug, Clone, PartialEq)]
pub struct BattingEntry {
  pub name: String,
  pub runs: u32,
  /// Balls faced: every non-wide delivery, leg-byes and no-balls included.
  pub balls: u32,
  pub fours: u32,
  pub sixes: u32,
  /// Empty string means not out.
  pub dismissal: String,
}

impl BattingEntry {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      runs: 0,
      balls: 0,
      fours: 0,
      sixes: 0,
      dismissal: String::new(),
    }
  }

  /// 100 × runs / balls; 0 when no balls faced (not a division fault).
  pub fn strike_rate(&self) -> f64 {
    if self.balls == 0 {
      0.0
    } else {
      self.runs as f64 / self.balls as f64 * 100.0
    }
  }
}

/// One bowling-card entry, accumulated per bowler per innings.
#[derive(Debug, Clone, PartialEq)]
pub struct BowlingEntry {
  pub name: String,
  /// Deliveries that were neither wides nor no-balls.
  pub legal_deliveries: u32,
  pub maidens: u32,
  /// Runs conceded: total minus byes and leg-byes.
  pub runs: u32,
  pub wickets: u32,
}

impl BowlingEntry {
  pub fn new(name: &str) -> Self {
    Self {
      name: name.to_string(),
      legal_deliveries: 0,
      maidens: 0,
      runs: 0,
      wickets: 0,
    }
  }

  /// Overs figure as "X.Y": completed overs, then balls into the current one.
  pub fn overs(&self) -> String {
    format!(
      "{}.{}",
      self.legal_deliveries / BALLS_PER_OVER,
      self.legal_deliveries % BALLS_PER_OVER
    )
  }

  /// Runs conceded per over bowled; 0 when no legal deliveries.
  pub fn economy(&self) -> f64 {
    if self.legal_deliveries == 0 {
      0.0
    } else {
      self.runs as f64 * BALLS_PER_OVER as f64 / self.legal_deliveries as f64
    }
  }
}

/// A team's scoreboard line for one innings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InningsScore {
  pub runs: u32,
  /// Clamped to the per-innings wicket cap.
  pub wickets: u32,
  pub extras: u32,
}

/// Run-per-over and cumulative-score series with identical indexing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverSeries {
  pub runs_per_over: Vec<u32>,
  pub cumulative: Vec<u32>,
}

/// One slice of a share-of-total display (top scorers + "Others").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShareEntry {
  pub name: String,
  pub runs: u32,
}

/// One leaderboard row: a name and its rate metric, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatedEntry {
  pub name: String,
  pub value: f64,
}

// ---------------------------------------------------------------------------
// Output types (JSON contract — what we emit)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct BattingRow {
  pub name: String,
  pub runs: u32,
  pub balls: u32,
  pub fours: u32,
  pub sixes: u32,
  pub strike_rate: f64,
  /// Empty string means not out.
  pub dismissal: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct BowlingRow {
  pub name: String,
  pub overs: String,
  pub maidens: u32,
  pub runs: u32,
  pub wickets: u32,
  pub economy: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct InningsReport {
  pub team: String,
  pub score: InningsScore,
  pub batting: Vec<BattingRow>,
  pub bowling: Vec<BowlingRow>,
  pub runs_per_over: Vec<u32>,
  pub cumulative_runs: Vec<u32>,
  pub top_scorers: Vec<ShareEntry>,
  pub economy_leaders: Vec<RatedEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchHeader {
  pub teams: [String; 2],
  /// ISO date (YYYY-MM-DD); empty when the feed carried no dates.
  pub date: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub event: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub venue: String,
  pub result: String,
  pub scores: Vec<ScoreLine>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreLine {
  pub team: String,
  pub runs: u32,
  pub wickets: u32,
  pub extras: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchReport {
  pub match_id: String,
  pub summary: MatchHeader,
  /// Shared chart axis: the longest over series across innings.
  pub over_axis: usize,
  pub innings: Vec<InningsReport>,
  pub strike_rate_leaders: Vec<RatedEntry>,
}

// ---------------------------------------------------------------------------
// CLI stream wrappers
// ---------------------------------------------------------------------------

/// Structured error output for invalid input.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorOutput {
  pub error: bool,
  pub message: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub field: Option<String>,
}

impl ErrorOutput {
  pub fn new(message: impl Into<String>) -> Self {
    Self {
      error: true,
      message: message.into(),
      field: None,
    }
  }

  pub fn with_field(mut self, field: impl Into<String>) -> Self {
    self.field = Some(field.into());
    self
  }
}
