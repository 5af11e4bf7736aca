//! Core engine: one call transforms one match record into derived statistics.

use crate::batting;
use crate::bowling;
use crate::config::Config;
use crate::error::EngineError;
use crate::normalize;
use crate::ranking;
use crate::score;
use crate::sequences;
use crate::types::*;

/// The scorecard aggregation engine. Holds only configuration; every ledger
/// is local to a single process call, so concurrent calls are independent.
pub struct Engine {
  config: Config,
}

impl Engine {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  pub fn with_defaults() -> Self {
    Self::new(Config::default())
  }

  /// Parse a raw JSON object and process it.
  pub fn process_json(&self, raw: &str) -> Result<MatchReport, EngineError> {
    let inbound: InboundMatch = serde_json::from_str(raw)?;
    self.process(&inbound)
  }

  /// Process one inbound match record into a full derived report.
  pub fn process(&self, raw: &InboundMatch) -> Result<MatchReport, EngineError> {
    let record = normalize::normalize(raw)?;

    let mut innings_reports = Vec::with_capacity(record.innings.len());
    let mut cards = Vec::with_capacity(record.innings.len());
    let mut all_series = Vec::with_capacity(record.innings.len());

    for innings in &record.innings {
      let batting = batting::batting_card(innings);
      let bowling = bowling::bowling_card(innings);
      let series = sequences::over_series(innings);

      innings_reports.push(InningsReport {
        team: innings.team.clone(),
        score: score::innings_score(innings, &self.config),
        batting: batting.iter().map(batting_row).collect(),
        bowling: bowling.iter().map(bowling_row).collect(),
        runs_per_over: series.runs_per_over.clone(),
        cumulative_runs: series.cumulative.clone(),
        top_scorers: ranking::top_scorers(&batting, &self.config),
        economy_leaders: ranking::economy_leaders(&bowling, &self.config),
      });
      cards.push(batting);
      all_series.push(series);
    }

    let strike_rate_leaders = ranking::strike_rate_leaders(&cards, &self.config);

    Ok(MatchReport {
      match_id: match_id(&record),
      summary: assemble_summary(&record, &innings_reports),
      over_axis: sequences::shared_axis_len(&all_series),
      innings: innings_reports,
      strike_rate_leaders,
    })
  }
}

fn batting_row(entry: &BattingEntry) -> BattingRow {
  BattingRow {
    name: entry.name.clone(),
    runs: entry.runs,
    balls: entry.balls,
    fours: entry.fours,
    sixes: entry.sixes,
    strike_rate: (entry.strike_rate() * 100.0).round() / 100.0,
    dismissal: entry.dismissal.clone(),
  }
}

fn bowling_row(entry: &BowlingEntry) -> BowlingRow {
  BowlingRow {
    name: entry.name.clone(),
    overs: entry.overs(),
    maidens: entry.maidens,
    runs: entry.runs,
    wickets: entry.wickets,
    economy: (entry.economy() * 100.0).round() / 100.0,
  }
}

fn assemble_summary(record: &MatchRecord, innings: &[InningsReport]) -> MatchHeader {
  MatchHeader {
    teams: record.teams.clone(),
    date: record.date.map(|d| d.to_string()).unwrap_or_default(),
    event: record.event.clone(),
    venue: record.venue.clone(),
    result: result_text(&record.outcome),
    scores: innings
      .iter()
      .map(|i| ScoreLine {
        team: i.team.clone(),
        runs: i.score.runs,
        wickets: i.score.wickets,
        extras: i.score.extras,
      })
      .collect(),
  }
}

/// Human-readable result line. Wicket margins take precedence over run
/// margins; with no winner, fall back to the feed's raw result string.
fn result_text(outcome: &Outcome) -> String {
  match &outcome.winner {
    Some(winner) => match (outcome.by_wickets, outcome.by_runs) {
      (Some(wickets), _) => format!("{} won by {} wickets", winner, wickets),
      (None, Some(runs)) => format!("{} won by {} runs", winner, runs),
      (None, None) => format!("{} won", winner),
    },
    None => outcome.result.clone().unwrap_or_default(),
  }
}

/// Stable match id: hash of teams + date + venue, so repeated runs over the
/// same record agree.
fn match_id(record: &MatchRecord) -> String {
  let mut hasher = blake3::Hasher::new();
  hasher.update(record.teams[0].as_bytes());
  hasher.update(b"|");
  hasher.update(record.teams[1].as_bytes());
  hasher.update(b"|");
  if let Some(date) = record.date {
    hasher.update(date.to_string().as_bytes());
  }
  hasher.update(b"|");
  hasher.update(record.venue.as_bytes());
  let hex = hasher.finalize().to_hex();
  format!("match-{}", &hex[..16])
}
