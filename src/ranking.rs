//! Ranking and bucketing: top-N-with-Others shares and filtered rate
//! leaderboards.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::config::Config;
use crate::types::{BattingEntry, BowlingEntry, RatedEntry, ShareEntry};

/// Sort descending by runs, keep the first n, fold the remainder into a
/// single "Others" entry appended only when its sum is strictly positive.
///
/// Ties at the boundary keep the input order (stable sort, no secondary
/// key). Zero-run entries are dropped up front; they contribute nothing to a
/// share-of-total display, so the displayed sum still equals the input sum.
pub fn top_with_others(mut entries: Vec<ShareEntry>, n: usize) -> Vec<ShareEntry> {
  entries.retain(|e| e.runs > 0);
  entries.sort_by(|a, b| b.runs.cmp(&a.runs));
  if entries.len() > n {
    let others: u32 = entries[n..].iter().map(|e| e.runs).sum();
    entries.truncate(n);
    if others > 0 {
      entries.push(ShareEntry {
        name: "Others".into(),
        runs: others,
      });
    }
  }
  entries
}

/// Top run scorers of one innings as a share-of-total breakdown.
pub fn top_scorers(batting: &[BattingEntry], config: &Config) -> Vec<ShareEntry> {
  let entries = batting
    .iter()
    .map(|b| ShareEntry {
      name: b.name.clone(),
      runs: b.runs,
    })
    .collect();
  top_with_others(entries, config.top_n)
}

/// Match-wide strike-rate leaderboard, higher is better.
///
/// Cards from all innings are merged by batter name before the minimum-balls
/// filter, so a batter's rate reflects the whole match.
pub fn strike_rate_leaders(cards: &[Vec<BattingEntry>], config: &Config) -> Vec<RatedEntry> {
  let mut merged: Vec<(String, u32, u32)> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for entry in cards.iter().flatten() {
    let i = *index.entry(entry.name.clone()).or_insert_with(|| {
      merged.push((entry.name.clone(), 0, 0));
      merged.len() - 1
    });
    merged[i].1 += entry.runs;
    merged[i].2 += entry.balls;
  }

  let mut rated: Vec<RatedEntry> = merged
    .into_iter()
    .filter(|(_, _, balls)| *balls >= config.strike_rate_min_balls && *balls > 0)
    .map(|(name, runs, balls)| RatedEntry {
      name,
      value: (runs as f64 / balls as f64 * 100.0 * 100.0).round() / 100.0,
    })
    .collect();

  rated.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(Ordering::Equal));
  rated.truncate(config.top_n);
  rated
}

/// Per-innings economy leaderboard, lower is better.
pub fn economy_leaders(bowling: &[BowlingEntry], config: &Config) -> Vec<RatedEntry> {
  let mut rated: Vec<RatedEntry> = bowling
    .iter()
    .filter(|b| b.legal_deliveries >= config.economy_min_deliveries && b.legal_deliveries > 0)
    .map(|b| RatedEntry {
      name: b.name.clone(),
      value: (b.economy() * 100.0).round() / 100.0,
    })
    .collect();

  rated.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
  rated.truncate(config.top_n);
  rated
}
