//! Bowling aggregation: per-bowler figures with over-granularity maiden
//! detection.

use std::collections::HashMap;

use crate::classify;
use crate::types::{BowlingEntry, Innings, BALLS_PER_OVER};

/// Fold an innings into its bowling card.
///
/// Maidens are decided after each over: exactly 6 legal deliveries, a single
/// bowler for the whole over, and zero conceded runs across all of its
/// deliveries. Wide and no-ball runs count against the over, so an over
/// containing either is never a maiden; so is an interrupted or re-bowled
/// over with a legal-delivery count other than 6.
pub fn bowling_card(innings: &Innings) -> Vec<BowlingEntry> {
  let mut entries: Vec<BowlingEntry> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for over in &innings.overs {
    let mut conceded_in_over = 0u32;
    let mut legal_in_over = 0u32;
    let mut over_bowler: Option<&str> = None;
    let mut single_bowler = true;

    for delivery in &over.deliveries {
      if delivery.bowler.is_empty() {
        continue;
      }
      let outcome = classify::classify(delivery);

      match over_bowler {
        None => over_bowler = Some(&delivery.bowler),
        Some(name) if name != delivery.bowler => single_bowler = false,
        Some(_) => {}
      }

      let i = *index.entry(delivery.bowler.clone()).or_insert_with(|| {
        entries.push(BowlingEntry::new(&delivery.bowler));
        entries.len() - 1
      });
      let entry = &mut entries[i];

      entry.runs += outcome.conceded_runs;
      entry.wickets += outcome.wickets.len() as u32;
      if outcome.is_legal {
        entry.legal_deliveries += 1;
        legal_in_over += 1;
      }
      conceded_in_over += outcome.conceded_runs;
    }

    if single_bowler && legal_in_over == BALLS_PER_OVER && conceded_in_over == 0 {
      if let Some(name) = over_bowler {
        if let Some(&i) = index.get(name) {
          entries[i].maidens += 1;
        }
      }
    }
  }

  entries
}
