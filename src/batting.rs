//! Batting aggregation: one ledger entry per batter, first-appearance order.

use std::collections::HashMap;

use crate::classify;
use crate::dismissal;
use crate::types::{BattingEntry, Innings};

/// Fold an innings into its batting card.
///
/// Balls faced count every non-wide delivery — a leg-bye or no-ball still
/// counts as a ball faced, unlike the bowler's legal-delivery tally. The
/// first wicket event naming the striker freezes the dismissal text; later
/// duplicates in the feed are ignored.
pub fn batting_card(innings: &Innings) -> Vec<BattingEntry> {
  let mut entries: Vec<BattingEntry> = Vec::new();
  let mut index: HashMap<String, usize> = HashMap::new();

  for over in &innings.overs {
    for delivery in &over.deliveries {
      if delivery.batter.is_empty() {
        continue;
      }
      let outcome = classify::classify(delivery);

      let i = *index.entry(delivery.batter.clone()).or_insert_with(|| {
        entries.push(BattingEntry::new(&delivery.batter));
        entries.len() - 1
      });
      let entry = &mut entries[i];

      entry.runs += outcome.batter_runs;
      if delivery.extras.wides == 0 {
        entry.balls += 1;
      }
      if outcome.batter_runs == 4 {
        entry.fours += 1;
      }
      if outcome.batter_runs == 6 {
        entry.sixes += 1;
      }

      if entry.dismissal.is_empty() {
        if let Some(wicket) = outcome
          .wickets
          .iter()
          .find(|w| w.player_out == delivery.batter)
        {
          entry.dismissal = dismissal::dismissal_text(wicket, &delivery.bowler);
        }
      }
    }
  }

  entries
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Delivery, ExtrasBreakdown, Over, RunsBreakdown, WicketEvent};

  fn ball(batter: &str, runs: u32) -> Delivery {
    Delivery {
      batter: batter.into(),
      bowler: "B".into(),
      runs: RunsBreakdown {
        batter: runs,
        extras: 0,
        total: runs,
      },
      ..Delivery::default()
    }
  }

  fn innings(deliveries: Vec<Delivery>) -> Innings {
    Innings {
      team: "T".into(),
      overs: vec![Over {
        number: 0,
        deliveries,
      }],
    }
  }

  #[test]
  fn runs_balls_and_boundaries_accumulate() {
    let inn = innings(vec![ball("A", 4), ball("A", 1), ball("A", 6), ball("A", 0)]);
    let card = batting_card(&inn);
    assert_eq!(card.len(), 1);
    let a = &card[0];
    assert_eq!((a.runs, a.balls, a.fours, a.sixes), (11, 4, 1, 1));
    assert!((a.strike_rate() - 275.0).abs() < 1e-9);
    assert!(a.dismissal.is_empty());
  }

  #[test]
  fn wides_are_not_balls_faced() {
    let mut wide = ball("A", 0);
    wide.runs = RunsBreakdown {
      batter: 0,
      extras: 1,
      total: 1,
    };
    wide.extras = ExtrasBreakdown {
      wides: 1,
      ..ExtrasBreakdown::default()
    };
    let inn = innings(vec![ball("A", 1), wide, ball("A", 0)]);
    let card = batting_card(&inn);
    assert_eq!(card[0].balls, 2);
    assert_eq!(card[0].runs, 1);
  }

  #[test]
  fn legbyes_count_as_balls_faced_without_run_credit() {
    let mut legbye = ball("A", 0);
    legbye.runs = RunsBreakdown {
      batter: 0,
      extras: 2,
      total: 2,
    };
    legbye.extras = ExtrasBreakdown {
      leg_byes: 2,
      ..ExtrasBreakdown::default()
    };
    let card = batting_card(&innings(vec![legbye]));
    assert_eq!(card[0].balls, 1);
    assert_eq!(card[0].runs, 0);
  }

  #[test]
  fn entries_keep_first_appearance_order() {
    let inn = innings(vec![ball("A", 0), ball("B", 4), ball("A", 1), ball("C", 0)]);
    let card = batting_card(&inn);
    let names: Vec<&str> = card.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
  }

  #[test]
  fn first_dismissal_wins() {
    let mut out1 = ball("A", 0);
    out1.wickets = vec![WicketEvent {
      kind: "bowled".into(),
      player_out: "A".into(),
      fielders: vec![],
    }];
    let mut out2 = ball("A", 0);
    out2.wickets = vec![WicketEvent {
      kind: "stumped".into(),
      player_out: "A".into(),
      fielders: vec!["K".into()],
    }];
    let card = batting_card(&innings(vec![out1, out2]));
    assert_eq!(card[0].dismissal, "b B");
  }

  #[test]
  fn wicket_for_another_batter_does_not_mark_the_striker() {
    // Run out of the non-striker: the striker's entry stays not out.
    let mut d = ball("A", 1);
    d.wickets = vec![WicketEvent {
      kind: "run out".into(),
      player_out: "Z".into(),
      fielders: vec!["F".into()],
    }];
    let card = batting_card(&innings(vec![d]));
    assert_eq!(card.len(), 1);
    assert!(card[0].dismissal.is_empty());
  }

  #[test]
  fn strike_rate_is_zero_with_no_balls() {
    let entry = BattingEntry::new("A");
    assert_eq!(entry.strike_rate(), 0.0);
  }
}
