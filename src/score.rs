//! Innings totals: the team's runs/wickets line plus the extras tally.

use crate::config::Config;
use crate::types::{Innings, InningsScore};

/// Fold an innings into its scoreboard line.
///
/// Every run counts toward the total, extras included. Wickets are clamped
/// to config.max_wickets in case the feed double-counts events.
pub fn innings_score(innings: &Innings, config: &Config) -> InningsScore {
  let mut score = InningsScore {
    runs: 0,
    wickets: 0,
    extras: 0,
  };
  for over in &innings.overs {
    for delivery in &over.deliveries {
      score.runs += delivery.runs.total;
      score.extras += delivery.runs.extras;
      score.wickets += delivery.wickets.len() as u32;
    }
  }
  score.wickets = score.wickets.min(config.max_wickets);
  score
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::types::{Delivery, Over, RunsBreakdown, WicketEvent};

  fn delivery(batter_runs: u32, extras: u32, wickets: usize) -> Delivery {
    Delivery {
      batter: "A".into(),
      bowler: "B".into(),
      runs: RunsBreakdown {
        batter: batter_runs,
        extras,
        total: batter_runs + extras,
      },
      wickets: (0..wickets)
        .map(|_| WicketEvent {
          kind: "bowled".into(),
          player_out: "A".into(),
          fielders: vec![],
        })
        .collect(),
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
  fn totals_include_extras() {
    let inn = innings(vec![delivery(4, 0, 0), delivery(0, 2, 0), delivery(1, 1, 1)]);
    let score = innings_score(&inn, &Config::default());
    assert_eq!(score.runs, 8);
    assert_eq!(score.extras, 3);
    assert_eq!(score.wickets, 1);
  }

  #[test]
  fn batter_runs_plus_extras_equal_the_total() {
    let inn = innings(vec![delivery(4, 1, 0), delivery(0, 5, 0), delivery(2, 0, 0)]);
    let score = innings_score(&inn, &Config::default());
    let batter_runs: u32 = crate::batting::batting_card(&inn).iter().map(|e| e.runs).sum();
    assert_eq!(batter_runs + score.extras, score.runs);
  }

  #[test]
  fn wickets_clamp_at_ten() {
    let deliveries: Vec<Delivery> = (0..12).map(|_| delivery(0, 0, 1)).collect();
    let score = innings_score(&innings(deliveries), &Config::default());
    assert_eq!(score.wickets, 10);
  }

  #[test]
  fn empty_innings_is_all_zero() {
    let inn = Innings {
      team: "T".into(),
      overs: vec![],
    };
    let score = innings_score(&inn, &Config::default());
    assert_eq!(score, InningsScore { runs: 0, wickets: 0, extras: 0 });
  }
}
