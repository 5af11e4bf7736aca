//! Dismissal text: tagged dismissal kinds mapped to scorecard templates.

use crate::types::WicketEvent;

/// Closed set of dismissal kinds. Parsed loosely from feed text; anything
/// unrecognized is Other and renders as its raw kind string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissalKind {
  Bowled,
  Caught,
  CaughtAndBowled,
  Lbw,
  Stumped,
  RunOut,
  HitWicket,
  RetiredHurt,
  Other,
}

impl DismissalKind {
  pub fn from_str_loose(s: &str) -> Self {
    match s.trim().to_ascii_lowercase().replace('-', " ").replace('_', " ").as_str() {
      "bowled" => Self::Bowled,
      "caught" => Self::Caught,
      "caught and bowled" => Self::CaughtAndBowled,
      "lbw" => Self::Lbw,
      "stumped" => Self::Stumped,
      "run out" => Self::RunOut,
      "hit wicket" => Self::HitWicket,
      "retired hurt" => Self::RetiredHurt,
      _ => Self::Other,
    }
  }
}

/// Scorecard dismissal text for one wicket event, given the bowler of the
/// delivery on which the wicket fell.
///
/// Multiple fielders join with " / "; output is whitespace-normalized.
pub fn dismissal_text(wicket: &WicketEvent, bowler: &str) -> String {
  let fielders = wicket.fielders.join(" / ");
  let text = match DismissalKind::from_str_loose(&wicket.kind) {
    DismissalKind::Caught if fielders == bowler => format!("c & b {}", bowler),
    DismissalKind::Caught => format!("c {} b {}", fielders, bowler),
    DismissalKind::CaughtAndBowled => format!("c & b {}", bowler),
    DismissalKind::Bowled => format!("b {}", bowler),
    DismissalKind::Lbw => format!("lbw b {}", bowler),
    DismissalKind::Stumped => format!("st {} b {}", fielders, bowler),
    DismissalKind::RunOut => format!("run out ({})", fielders),
    DismissalKind::HitWicket => format!("hit wicket b {}", bowler),
    DismissalKind::RetiredHurt | DismissalKind::Other => wicket.kind.clone(),
  };
  // Collapse doubled spaces from empty fielder lists and trim the ends.
  text.split_whitespace().collect::<Vec<_>>().join(" ")
}
