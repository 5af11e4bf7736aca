//! Normalize inbound match records into the canonical internal model.

use chrono::NaiveDate;

use crate::error::EngineError;
use crate::types::*;

/// Parse and normalize an InboundMatch into a canonical MatchRecord.
///
/// Absent optional fields become zero/empty; fielder objects flatten to
/// names. Only structurally unusable records are rejected: no match info, a
/// teams list that is not exactly two non-empty names, no innings list, or
/// an unparseable first date. An innings without overs (or an over without
/// deliveries) is kept with an empty sequence so its aggregates come out
/// empty without failing siblings.
pub fn normalize(raw: &InboundMatch) -> Result<MatchRecord, EngineError> {
  let info = raw
    .info
    .as_ref()
    .ok_or_else(|| EngineError::validation("info", "missing match info"))?;

  if info.teams.len() != 2 {
    return Err(EngineError::validation(
      "info.teams",
      "expected exactly two teams",
    ));
  }
  if info.teams.iter().any(|t| t.is_empty()) {
    return Err(EngineError::validation(
      "info.teams",
      "team names must not be empty",
    ));
  }

  let innings_raw = raw
    .innings
    .as_ref()
    .ok_or_else(|| EngineError::validation("innings", "missing innings list"))?;

  let date = match info.dates.first() {
    Some(s) => Some(
      NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| {
        EngineError::validation("info.dates", &format!("invalid date: {}", e))
      })?,
    ),
    None => None,
  };

  let event = match &info.event {
    Some(InboundEvent::Name(name)) => name.clone(),
    Some(InboundEvent::Detail { name }) => name.clone(),
    None => String::new(),
  };

  let outcome = info
    .outcome
    .as_ref()
    .map(|o| Outcome {
      winner: o.winner.clone(),
      by_runs: o.by.as_ref().and_then(|b| b.runs),
      by_wickets: o.by.as_ref().and_then(|b| b.wickets),
      result: o.result.clone(),
    })
    .unwrap_or_default();

  Ok(MatchRecord {
    teams: [info.teams[0].clone(), info.teams[1].clone()],
    date,
    event,
    venue: info.venue.clone().unwrap_or_default(),
    outcome,
    innings: innings_raw.iter().map(normalize_innings).collect(),
  })
}

fn normalize_innings(raw: &InboundInnings) -> Innings {
  let overs = match &raw.overs {
    Some(overs) => overs.iter().map(normalize_over).collect(),
    None => {
      log::warn!("innings for {:?} has no overs; aggregates will be empty", raw.team);
      Vec::new()
    }
  };
  Innings {
    team: raw.team.clone(),
    overs,
  }
}

fn normalize_over(raw: &InboundOver) -> Over {
  let deliveries = match &raw.deliveries {
    Some(deliveries) => deliveries.iter().map(normalize_delivery).collect(),
    None => {
      log::warn!("over {} has no deliveries; skipping", raw.over);
      Vec::new()
    }
  };
  Over {
    number: raw.over,
    deliveries,
  }
}

fn normalize_delivery(raw: &InboundDelivery) -> Delivery {
  Delivery {
    batter: raw.batter.clone(),
    non_striker: raw.non_striker.clone(),
    bowler: raw.bowler.clone(),
    runs: RunsBreakdown {
      batter: raw.runs.batter,
      extras: raw.runs.extras,
      total: raw.runs.total,
    },
    extras: ExtrasBreakdown {
      byes: raw.extras.byes,
      leg_byes: raw.extras.legbyes,
      wides: raw.extras.wides,
      no_balls: raw.extras.noballs,
      penalty: raw.extras.penalty,
    },
    wickets: raw
      .wickets
      .iter()
      .map(|w| WicketEvent {
        kind: w.kind.clone(),
        player_out: w.player_out.clone(),
        fielders: w.fielders.iter().map(|f| f.name.clone()).collect(),
      })
      .collect(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parse(json: &str) -> InboundMatch {
    serde_json::from_str(json).unwrap()
  }

  #[test]
  fn minimal_record_normalizes() {
    let raw = parse(
      r#"{
        "info": {"teams": ["A", "B"], "dates": ["2024-02-11"]},
        "innings": [{"team": "A", "overs": []}]
      }"#,
    );
    let record = normalize(&raw).unwrap();
    assert_eq!(record.teams, ["A".to_string(), "B".to_string()]);
    assert_eq!(record.date.unwrap().to_string(), "2024-02-11");
    assert!(record.event.is_empty());
    assert_eq!(record.innings.len(), 1);
  }

  #[test]
  fn missing_info_is_rejected() {
    let raw = parse(r#"{"innings": []}"#);
    let err = normalize(&raw).unwrap_err();
    assert!(err.to_string().contains("info"));
  }

  #[test]
  fn wrong_team_count_is_rejected() {
    let raw = parse(r#"{"info": {"teams": ["A"]}, "innings": []}"#);
    let err = normalize(&raw).unwrap_err();
    assert!(err.to_string().contains("teams"));
  }

  #[test]
  fn invalid_date_is_rejected() {
    let raw = parse(
      r#"{"info": {"teams": ["A", "B"], "dates": ["not-a-date"]}, "innings": []}"#,
    );
    let err = normalize(&raw).unwrap_err();
    assert!(err.to_string().contains("dates"));
  }

  #[test]
  fn absent_dates_are_tolerated() {
    let raw = parse(r#"{"info": {"teams": ["A", "B"]}, "innings": []}"#);
    let record = normalize(&raw).unwrap();
    assert!(record.date.is_none());
  }

  #[test]
  fn event_accepts_string_and_object_forms() {
    let raw = parse(
      r#"{"info": {"teams": ["A", "B"], "event": "Harbour Cup"}, "innings": []}"#,
    );
    assert_eq!(normalize(&raw).unwrap().event, "Harbour Cup");

    let raw = parse(
      r#"{"info": {"teams": ["A", "B"], "event": {"name": "Harbour Cup", "match_number": 3}}, "innings": []}"#,
    );
    assert_eq!(normalize(&raw).unwrap().event, "Harbour Cup");
  }

  #[test]
  fn innings_without_overs_normalizes_to_empty() {
    let raw = parse(
      r#"{"info": {"teams": ["A", "B"]}, "innings": [{"team": "A"}]}"#,
    );
    let record = normalize(&raw).unwrap();
    assert!(record.innings[0].overs.is_empty());
  }

  #[test]
  fn delivery_fields_default_and_fielders_flatten() {
    let raw = parse(
      r#"{
        "info": {"teams": ["A", "B"]},
        "innings": [{"team": "A", "overs": [{"over": 0, "deliveries": [
          {"batter": "x", "bowler": "y",
           "wickets": [{"kind": "caught", "player_out": "x",
                        "fielders": [{"name": "f1"}, {"name": "f2"}]}]}
        ]}]}]
      }"#,
    );
    let record = normalize(&raw).unwrap();
    let delivery = &record.innings[0].overs[0].deliveries[0];
    assert_eq!(delivery.runs.total, 0);
    assert_eq!(delivery.extras.wides, 0);
    assert_eq!(delivery.wickets[0].fielders, vec!["f1", "f2"]);
  }
}
