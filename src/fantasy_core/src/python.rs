//! Python bindings. Records cross the boundary as JSON strings.

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::config::ScoringRules;
use crate::constants::{CAPTAIN_MULTIPLIER, SQUAD_SIZE, VICE_CAPTAIN_MULTIPLIER};
use crate::contest::Contest;
use crate::delivery::load_events_from_str;
use crate::error::FantasyError;
use crate::player::PlayerCatalog;
use crate::roster::RosterRules;
use crate::team::TeamEntry;

impl From<FantasyError> for PyErr {
    fn from(err: FantasyError) -> PyErr {
        match err {
            FantasyError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

fn parse_rules(rules_json: Option<&str>) -> Result<ScoringRules, FantasyError> {
    match rules_json {
        Some(json) => ScoringRules::from_json_str(json),
        None => Ok(ScoringRules::default()),
    }
}

/// Score one player over a match feed.
#[pyfunction]
#[pyo3(signature = (events_json, player, captain, vice_captain, rules_json = None))]
fn score_player(
    events_json: &str,
    player: &str,
    captain: &str,
    vice_captain: &str,
    rules_json: Option<&str>,
) -> PyResult<f64> {
    let contest = Contest::new(load_events_from_str(events_json)?, parse_rules(rules_json)?)?;
    Ok(contest.score_player(player, captain, vice_captain))
}

/// Check a team entry against the default squad rules.
#[pyfunction]
fn validate_team(team_json: &str, catalog_json: &str) -> PyResult<()> {
    let team: TeamEntry = serde_json::from_str(team_json).map_err(FantasyError::from)?;
    let catalog = PlayerCatalog::from_json_str(catalog_json)?;
    RosterRules::default()
        .validate(&team, &catalog)
        .map_err(FantasyError::from)?;
    Ok(())
}

/// Score every team and return the standings as JSON.
#[pyfunction]
#[pyo3(signature = (events_json, teams_json, rules_json = None))]
fn team_result(events_json: &str, teams_json: &str, rules_json: Option<&str>) -> PyResult<String> {
    let contest = Contest::new(load_events_from_str(events_json)?, parse_rules(rules_json)?)?;
    let entries: Vec<TeamEntry> = serde_json::from_str(teams_json).map_err(FantasyError::from)?;
    let standings = contest.team_result(&entries)?;
    Ok(serde_json::to_string(&standings).map_err(FantasyError::from)?)
}

#[pymodule]
fn fantasy_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(score_player, m)?)?;
    m.add_function(wrap_pyfunction!(validate_team, m)?)?;
    m.add_function(wrap_pyfunction!(team_result, m)?)?;

    m.add("SQUAD_SIZE", SQUAD_SIZE)?;
    m.add("CAPTAIN_MULTIPLIER", CAPTAIN_MULTIPLIER)?;
    m.add("VICE_CAPTAIN_MULTIPLIER", VICE_CAPTAIN_MULTIPLIER)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED: &str = r#"[
        {"batter": "A", "bowler": "B", "batsman_run": 6, "extras_run": 0, "total_run": 6,
         "isWicketDelivery": 0},
        {"batter": "X", "bowler": "B", "batsman_run": 0, "extras_run": 1, "total_run": 1,
         "isWicketDelivery": 1, "player_out": "X", "kind": "Bowled"}
    ]"#;

    #[test]
    fn test_score_player_binding() {
        assert_eq!(score_player(FEED, "A", "C", "V", None).unwrap(), 8.0);
        assert_eq!(score_player(FEED, "B", "B", "V", None).unwrap(), 114.0);
        assert_eq!(
            score_player(FEED, "A", "C", "V", Some(r#"{"six_bonus": 4}"#)).unwrap(),
            10.0
        );
    }

    #[test]
    fn test_team_result_binding() {
        let teams = r#"[
            {"teamName": "One", "players": ["A", "B"], "captain": "A", "viceCaptain": "B"},
            {"teamName": "Two", "players": ["A", "X"], "captain": "X", "viceCaptain": "A"}
        ]"#;
        let json = team_result(FEED, teams, None).unwrap();
        let standings: serde_json::Value = serde_json::from_str(&json).unwrap();

        // One: 8 * 2 + 57 * 1.5, Two: -2 * 2 + 8 * 1.5
        assert_eq!(standings["teams"][0]["total_points"], 101.5);
        assert_eq!(standings["teams"][1]["total_points"], 8.0);
        assert_eq!(standings["winningTeams"][0]["teamName"], "One");
    }

    #[test]
    fn test_bindings_report_bad_input() {
        assert!(score_player("[{}]", "A", "C", "V", None).is_err());
        assert!(score_player(FEED, "A", "C", "V", Some(r#"{"captain_multiplier": -1}"#)).is_err());
        assert!(team_result(FEED, "[]", None).is_err());
        assert!(validate_team(r#"{"teamName": "T"}"#, "[]").is_err());
    }
}
