use serde::{Deserialize, Serialize};

use crate::error::{FantasyError, Result};
use crate::team::ScoredTeam;

/// A scored team with its total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    #[serde(flatten)]
    pub team: ScoredTeam,

    pub total_points: f64,
}

/// Every team's total, plus the teams tied on the highest total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standings {
    pub teams: Vec<TeamStanding>,
    pub winning_teams: Vec<TeamStanding>,
}

impl Standings {
    /// The winning total
    pub fn max_total(&self) -> f64 {
        self.winning_teams
            .first()
            .map(|t| t.total_points)
            .unwrap_or(f64::NEG_INFINITY)
    }

    pub fn is_winner(&self, team_name: &str) -> bool {
        self.winning_teams.iter().any(|t| t.team.name == team_name)
    }
}

/// Total each team and pick the winners.
///
/// Winners are every team whose total equals the maximum exactly, in input
/// order. An empty input has no maximum and is an error, as is any total
/// that is NaN or infinite.
pub fn aggregate(teams: Vec<ScoredTeam>) -> Result<Standings> {
    if teams.is_empty() {
        log::warn!("No teams to aggregate");
        return Err(FantasyError::EmptyTeamSet);
    }

    let teams: Vec<TeamStanding> = teams
        .into_iter()
        .map(|team| {
            let total_points = team.total_points();
            if !total_points.is_finite() {
                log::warn!("Team {} has a non-finite total {}", team.name, total_points);
                return Err(FantasyError::NonFiniteTotal {
                    team: team.name,
                    total: total_points,
                });
            }
            Ok(TeamStanding { team, total_points })
        })
        .collect::<Result<_>>()?;

    let max_total = teams
        .iter()
        .map(|t| t.total_points)
        .fold(f64::NEG_INFINITY, f64::max);

    let winning_teams: Vec<TeamStanding> = teams
        .iter()
        .filter(|t| t.total_points == max_total)
        .cloned()
        .collect();

    log::debug!(
        "Aggregated {} teams, {} tied on {}",
        teams.len(),
        winning_teams.len(),
        max_total
    );

    Ok(Standings {
        teams,
        winning_teams,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::PlayerPoints;
    use proptest::prelude::*;

    fn make_team(name: &str, points: &[f64]) -> ScoredTeam {
        ScoredTeam {
            name: name.to_string(),
            players: points
                .iter()
                .enumerate()
                .map(|(i, &p)| PlayerPoints {
                    name: format!("{}-{}", name, i),
                    points: p,
                })
                .collect(),
            captain: format!("{}-0", name),
            vice_captain: format!("{}-1", name),
        }
    }

    #[test]
    fn test_tied_winners() {
        let teams = vec![
            make_team("A", &[100.0, 20.0]),
            make_team("B", &[60.0, 60.0]),
            make_team("C", &[50.0, 50.0]),
        ];
        let standings = aggregate(teams).unwrap();

        assert_eq!(standings.teams.len(), 3);
        assert_eq!(standings.winning_teams.len(), 2);
        assert!(standings.is_winner("A"));
        assert!(standings.is_winner("B"));
        assert!(!standings.is_winner("C"));
        assert_eq!(standings.max_total(), 120.0);
        assert_eq!(standings.teams[2].total_points, 100.0);
    }

    #[test]
    fn test_fractional_totals() {
        let teams = vec![make_team("A", &[1.5, 0.5]), make_team("B", &[2.5])];
        let standings = aggregate(teams).unwrap();
        assert_eq!(standings.winning_teams.len(), 1);
        assert!(standings.is_winner("B"));
    }

    #[test]
    fn test_all_zero_all_win() {
        let teams = vec![make_team("A", &[0.0; 11]), make_team("B", &[0.0; 11])];
        let standings = aggregate(teams).unwrap();
        assert_eq!(standings.winning_teams.len(), 2);
        assert_eq!(standings.max_total(), 0.0);
    }

    #[test]
    fn test_negative_totals() {
        let teams = vec![make_team("A", &[-4.0]), make_team("B", &[-2.0])];
        let standings = aggregate(teams).unwrap();
        assert!(standings.is_winner("B"));
        assert_eq!(standings.max_total(), -2.0);
    }

    #[test]
    fn test_empty_is_error() {
        assert!(matches!(aggregate(Vec::new()), Err(FantasyError::EmptyTeamSet)));
    }

    #[test]
    fn test_non_finite_total_is_error() {
        let teams = vec![make_team("A", &[10.0]), make_team("B", &[f64::NAN, 5.0])];
        match aggregate(teams) {
            Err(FantasyError::NonFiniteTotal { team, total }) => {
                assert_eq!(team, "B");
                assert!(total.is_nan());
            }
            other => panic!("expected non-finite total, got {:?}", other),
        }

        let teams = vec![make_team("A", &[f64::INFINITY])];
        assert!(matches!(
            aggregate(teams),
            Err(FantasyError::NonFiniteTotal { .. })
        ));
    }

    #[test]
    fn test_json_shape() {
        let standings = aggregate(vec![make_team("A", &[3.0])]).unwrap();
        let json = serde_json::to_value(&standings).unwrap();
        assert_eq!(json["teams"][0]["teamName"], "A");
        assert_eq!(json["teams"][0]["total_points"], 3.0);
        assert_eq!(json["winningTeams"][0]["viceCaptain"], "A-1");
    }

    proptest! {
        #[test]
        fn prop_winners_hold_the_max(
            totals in proptest::collection::vec(
                proptest::collection::vec((-20i32..60).prop_map(|p| f64::from(p) / 2.0), 11),
                1..12,
            )
        ) {
            let teams: Vec<ScoredTeam> = totals
                .iter()
                .enumerate()
                .map(|(i, pts)| make_team(&format!("T{}", i), pts))
                .collect();
            let standings = aggregate(teams).unwrap();

            prop_assert!(!standings.winning_teams.is_empty());
            let max = standings.max_total();
            for winner in &standings.winning_teams {
                prop_assert_eq!(winner.total_points, max);
            }
            for team in &standings.teams {
                prop_assert!(team.total_points <= max);
                if team.total_points == max {
                    prop_assert!(standings.is_winner(&team.team.name));
                }
            }
        }
    }
}
