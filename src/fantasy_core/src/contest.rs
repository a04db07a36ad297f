use rayon::prelude::*;
use std::sync::Arc;

use crate::aggregate::{aggregate, Standings};
use crate::config::ScoringRules;
use crate::delivery::BallEvent;
use crate::error::Result;
use crate::scorer::score_with;
use crate::team::{ScoredTeam, TeamEntry};

/// One match's deliveries and the rules used to score them.
#[derive(Clone, Debug)]
pub struct Contest {
    /// Deliveries in match order, shared read-only between scoring threads
    events: Arc<[BallEvent]>,

    rules: ScoringRules,
}

impl Contest {
    /// Rules are validated here, so every contest scores with finite values.
    pub fn new(events: Vec<BallEvent>, rules: ScoringRules) -> Result<Self> {
        rules.validate()?;
        Ok(Contest {
            events: events.into(),
            rules,
        })
    }

    pub fn events(&self) -> &[BallEvent] {
        &self.events
    }

    pub fn rules(&self) -> &ScoringRules {
        &self.rules
    }

    /// Score one player in the context of their team's captaincy.
    pub fn score_player(&self, player: &str, captain: &str, vice_captain: &str) -> f64 {
        score_with(&self.rules, &self.events, player, captain, vice_captain)
    }

    /// Score every player of one team entry, players in parallel.
    pub fn score_team(&self, entry: &TeamEntry) -> ScoredTeam {
        let scored = entry.with_points(|player| {
            let points = self.score_player(player, &entry.captain, &entry.vice_captain);
            log::trace!("{} scored {} for {}", player, points, entry.name);
            points
        });
        log::debug!("Team {} totals {}", scored.name, scored.total_points());
        scored
    }

    /// Score every team entry.
    ///
    /// Teams, and the players inside each team, are scored in parallel; the
    /// output keeps the input order.
    pub fn process_result(&self, entries: &[TeamEntry]) -> Vec<ScoredTeam> {
        entries.par_iter().map(|entry| self.score_team(entry)).collect()
    }

    /// Score every team entry and pick the winners.
    pub fn team_result(&self, entries: &[TeamEntry]) -> Result<Standings> {
        aggregate(self.process_result(entries))
    }

    /// Create a copy scored under different rules
    pub fn with_rules(&self, rules: ScoringRules) -> Result<Self> {
        rules.validate()?;
        Ok(Contest {
            events: Arc::clone(&self.events),
            rules,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MilestoneMode;
    use crate::delivery::{DismissalKind, FielderValue};
    use crate::error::FantasyError;

    fn make_squad(prefix: &str) -> Vec<String> {
        (0..11).map(|i| format!("{}{}", prefix, i)).collect()
    }

    fn make_entry(name: &str, players: &[String], captain: usize, vice: usize) -> TeamEntry {
        TeamEntry {
            name: name.to_string(),
            players: players.to_vec(),
            captain: players[captain].clone(),
            vice_captain: players[vice].clone(),
        }
    }

    fn make_contest() -> Contest {
        let events = vec![
            BallEvent::new("P0", "Q0", 6, 0),
            BallEvent::new("P1", "Q0", 4, 0),
            BallEvent::new("P1", "Q1", 1, 1),
            BallEvent::new("P0", "Q1", 0, 1)
                .with_wicket(DismissalKind::Caught, "P0")
                .with_fielder(FielderValue::Name("Q2".to_string())),
        ];
        Contest::new(events, ScoringRules::default()).unwrap()
    }

    #[test]
    fn test_score_team() {
        let contest = make_contest();
        let entry = make_entry("Home", &make_squad("P"), 0, 1);
        let scored = contest.score_team(&entry);

        assert_eq!(scored.players.len(), 11);
        // P0: (8 - 2) * 2, P1: (5 + 1) * 1.5
        assert_eq!(scored.points_of("P0"), Some(12.0));
        assert_eq!(scored.points_of("P1"), Some(9.0));
        assert_eq!(scored.points_of("P5"), Some(0.0));
        assert_eq!(scored.total_points(), 21.0);
    }

    #[test]
    fn test_process_result_keeps_order() {
        let contest = make_contest();
        let entries = vec![
            make_entry("Home", &make_squad("P"), 0, 1),
            make_entry("Away", &make_squad("Q"), 2, 1),
            make_entry("Mixed", &make_squad("R"), 0, 1),
        ];
        let scored = contest.process_result(&entries);

        let names: Vec<&str> = scored.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Home", "Away", "Mixed"]);
    }

    #[test]
    fn test_team_result() {
        let contest = make_contest();
        let entries = vec![
            make_entry("Home", &make_squad("P"), 0, 1),
            make_entry("Away", &make_squad("Q"), 2, 1),
        ];
        let standings = contest.team_result(&entries).unwrap();

        // Q1 takes the wicket as vice-captain, Q2 holds the catch as captain
        assert_eq!(standings.teams[0].total_points, 21.0);
        assert_eq!(standings.teams[1].total_points, 25.0 * 1.5 + 16.0);
        assert!(standings.is_winner("Away"));
        assert!(!standings.is_winner("Home"));
    }

    #[test]
    fn test_empty_events_all_teams_tie() {
        let contest = Contest::new(Vec::new(), ScoringRules::default()).unwrap();
        let entries = vec![
            make_entry("Home", &make_squad("P"), 0, 1),
            make_entry("Away", &make_squad("Q"), 0, 1),
        ];
        let standings = contest.team_result(&entries).unwrap();

        assert_eq!(standings.winning_teams.len(), 2);
        assert!(standings.teams.iter().all(|t| t.total_points == 0.0));
    }

    #[test]
    fn test_no_entries() {
        let contest = make_contest();
        assert!(matches!(contest.team_result(&[]), Err(FantasyError::EmptyTeamSet)));
    }

    #[test]
    fn test_with_rules_shares_events() {
        let contest = make_contest();
        let rules = contest.rules().with_milestone_mode(MilestoneMode::Innings);
        let innings = contest.with_rules(rules).unwrap();
        assert_eq!(innings.events().len(), contest.events().len());
        assert_eq!(innings.rules().milestone_mode, MilestoneMode::Innings);
        assert_eq!(contest.rules().milestone_mode, MilestoneMode::PerDelivery);
    }

    #[test]
    fn test_non_finite_rules_rejected() {
        let rules = ScoringRules {
            wicket: f64::NAN,
            ..ScoringRules::default()
        };
        let events = vec![BallEvent::new("X", "B", 0, 1).with_wicket(DismissalKind::Bowled, "X")];

        assert!(matches!(
            Contest::new(events, rules.clone()),
            Err(FantasyError::InvalidRules(_))
        ));
        assert!(matches!(
            make_contest().with_rules(rules),
            Err(FantasyError::InvalidRules(_))
        ));
    }
}
