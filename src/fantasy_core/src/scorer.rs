use std::collections::HashMap;

use crate::config::{MilestoneMode, ScoringRules};
use crate::constants::{CATCH_HAUL_COUNT, RUN_OUT_MARKER};
use crate::delivery::{BallEvent, DismissalKind};

/// A player's points split by discipline, before and after captaincy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointsBreakdown {
    pub batting: f64,
    pub bowling: f64,
    pub fielding: f64,
    pub multiplier: f64,
}

impl PointsBreakdown {
    /// Points before the captaincy multiplier
    pub fn raw(&self) -> f64 {
        self.batting + self.bowling + self.fielding
    }

    pub fn points(&self) -> f64 {
        self.raw() * self.multiplier
    }
}

/// Score a player over a match with the default rules.
///
/// # Arguments
/// * `events` - Every delivery of the match, in order
/// * `player` - Player to score
/// * `captain` - Captain of the player's fantasy team
/// * `vice_captain` - Vice-captain of the player's fantasy team
///
/// # Returns
/// Fantasy points, 0.0 for a player who appears in no delivery
pub fn score(events: &[BallEvent], player: &str, captain: &str, vice_captain: &str) -> f64 {
    score_with(&ScoringRules::default(), events, player, captain, vice_captain)
}

/// Score a player over a match with explicit rules.
pub fn score_with(
    rules: &ScoringRules,
    events: &[BallEvent],
    player: &str,
    captain: &str,
    vice_captain: &str,
) -> f64 {
    score_breakdown(rules, events, player, captain, vice_captain).points()
}

/// Score a player, keeping the batting/bowling/fielding components apart.
pub fn score_breakdown(
    rules: &ScoringRules,
    events: &[BallEvent],
    player: &str,
    captain: &str,
    vice_captain: &str,
) -> PointsBreakdown {
    let mut breakdown = PointsBreakdown {
        multiplier: captaincy_multiplier(rules, player, captain, vice_captain),
        ..PointsBreakdown::default()
    };

    // Runs so far per innings, only used in innings milestone mode
    let mut innings_runs: HashMap<Option<u32>, u32> = HashMap::new();

    for event in events {
        if event.batter == player {
            let milestone_runs = match rules.milestone_mode {
                MilestoneMode::PerDelivery => (0, event.batter_runs),
                MilestoneMode::Innings => {
                    let total = innings_runs.entry(event.innings).or_insert(0);
                    let before = *total;
                    *total = total.saturating_add(event.batter_runs);
                    (before, *total)
                }
            };
            breakdown.batting += batting_points(rules, event, milestone_runs);
        }

        if event.bowler == player {
            breakdown.bowling += bowling_points(rules, event);
        }

        if event.fielder_is(player) {
            breakdown.fielding += fielding_points(rules, event);
        }
    }

    breakdown
}

/// Multiplier for the player's captaincy role. Captain wins if both match.
pub fn captaincy_multiplier(
    rules: &ScoringRules,
    player: &str,
    captain: &str,
    vice_captain: &str,
) -> f64 {
    if player == captain {
        rules.captain_multiplier
    } else if player == vice_captain {
        rules.vice_captain_multiplier
    } else {
        1.0
    }
}

/// Batting points for one delivery.
///
/// `milestone_runs` is the (before, after) run count that milestones are
/// judged on. A threshold pays when `before < threshold <= after`.
fn batting_points(rules: &ScoringRules, event: &BallEvent, milestone_runs: (u32, u32)) -> f64 {
    let runs = event.batter_runs;
    let mut points = f64::from(runs);

    match runs {
        4 => points += rules.boundary_bonus,
        6 => points += rules.six_bonus,
        _ => {}
    }

    let (before, after) = milestone_runs;
    for &(threshold, bonus) in &rules.milestones {
        if before < threshold && after >= threshold {
            points += bonus;
        }
    }

    if runs == 0 {
        points += rules.duck_penalty;
    }

    points
}

/// Bowling points for one delivery.
fn bowling_points(rules: &ScoringRules, event: &BallEvent) -> f64 {
    let mut points = 0.0;

    if event.is_wicket_delivery {
        points += rules.wicket;
    }

    // Paid on kind alone, the wicket flag is not consulted
    if event.kind.is_bowler_dismissal() {
        points += rules.lbw_bowled_bonus;
    }

    if event.is_wicket_delivery && event.player_out.as_deref() != Some(RUN_OUT_MARKER) {
        for &bonus in &rules.wicket_haul_bonuses {
            if event.kind.is_bowler_dismissal() {
                points += bonus;
            }
        }
    }

    if event.extras_runs == 0 && event.total_runs == 0 {
        points += rules.maiden_bonus;
    }

    points
}

/// Fielding points for one delivery the player is named on.
fn fielding_points(rules: &ScoringRules, event: &BallEvent) -> f64 {
    match event.kind {
        DismissalKind::Caught => {
            let mut points = rules.catch;
            // Compares the same scalar that matched the player's name, so this
            // only pays for a numeric fielder value.
            if event.fielder_count_is(CATCH_HAUL_COUNT) {
                points += rules.catch_haul_bonus;
            }
            points
        }
        DismissalKind::Stumped => rules.stumping,
        DismissalKind::RunOut => rules.run_out,
        _ => 0.0,
    }
}
