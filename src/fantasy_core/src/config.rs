use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::constants::*;
use crate::error::{FantasyError, Result};

/// How run milestone bonuses are evaluated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneMode {
    /// Thresholds are checked against a single delivery's runs.
    #[default]
    PerDelivery,
    /// Thresholds are checked against the batter's running total for the
    /// innings, each bonus paid once when it is crossed.
    Innings,
}

/// Point values used by the scorer.
///
/// Every field defaults to the matching constant, so a partial JSON document
/// only overrides what it names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringRules {
    pub boundary_bonus: f64,
    pub six_bonus: f64,
    /// (threshold, bonus) pairs, all crossed thresholds pay
    pub milestones: Vec<(u32, f64)>,
    pub milestone_mode: MilestoneMode,
    pub duck_penalty: f64,

    pub wicket: f64,
    pub lbw_bowled_bonus: f64,
    pub wicket_haul_bonuses: Vec<f64>,
    pub maiden_bonus: f64,

    pub catch: f64,
    pub catch_haul_bonus: f64,
    pub stumping: f64,
    pub run_out: f64,

    pub captain_multiplier: f64,
    pub vice_captain_multiplier: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            boundary_bonus: BOUNDARY_BONUS,
            six_bonus: SIX_BONUS,
            milestones: MILESTONES.to_vec(),
            milestone_mode: MilestoneMode::PerDelivery,
            duck_penalty: DUCK_PENALTY,
            wicket: WICKET_POINTS,
            lbw_bowled_bonus: LBW_BOWLED_BONUS,
            wicket_haul_bonuses: WICKET_HAUL_BONUSES.to_vec(),
            maiden_bonus: MAIDEN_BONUS,
            catch: CATCH_POINTS,
            catch_haul_bonus: CATCH_HAUL_BONUS,
            stumping: STUMPING_POINTS,
            run_out: RUN_OUT_POINTS,
            captain_multiplier: CAPTAIN_MULTIPLIER,
            vice_captain_multiplier: VICE_CAPTAIN_MULTIPLIER,
        }
    }
}

impl ScoringRules {
    /// Parse and validate rules from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let rules: ScoringRules = serde_json::from_str(json)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Rules with a different milestone mode
    pub fn with_milestone_mode(&self, mode: MilestoneMode) -> Self {
        ScoringRules {
            milestone_mode: mode,
            ..self.clone()
        }
    }

    /// Reject values that would make totals meaningless.
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("boundary_bonus", self.boundary_bonus),
            ("six_bonus", self.six_bonus),
            ("duck_penalty", self.duck_penalty),
            ("wicket", self.wicket),
            ("lbw_bowled_bonus", self.lbw_bowled_bonus),
            ("maiden_bonus", self.maiden_bonus),
            ("catch", self.catch),
            ("catch_haul_bonus", self.catch_haul_bonus),
            ("stumping", self.stumping),
            ("run_out", self.run_out),
        ];
        for (name, value) in values {
            if !value.is_finite() {
                return Err(FantasyError::InvalidRules(format!("{} is not finite", name)));
            }
        }

        if self.milestones.iter().any(|(_, bonus)| !bonus.is_finite())
            || self.wicket_haul_bonuses.iter().any(|b| !b.is_finite())
        {
            return Err(FantasyError::InvalidRules("bonus is not finite".to_string()));
        }

        for (name, value) in [
            ("captain_multiplier", self.captain_multiplier),
            ("vice_captain_multiplier", self.vice_captain_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FantasyError::InvalidRules(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
