/// Players in a fantasy squad
pub const SQUAD_SIZE: usize = 11;

/// Minimum and maximum number of players of any single role in a squad
pub const MIN_PER_ROLE: usize = 1;
pub const MAX_PER_ROLE: usize = 8;

/// Bonus for a four off the bat
pub const BOUNDARY_BONUS: f64 = 1.0;

/// Bonus for a six off the bat
pub const SIX_BONUS: f64 = 2.0;

/// Run milestones and their (stacking) bonuses
pub const MILESTONES: [(u32, f64); 3] = [(30, 4.0), (50, 8.0), (100, 16.0)];

/// Penalty for a dot ball faced
pub const DUCK_PENALTY: f64 = -2.0;

/// Points for a wicket-taking delivery
pub const WICKET_POINTS: f64 = 25.0;

/// Bonus for a dismissal kind of LBW or Bowled
pub const LBW_BOWLED_BONUS: f64 = 8.0;

/// Extra bonuses stacked on a bowled/LBW wicket that was not a run out
pub const WICKET_HAUL_BONUSES: [f64; 3] = [8.0, 8.0, 8.0];

/// Bonus for a delivery with no runs and no extras
pub const MAIDEN_BONUS: f64 = 12.0;

/// Fielding points
pub const CATCH_POINTS: f64 = 8.0;
pub const CATCH_HAUL_BONUS: f64 = 4.0;
pub const STUMPING_POINTS: f64 = 12.0;
pub const RUN_OUT_POINTS: f64 = 6.0;

/// Literal compared against the fielders-involved value for the catch bonus
pub const CATCH_HAUL_COUNT: i64 = 3;

/// Dismissed-player literal that excludes a wicket from the haul bonuses
pub const RUN_OUT_MARKER: &str = "Run Out";

/// Captaincy multipliers
pub const CAPTAIN_MULTIPLIER: f64 = 2.0;
pub const VICE_CAPTAIN_MULTIPLIER: f64 = 1.5;

/// Sum of the wicket haul bonuses
pub fn wicket_haul_total() -> f64 {
    WICKET_HAUL_BONUSES.iter().sum()
}
