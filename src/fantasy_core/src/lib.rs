//! Fantasy Core - fantasy cricket scoring library.
//!
//! Turns a ball-by-ball match feed into fantasy points per player, totals
//! them per fantasy team and picks the winning team(s). Python bindings are
//! available behind the `python` feature.

pub mod aggregate;
pub mod config;
pub mod constants;
pub mod contest;
pub mod delivery;
pub mod error;
pub mod player;
pub mod roster;
pub mod scorer;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use aggregate::{aggregate, Standings, TeamStanding};
pub use config::{MilestoneMode, ScoringRules};
pub use contest::Contest;
pub use delivery::{
    load_events_from_file, load_events_from_str, BallEvent, DismissalKind, FielderValue,
};
pub use error::{FantasyError, Result, RosterError};
pub use player::{PlayerCatalog, PlayerReference, Role};
pub use roster::{RoleBounds, RosterRules};
pub use scorer::{score, score_breakdown, score_with, PointsBreakdown};
pub use team::{PlayerPoints, ScoredTeam, TeamEntry};
