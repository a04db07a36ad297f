use thiserror::Error;

use crate::player::Role;

/// Errors surfaced by loading, configuration and aggregation.
#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("Cannot pick winners from an empty set of teams")]
    EmptyTeamSet,

    #[error("Team {team} has a non-finite total {total}")]
    NonFiniteTotal { team: String, total: f64 },

    #[error("Malformed ball event at index {index}: {reason}")]
    MalformedEvent { index: usize, reason: String },

    #[error("Invalid player catalog: {0}")]
    InvalidCatalog(String),

    #[error("Invalid scoring rules: {0}")]
    InvalidRules(String),

    #[error("Invalid team entry: {0}")]
    Roster(#[from] RosterError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reasons a team entry is rejected at creation time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("A team must have exactly {expected} players, got {found}")]
    WrongSquadSize { expected: usize, found: usize },

    #[error("Player {0} not found")]
    UnknownPlayer(String),

    #[error("Invalid player roles or counts: {count} {role} (allowed {min}..={max})")]
    RoleCount {
        role: Role,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("Player {0} selected more than once")]
    DuplicatePlayer(String),

    #[error("Captain must be one of the selected players")]
    CaptainNotInSquad,

    #[error("Vice-captain must be one of the selected players")]
    ViceCaptainNotInSquad,

    #[error("Captain and vice-captain cannot be the same player")]
    SameCaptainAndVice,
}

impl FantasyError {
    /// Whether the caller can fix the input and retry.
    pub fn is_input_error(&self) -> bool {
        match self {
            FantasyError::MalformedEvent { .. } => true,
            FantasyError::InvalidCatalog(_) => true,
            FantasyError::InvalidRules(_) => true,
            FantasyError::Roster(_) => true,
            FantasyError::Json(_) => true,
            FantasyError::EmptyTeamSet => false,
            FantasyError::NonFiniteTotal { .. } => false,
            FantasyError::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, FantasyError>;
