use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A user-submitted fantasy squad.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamEntry {
    #[serde(rename = "teamName")]
    pub name: String,

    pub players: Vec<String>,

    pub captain: String,

    pub vice_captain: String,
}

impl TeamEntry {
    pub fn new(name: &str, players: &[&str], captain: &str, vice_captain: &str) -> Self {
        TeamEntry {
            name: name.to_string(),
            players: players.iter().map(|p| p.to_string()).collect(),
            captain: captain.to_string(),
            vice_captain: vice_captain.to_string(),
        }
    }

    /// Attach computed points to each player, keeping squad order.
    ///
    /// Players are scored in parallel, so `points_for` must not depend on
    /// the order it is called in.
    pub fn with_points<F>(&self, points_for: F) -> ScoredTeam
    where
        F: Fn(&str) -> f64 + Sync + Send,
    {
        ScoredTeam {
            name: self.name.clone(),
            players: self
                .players
                .par_iter()
                .map(|name| PlayerPoints {
                    name: name.clone(),
                    points: points_for(name.as_str()),
                })
                .collect(),
            captain: self.captain.clone(),
            vice_captain: self.vice_captain.clone(),
        }
    }
}

/// Points earned by one squad member.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerPoints {
    pub name: String,
    pub points: f64,
}

/// A team entry annotated with per-player points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredTeam {
    #[serde(rename = "teamName")]
    pub name: String,

    pub players: Vec<PlayerPoints>,

    pub captain: String,

    pub vice_captain: String,
}

impl ScoredTeam {
    /// Sum of every player's points
    pub fn total_points(&self) -> f64 {
        self.players.iter().map(|p| p.points).sum()
    }

    pub fn points_of(&self, player: &str) -> Option<f64> {
        self.players
            .iter()
            .find(|p| p.name == player)
            .map(|p| p.points)
    }
}
