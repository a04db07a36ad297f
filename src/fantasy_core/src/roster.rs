//! Team-creation rules.
//!
//! These run once when a squad is submitted. Scoring assumes they passed and
//! never re-checks them.

use std::collections::{BTreeMap, HashSet};

use crate::constants::{MAX_PER_ROLE, MIN_PER_ROLE, SQUAD_SIZE};
use crate::error::RosterError;
use crate::player::{PlayerCatalog, Role};
use crate::team::TeamEntry;

/// Inclusive bounds on how many players of one role a squad may hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoleBounds {
    pub min: usize,
    pub max: usize,
}

impl RoleBounds {
    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }
}

/// Declarative squad rules.
#[derive(Clone, Debug, PartialEq)]
pub struct RosterRules {
    pub squad_size: usize,
    pub role_bounds: BTreeMap<Role, RoleBounds>,
}

impl Default for RosterRules {
    fn default() -> Self {
        let bounds = RoleBounds {
            min: MIN_PER_ROLE,
            max: MAX_PER_ROLE,
        };
        RosterRules {
            squad_size: SQUAD_SIZE,
            role_bounds: Role::ALL.iter().map(|&role| (role, bounds)).collect(),
        }
    }
}

impl RosterRules {
    /// Check a squad against the rules, returning the first violation.
    pub fn validate(&self, team: &TeamEntry, catalog: &PlayerCatalog) -> Result<(), RosterError> {
        let result = self.check(team, catalog);
        if let Err(err) = &result {
            log::warn!("Rejected team {:?}: {}", team.name, err);
        }
        result
    }

    fn check(&self, team: &TeamEntry, catalog: &PlayerCatalog) -> Result<(), RosterError> {
        for (field, value) in [
            ("Team name", &team.name),
            ("Captain name", &team.captain),
            ("Vice-captain name", &team.vice_captain),
        ] {
            if value.trim().is_empty() {
                return Err(RosterError::MissingField(field));
            }
        }

        if team.players.len() != self.squad_size {
            return Err(RosterError::WrongSquadSize {
                expected: self.squad_size,
                found: team.players.len(),
            });
        }

        let mut counts: BTreeMap<Role, usize> = BTreeMap::new();
        for player in &team.players {
            let role = catalog
                .role_of(player)
                .ok_or_else(|| RosterError::UnknownPlayer(player.clone()))?;
            *counts.entry(role).or_insert(0) += 1;
        }

        for (&role, bounds) in &self.role_bounds {
            let count = counts.get(&role).copied().unwrap_or(0);
            if !bounds.contains(count) {
                return Err(RosterError::RoleCount {
                    role,
                    count,
                    min: bounds.min,
                    max: bounds.max,
                });
            }
        }

        let mut seen = HashSet::new();
        for player in &team.players {
            if !seen.insert(player.as_str()) {
                return Err(RosterError::DuplicatePlayer(player.clone()));
            }
        }

        if !seen.contains(team.captain.as_str()) {
            return Err(RosterError::CaptainNotInSquad);
        }
        if !seen.contains(team.vice_captain.as_str()) {
            return Err(RosterError::ViceCaptainNotInSquad);
        }
        if team.captain == team.vice_captain {
            return Err(RosterError::SameCaptainAndVice);
        }

        Ok(())
    }
}
