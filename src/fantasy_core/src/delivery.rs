use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{FantasyError, Result};

/// How a wicket fell.
///
/// Parsing is case-sensitive: only the exact spellings used by the scoring
/// rules map onto a named variant, anything else is kept as `Other`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum DismissalKind {
    #[default]
    None,
    Bowled,
    Lbw,
    Caught,
    Stumped,
    RunOut,
    Other(String),
}

impl DismissalKind {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | "NA" => DismissalKind::None,
            "Bowled" => DismissalKind::Bowled,
            "LBW" => DismissalKind::Lbw,
            "caught" => DismissalKind::Caught,
            "stumped" => DismissalKind::Stumped,
            "run out" => DismissalKind::RunOut,
            other => DismissalKind::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            DismissalKind::None => "NA",
            DismissalKind::Bowled => "Bowled",
            DismissalKind::Lbw => "LBW",
            DismissalKind::Caught => "caught",
            DismissalKind::Stumped => "stumped",
            DismissalKind::RunOut => "run out",
            DismissalKind::Other(raw) => raw,
        }
    }

    /// LBW or Bowled, the two kinds credited wholly to the bowler
    pub fn is_bowler_dismissal(&self) -> bool {
        matches!(self, DismissalKind::Lbw | DismissalKind::Bowled)
    }
}

impl From<Option<String>> for DismissalKind {
    fn from(raw: Option<String>) -> Self {
        raw.as_deref().map_or(DismissalKind::None, DismissalKind::parse)
    }
}

impl From<DismissalKind> for Option<String> {
    fn from(kind: DismissalKind) -> Self {
        match kind {
            DismissalKind::None => None,
            other => Some(other.as_str().to_string()),
        }
    }
}

impl fmt::Display for DismissalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw value of the feed's `fielders_involved` column.
///
/// The feed stores a single value, usually a name and occasionally a number,
/// and the scoring rules compare it as a scalar. Whole-number floats such as
/// `3.0` decode as `Count(3)`; other fractional numbers are rejected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FielderValue {
    Count(i64),
    Name(String),
}

impl<'de> Deserialize<'de> for FielderValue {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Int(i64),
            Float(f64),
            Name(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Int(n) => Ok(FielderValue::Count(n)),
            Raw::Float(x) if x.fract() == 0.0 && x.abs() <= i64::MAX as f64 => {
                Ok(FielderValue::Count(x as i64))
            }
            Raw::Float(x) => Err(serde::de::Error::custom(format!(
                "fielders_involved {} is not a name or a whole number",
                x
            ))),
            Raw::Name(name) => Ok(FielderValue::Name(name)),
        }
    }
}

impl FielderValue {
    pub fn is_player(&self, player: &str) -> bool {
        matches!(self, FielderValue::Name(name) if name == player)
    }

    pub fn is_count(&self, count: i64) -> bool {
        matches!(self, FielderValue::Count(n) if *n == count)
    }
}

/// One recorded delivery.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BallEvent {
    pub batter: String,
    pub bowler: String,

    #[serde(default)]
    pub fielders_involved: Option<FielderValue>,

    #[serde(default)]
    pub kind: DismissalKind,

    #[serde(rename = "isWicketDelivery", deserialize_with = "flag_from_bool_or_int")]
    pub is_wicket_delivery: bool,

    /// Runs off the bat
    #[serde(rename = "batsman_run")]
    pub batter_runs: u32,

    #[serde(rename = "extras_run")]
    pub extras_runs: u32,

    /// Runs conceded on the delivery, bat plus extras
    #[serde(rename = "total_run")]
    pub total_runs: u32,

    /// Name of the dismissed batter, if any
    #[serde(default)]
    pub player_out: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub innings: Option<u32>,

    #[serde(default, rename = "overs", skip_serializing_if = "Option::is_none")]
    pub over: Option<u32>,

    #[serde(default, rename = "ballnumber", skip_serializing_if = "Option::is_none")]
    pub ball: Option<u32>,
}

impl BallEvent {
    /// Create a non-wicket delivery. Total runs is the sum of bat and extras,
    /// capped at `u32::MAX`.
    pub fn new(batter: &str, bowler: &str, batter_runs: u32, extras_runs: u32) -> Self {
        BallEvent {
            batter: batter.to_string(),
            bowler: bowler.to_string(),
            fielders_involved: None,
            kind: DismissalKind::None,
            is_wicket_delivery: false,
            batter_runs,
            extras_runs,
            total_runs: batter_runs.saturating_add(extras_runs),
            player_out: None,
            innings: None,
            over: None,
            ball: None,
        }
    }

    /// Mark the delivery as a wicket of the given kind.
    pub fn with_wicket(mut self, kind: DismissalKind, player_out: &str) -> Self {
        self.is_wicket_delivery = true;
        self.kind = kind;
        self.player_out = Some(player_out.to_string());
        self
    }

    /// Set the dismissal kind without flagging a wicket.
    pub fn with_kind(mut self, kind: DismissalKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_fielder(mut self, fielder: FielderValue) -> Self {
        self.fielders_involved = Some(fielder);
        self
    }

    pub fn in_innings(mut self, innings: u32) -> Self {
        self.innings = Some(innings);
        self
    }

    pub fn fielder_is(&self, player: &str) -> bool {
        self.fielders_involved
            .as_ref()
            .is_some_and(|f| f.is_player(player))
    }

    pub fn fielder_count_is(&self, count: i64) -> bool {
        self.fielders_involved
            .as_ref()
            .is_some_and(|f| f.is_count(count))
    }

    fn check(&self) -> std::result::Result<(), String> {
        if self.batter.trim().is_empty() {
            return Err("batter is empty".to_string());
        }
        if self.bowler.trim().is_empty() {
            return Err("bowler is empty".to_string());
        }
        Ok(())
    }
}

fn flag_from_bool_or_int<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Int(i64),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Int(n) => n != 0,
    })
}

/// Decode a match feed (a JSON array of deliveries).
///
/// The whole feed is validated up front; the first malformed delivery is
/// reported with its index and nothing is returned.
pub fn load_events_from_str(json: &str) -> Result<Vec<BallEvent>> {
    let raw: Vec<serde_json::Value> = serde_json::from_str(json)?;
    let mut events = Vec::with_capacity(raw.len());

    for (index, value) in raw.into_iter().enumerate() {
        let event: BallEvent = serde_json::from_value(value).map_err(|e| {
            FantasyError::MalformedEvent {
                index,
                reason: e.to_string(),
            }
        })?;
        event
            .check()
            .map_err(|reason| FantasyError::MalformedEvent { index, reason })?;
        events.push(event);
    }

    log::debug!("Loaded {} deliveries", events.len());
    Ok(events)
}

/// Read and decode a match feed from a JSON file.
pub fn load_events_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<BallEvent>> {
    let contents = fs::read_to_string(path)?;
    load_events_from_str(&contents)
}
