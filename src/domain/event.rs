use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::state::SportEventStatus;

/// Raised when a wire or database value does not name a known enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "Invalid value '{}' for {}. Accepted values: [{}]",
    .value,
    .kind,
    .accepted.join(", ")
)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
    pub accepted: &'static [&'static str],
}

/// Sport discipline of an event. Only ever used as a filter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum SportType {
    Football,
    Hockey,
    Basketball,
    Baseball,
    Tennis,
    Mma,
}

impl SportType {
    pub const ALL: [SportType; 6] = [
        SportType::Football,
        SportType::Hockey,
        SportType::Basketball,
        SportType::Baseball,
        SportType::Tennis,
        SportType::Mma,
    ];

    const NAMES: &'static [&'static str] = &[
        "FOOTBALL",
        "HOCKEY",
        "BASKETBALL",
        "BASEBALL",
        "TENNIS",
        "MMA",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportType::Football => "FOOTBALL",
            SportType::Hockey => "HOCKEY",
            SportType::Basketball => "BASKETBALL",
            SportType::Baseball => "BASEBALL",
            SportType::Tennis => "TENNIS",
            SportType::Mma => "MMA",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SportType {
    type Err = ParseEnumError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        SportType::ALL
            .into_iter()
            .find(|t| t.as_str() == upper)
            .ok_or_else(|| ParseEnumError {
                kind: "SportType",
                value: s.to_string(),
                accepted: SportType::NAMES,
            })
    }
}

impl TryFrom<String> for SportType {
    type Error = ParseEnumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// A stored sport event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SportEvent {
    pub id: i64,
    pub name: String,
    pub sport_type: SportType,
    pub status: SportEventStatus,
    pub start_time: DateTime<Utc>,
}

/// A sport event that has not been persisted yet, so it carries no id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSportEvent {
    pub name: String,
    pub sport_type: SportType,
    pub status: SportEventStatus,
    pub start_time: DateTime<Utc>,
}

impl NewSportEvent {
    /// New events start out INACTIVE unless told otherwise.
    pub fn new(name: impl Into<String>, sport_type: SportType, start_time: DateTime<Utc>) -> Self {
        Self {
            name: name.into(),
            sport_type,
            status: SportEventStatus::Inactive,
            start_time,
        }
    }

    pub fn with_status(mut self, status: SportEventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn into_event(self, id: i64) -> SportEvent {
        SportEvent {
            id,
            name: self.name,
            sport_type: self.sport_type,
            status: self.status,
            start_time: self.start_time,
        }
    }
}
