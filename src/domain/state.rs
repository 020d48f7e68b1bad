use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::event::ParseEnumError;

/// Sport event lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE", try_from = "String")]
pub enum SportEventStatus {
    /// Scheduled, not yet running
    Inactive,
    /// Open and running
    Active,
    /// Over; no further transitions
    Finished,
}

impl SportEventStatus {
    pub const ALL: [SportEventStatus; 3] = [
        SportEventStatus::Inactive,
        SportEventStatus::Active,
        SportEventStatus::Finished,
    ];

    const NAMES: &'static [&'static str] = &["INACTIVE", "ACTIVE", "FINISHED"];

    pub fn as_str(&self) -> &'static str {
        match self {
            SportEventStatus::Inactive => "INACTIVE",
            SportEventStatus::Active => "ACTIVE",
            SportEventStatus::Finished => "FINISHED",
        }
    }
}

impl fmt::Display for SportEventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SportEventStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        SportEventStatus::ALL
            .into_iter()
            .find(|st| st.as_str() == upper)
            .ok_or_else(|| ParseEnumError {
                kind: "SportEventStatus",
                value: s.to_string(),
                accepted: SportEventStatus::NAMES,
            })
    }
}

impl TryFrom<String> for SportEventStatus {
    type Error = ParseEnumError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Why a requested status change was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionReason {
    /// No target status was supplied
    Unspecified { current: SportEventStatus },
    /// Target equals the current status
    AlreadyInStatus(SportEventStatus),
    /// Activation requested after the scheduled start
    AlreadyStarted,
    /// The pair is not an edge of the state machine
    Forbidden {
        current: SportEventStatus,
        requested: SportEventStatus,
    },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::Unspecified { current } => write!(
                f,
                "Invalid status change from '{}' to unspecified status",
                current
            ),
            RejectionReason::AlreadyInStatus(status) => write!(f, "Event is already {}", status),
            RejectionReason::AlreadyStarted => {
                write!(f, "Cannot activate an event that has already started")
            }
            RejectionReason::Forbidden { current, requested } => write!(
                f,
                "Invalid status change from '{}' to '{}'",
                current, requested
            ),
        }
    }
}

/// An accepted status change (for logging and persistence)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTransition {
    pub from: SportEventStatus,
    pub to: SportEventStatus,
    pub evaluated_at: DateTime<Utc>,
}

/// Decide whether an event in `current` may move to `requested`.
///
/// `start_time` is the event's scheduled start and `now` is the instant the request is
/// evaluated; activation is refused once the start time lies in the past. The result is
/// never cached, so the same event can pass or fail depending only on when this is called.
pub fn validate_transition(
    current: SportEventStatus,
    requested: Option<SportEventStatus>,
    start_time: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<StatusTransition, RejectionReason> {
    use SportEventStatus::*;

    let Some(requested) = requested else {
        return Err(RejectionReason::Unspecified { current });
    };

    let forbidden = RejectionReason::Forbidden { current, requested };

    let outcome = match (current, requested) {
        // FINISHED is absorbing
        (Finished, Finished) => Err(RejectionReason::AlreadyInStatus(Finished)),
        (Finished, Inactive | Active) => Err(forbidden),

        // Deactivation is always allowed from a live state
        (Inactive | Active, Inactive) => Ok(()),

        // Activation is time-gated
        (Inactive | Active, Active) if start_time < now => Err(RejectionReason::AlreadyStarted),
        (Active, Active) => Err(RejectionReason::AlreadyInStatus(Active)),
        (Inactive, Active) => Ok(()),

        // Finishing requires a running event
        (Inactive, Finished) => Err(forbidden),
        (Active, Finished) => Ok(()),
    };

    outcome.map(|()| StatusTransition {
        from: current,
        to: requested,
        evaluated_at: now,
    })
}
