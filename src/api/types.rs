use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{SportEvent, SportEventStatus, SportType};
use crate::error::FieldError;

// ============================================================================
// Sport Event Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportEventResponse {
    pub id: i64,
    pub name: String,
    pub sport_type: SportType,
    pub event_status: SportEventStatus,
    pub start_time: DateTime<Utc>,
}

impl From<SportEvent> for SportEventResponse {
    fn from(event: SportEvent) -> Self {
        Self {
            id: event.id,
            name: event.name,
            sport_type: event.sport_type,
            event_status: event.status,
            start_time: event.start_time,
        }
    }
}

/// Body of `POST /sport-events`.
///
/// Every field is optional at the wire level so that missing values are reported
/// together as field errors instead of failing on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSportEventRequest {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub sport_type: Option<SportType>,
    pub event_status: Option<SportEventStatus>,
    #[serde(default, deserialize_with = "flexible_timestamp::deserialize")]
    pub start_time: Option<DateTime<Utc>>,
}

/// Body of `PATCH /sport-events/:id/status`. `null` or a missing field is an
/// unspecified target status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChangeStatusRequest {
    #[serde(alias = "eventStatus")]
    pub status: Option<SportEventStatus>,
}

/// Query string of `GET /sport-events`. Values are parsed by the handler so that a
/// bad value can be reported against its parameter name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSportEventsParams {
    #[serde(rename = "type")]
    pub sport_type: Option<String>,
    pub status: Option<String>,
}

// ============================================================================
// Error / Health Types
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldErrorResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

impl From<FieldError> for FieldErrorResponse {
    fn from(e: FieldError) -> Self {
        Self {
            field: e.field,
            message: e.message,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
}

/// Accepts RFC 3339 timestamps and zone-less `YYYY-MM-DDTHH:MM:SS[.f]`, read as UTC.
mod flexible_timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{de, Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        if let Ok(ts) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(ts.with_timezone(&Utc)));
        }

        NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| Some(naive.and_utc()))
            .map_err(|_| {
                de::Error::custom(format!(
                    "invalid startTime '{}': expected an ISO-8601 date-time",
                    raw
                ))
            })
    }
}
