//! Input validation for API payloads
//!
//! Shape checks only (nulls, blanks, forbidden fields). Business rules such as
//! status transitions live in [`crate::domain`].

use crate::api::types::CreateSportEventRequest;
use crate::domain::{NewSportEvent, SportEventStatus};
use crate::error::{FieldError, Result, SportEventsError};

/// Check a create request and turn it into a [`NewSportEvent`].
///
/// All violations are collected, so the caller sees every bad field at once.
pub fn validate_create_request(req: CreateSportEventRequest) -> Result<NewSportEvent> {
    let mut errors = Vec::new();

    if req.id.is_some() {
        errors.push(FieldError::new(
            "id",
            "ID must be null when creating a new sport event",
        ));
    }

    let name = match req.name {
        Some(name) if !name.trim().is_empty() => Some(name),
        _ => {
            errors.push(FieldError::new("name", "Name must not be blank"));
            None
        }
    };

    if req.sport_type.is_none() {
        errors.push(FieldError::new("sportType", "SportType must not be null"));
    }

    if req.start_time.is_none() {
        errors.push(FieldError::new("startTime", "StartTime must not be null"));
    }

    match (name, req.sport_type, req.start_time) {
        (Some(name), Some(sport_type), Some(start_time)) if errors.is_empty() => {
            Ok(NewSportEvent::new(name, sport_type, start_time)
                .with_status(req.event_status.unwrap_or(SportEventStatus::Inactive)))
        }
        _ => Err(SportEventsError::Validation(errors)),
    }
}
