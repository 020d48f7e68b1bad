use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use std::str::FromStr;

use crate::api::{
    error::ApiError,
    state::AppState,
    types::{
        ChangeStatusRequest, CreateSportEventRequest, ListSportEventsParams, SportEventResponse,
    },
};
use crate::domain::{SportEventStatus, SportType};
use crate::validation::validate_create_request;

type ApiResult<T> = std::result::Result<T, ApiError>;

/// Blank values are treated as absent.
fn parse_param<T>(name: &str, raw: Option<&str>) -> ApiResult<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| ApiError::invalid_parameter(name, e.to_string())),
    }
}

/// GET /sport-events?type=&status=
pub async fn list_sport_events(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListSportEventsParams>, QueryRejection>,
) -> ApiResult<Json<Vec<SportEventResponse>>> {
    let Query(params) = params?;
    let sport_type = parse_param::<SportType>("type", params.sport_type.as_deref())?;
    let status = parse_param::<SportEventStatus>("status", params.status.as_deref())?;

    let events = state.events.list_events(sport_type, status).await?;
    Ok(Json(events.into_iter().map(Into::into).collect()))
}

/// GET /sport-events/:id
pub async fn get_sport_event(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<SportEventResponse>> {
    let Path(id) = id?;
    let event = state.events.get_event(id).await?;
    Ok(Json(event.into()))
}

/// POST /sport-events
pub async fn create_sport_event(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateSportEventRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<SportEventResponse>)> {
    let Json(req) = body?;
    let new_event = validate_create_request(req)?;
    let created = state.events.create_event(new_event).await?;
    Ok((StatusCode::CREATED, Json(created.into())))
}

/// PATCH /sport-events/:id/status
pub async fn change_sport_event_status(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    body: std::result::Result<Json<ChangeStatusRequest>, JsonRejection>,
) -> ApiResult<Json<SportEventResponse>> {
    let Path(id) = id?;
    let Json(req) = body?;
    let updated = state.events.change_status(id, req.status).await?;
    Ok(Json(updated.into()))
}
