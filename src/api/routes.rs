use axum::{
    routing::{get, patch},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api::{handlers, state::AppState};

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Sport event endpoints
        .route(
            "/sport-events",
            get(handlers::list_sport_events).post(handlers::create_sport_event),
        )
        .route("/sport-events/:id", get(handlers::get_sport_event))
        .route(
            "/sport-events/:id/status",
            patch(handlers::change_sport_event_status),
        )
        // Health endpoints
        .route("/health", get(handlers::health_handler))
        .route("/health/ready", get(handlers::readiness_handler))
        // Add state, tracing and CORS
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
