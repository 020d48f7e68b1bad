pub mod adapters;
pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod services;
pub mod validation;

pub use adapters::{InMemoryStore, PostgresStore, SportEventStore};
pub use api::{create_router, AppState};
pub use config::AppConfig;
pub use domain::{
    validate_transition, Clock, EventQuery, FixedClock, NewSportEvent, RejectionReason,
    SportEvent, SportEventStatus, SportType, StatusTransition, SystemClock,
};
pub use error::{FieldError, Result, SportEventsError};
pub use services::SportEventService;
