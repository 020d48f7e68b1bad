use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::adapters::SportEventStore;
use crate::domain::Clock;
use crate::services::SportEventService;

/// Shared application state for API handlers
#[derive(Clone)]
pub struct AppState {
    /// Sport event use cases
    pub events: Arc<SportEventService>,

    /// Backing store, kept for readiness checks
    pub store: Arc<dyn SportEventStore>,

    /// Label of the configured backend ("postgres" or "memory")
    pub store_kind: &'static str,

    /// Application start time
    pub start_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(
        store: Arc<dyn SportEventStore>,
        store_kind: &'static str,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            events: Arc::new(SportEventService::new(Arc::clone(&store), clock)),
            store,
            store_kind,
            start_time: Utc::now(),
        }
    }

    /// Get system uptime in seconds
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.start_time).num_seconds()
    }
}
