//! Sport event use cases
//!
//! Thin orchestration over the store: every decision is delegated to the pure
//! transition validator and query resolver in [`crate::domain`].

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::adapters::SportEventStore;
use crate::domain::{
    validate_transition, Clock, EventQuery, NewSportEvent, SportEvent, SportEventStatus,
    SportType,
};
use crate::error::{Result, SportEventsError};

pub struct SportEventService {
    store: Arc<dyn SportEventStore>,
    clock: Arc<dyn Clock>,
}

impl SportEventService {
    pub fn new(store: Arc<dyn SportEventStore>, clock: Arc<dyn Clock>) -> Self {
        Self { store, clock }
    }

    pub async fn create_event(&self, event: NewSportEvent) -> Result<SportEvent> {
        let created = self.store.insert(event).await?;
        info!(
            id = created.id,
            sport_type = %created.sport_type,
            status = %created.status,
            "Created sport event"
        );
        Ok(created)
    }

    pub async fn list_events(
        &self,
        sport_type: Option<SportType>,
        status: Option<SportEventStatus>,
    ) -> Result<Vec<SportEvent>> {
        let query = EventQuery::resolve(sport_type, status);
        debug!(
            sport_type = ?query.sport_type(),
            status = ?query.status(),
            "Listing sport events"
        );

        match query {
            EventQuery::ByTypeAndStatus(t, s) => self.store.find_by_type_and_status(t, s).await,
            EventQuery::ByType(t) => self.store.find_by_type(t).await,
            EventQuery::ByStatus(s) => self.store.find_by_status(s).await,
            EventQuery::All => self.store.find_all().await,
        }
    }

    pub async fn get_event(&self, id: i64) -> Result<SportEvent> {
        debug!(id, "Looking up sport event");
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| SportEventsError::event_not_found(id))
    }

    /// Fetch, validate and persist a status change.
    ///
    /// The write is a compare-and-swap against the status that was validated, so a
    /// concurrent change between the read and the write surfaces as `Conflict`.
    pub async fn change_status(
        &self,
        id: i64,
        requested: Option<SportEventStatus>,
    ) -> Result<SportEvent> {
        let event = self.get_event(id).await?;
        let now = self.clock.now();

        let transition = validate_transition(event.status, requested, event.start_time, now)
            .map_err(|reason| {
                warn!(id, current = %event.status, ?requested, %reason, "Rejected status change");
                SportEventsError::InvalidTransition {
                    current: event.status,
                    requested,
                    reason,
                }
            })?;

        let updated = self
            .store
            .update_status_if(id, transition.from, transition.to)
            .await?
            .ok_or_else(|| {
                warn!(id, expected = %transition.from, "Status changed concurrently");
                SportEventsError::Conflict(format!(
                    "Sport Event {} is no longer {}",
                    id, transition.from
                ))
            })?;

        info!(
            id,
            from = %transition.from,
            to = %transition.to,
            at = %transition.evaluated_at,
            "Changed sport event status"
        );
        Ok(updated)
    }
}
