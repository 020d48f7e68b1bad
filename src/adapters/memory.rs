use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use crate::adapters::SportEventStore;
use crate::domain::{NewSportEvent, SportEvent, SportEventStatus, SportType};
use crate::error::Result;

#[derive(Debug, Default)]
struct Inner {
    last_id: i64,
    events: BTreeMap<i64, SportEvent>,
}

/// Process-local store, used when no database is configured and in tests
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<Inner>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    async fn filtered<F>(&self, predicate: F) -> Vec<SportEvent>
    where
        F: Fn(&SportEvent) -> bool,
    {
        let inner = self.inner.read().await;
        inner
            .events
            .values()
            .filter(|e| predicate(e))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl SportEventStore for InMemoryStore {
    #[instrument(skip(self))]
    async fn insert(&self, event: NewSportEvent) -> Result<SportEvent> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let stored = event.into_event(inner.last_id);
        inner.events.insert(stored.id, stored.clone());
        debug!(id = stored.id, "Stored sport event in memory");
        Ok(stored)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<SportEvent>> {
        Ok(self.inner.read().await.events.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<SportEvent>> {
        Ok(self.filtered(|_| true).await)
    }

    async fn find_by_type(&self, sport_type: SportType) -> Result<Vec<SportEvent>> {
        Ok(self.filtered(|e| e.sport_type == sport_type).await)
    }

    async fn find_by_status(&self, status: SportEventStatus) -> Result<Vec<SportEvent>> {
        Ok(self.filtered(|e| e.status == status).await)
    }

    async fn find_by_type_and_status(
        &self,
        sport_type: SportType,
        status: SportEventStatus,
    ) -> Result<Vec<SportEvent>> {
        Ok(self
            .filtered(|e| e.sport_type == sport_type && e.status == status)
            .await)
    }

    #[instrument(skip(self))]
    async fn update_status_if(
        &self,
        id: i64,
        expected: SportEventStatus,
        new_status: SportEventStatus,
    ) -> Result<Option<SportEvent>> {
        let mut inner = self.inner.write().await;
        let Some(event) = inner.events.get_mut(&id) else {
            return Ok(None);
        };
        if event.status != expected {
            return Ok(None);
        }
        event.status = new_status;
        Ok(Some(event.clone()))
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
