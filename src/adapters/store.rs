use async_trait::async_trait;

use crate::domain::{NewSportEvent, SportEvent, SportEventStatus, SportType};
use crate::error::Result;

/// Persistence boundary for sport events.
///
/// All finders return records ordered by id ascending.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SportEventStore: Send + Sync {
    /// Persist a new event and return it with its assigned id
    async fn insert(&self, event: NewSportEvent) -> Result<SportEvent>;

    async fn find_by_id(&self, id: i64) -> Result<Option<SportEvent>>;

    async fn find_all(&self) -> Result<Vec<SportEvent>>;

    async fn find_by_type(&self, sport_type: SportType) -> Result<Vec<SportEvent>>;

    async fn find_by_status(&self, status: SportEventStatus) -> Result<Vec<SportEvent>>;

    async fn find_by_type_and_status(
        &self,
        sport_type: SportType,
        status: SportEventStatus,
    ) -> Result<Vec<SportEvent>>;

    /// Compare-and-swap on the status column.
    ///
    /// Returns `None` when the event is missing or its status no longer equals `expected`.
    async fn update_status_if(
        &self,
        id: i64,
        expected: SportEventStatus,
        new_status: SportEventStatus,
    ) -> Result<Option<SportEvent>>;

    /// Cheap round trip used by readiness checks
    async fn ping(&self) -> Result<()>;
}
