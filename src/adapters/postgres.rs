use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::{debug, info, instrument};

use crate::adapters::SportEventStore;
use crate::domain::{NewSportEvent, SportEvent, SportEventStatus, SportType};
use crate::error::{Result, SportEventsError};

type PgQuery<'q> = sqlx::query::Query<'q, sqlx::Postgres, sqlx::postgres::PgArguments>;

const SELECT_COLUMNS: &str = "SELECT id, name, sport_type, event_status, start_time FROM sport_events";

/// PostgreSQL storage adapter
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;

        info!("Connected to PostgreSQL");
        Ok(Self { pool })
    }

    /// Run migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        info!("Database migrations completed");
        Ok(())
    }

    async fn fetch_list(&self, query: PgQuery<'_>) -> Result<Vec<SportEvent>> {
        let rows = query.fetch_all(&self.pool).await?;
        let events = rows.iter().map(row_to_event).collect::<Result<Vec<_>>>()?;
        debug!(count = events.len(), "Fetched sport events");
        Ok(events)
    }
}

fn row_to_event(row: &PgRow) -> Result<SportEvent> {
    let sport_type: String = row.try_get("sport_type")?;
    let status: String = row.try_get("event_status")?;

    Ok(SportEvent {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        sport_type: sport_type
            .parse::<SportType>()
            .map_err(|e| SportEventsError::Internal(format!("corrupt sport_events row: {}", e)))?,
        status: status
            .parse::<SportEventStatus>()
            .map_err(|e| SportEventsError::Internal(format!("corrupt sport_events row: {}", e)))?,
        start_time: row.try_get("start_time")?,
    })
}

#[async_trait]
impl SportEventStore for PostgresStore {
    #[instrument(skip(self))]
    async fn insert(&self, event: NewSportEvent) -> Result<SportEvent> {
        let row = sqlx::query(
            r#"
            INSERT INTO sport_events (name, sport_type, event_status, start_time)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, sport_type, event_status, start_time
            "#,
        )
        .bind(&event.name)
        .bind(event.sport_type.as_str())
        .bind(event.status.as_str())
        .bind(event.start_time)
        .fetch_one(&self.pool)
        .await?;

        row_to_event(&row)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> Result<Option<SportEvent>> {
        let sql = format!("{} WHERE id = $1", SELECT_COLUMNS);
        let row = sqlx::query(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(row_to_event).transpose()
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<SportEvent>> {
        let sql = format!("{} ORDER BY id", SELECT_COLUMNS);
        self.fetch_list(sqlx::query(&sql)).await
    }

    #[instrument(skip(self))]
    async fn find_by_type(&self, sport_type: SportType) -> Result<Vec<SportEvent>> {
        let sql = format!("{} WHERE sport_type = $1 ORDER BY id", SELECT_COLUMNS);
        self.fetch_list(sqlx::query(&sql).bind(sport_type.as_str())).await
    }

    #[instrument(skip(self))]
    async fn find_by_status(&self, status: SportEventStatus) -> Result<Vec<SportEvent>> {
        let sql = format!("{} WHERE event_status = $1 ORDER BY id", SELECT_COLUMNS);
        self.fetch_list(sqlx::query(&sql).bind(status.as_str())).await
    }

    #[instrument(skip(self))]
    async fn find_by_type_and_status(
        &self,
        sport_type: SportType,
        status: SportEventStatus,
    ) -> Result<Vec<SportEvent>> {
        let sql = format!(
            "{} WHERE sport_type = $1 AND event_status = $2 ORDER BY id",
            SELECT_COLUMNS
        );
        self.fetch_list(
            sqlx::query(&sql)
                .bind(sport_type.as_str())
                .bind(status.as_str()),
        )
        .await
    }

    #[instrument(skip(self))]
    async fn update_status_if(
        &self,
        id: i64,
        expected: SportEventStatus,
        new_status: SportEventStatus,
    ) -> Result<Option<SportEvent>> {
        let row = sqlx::query(
            r#"
            UPDATE sport_events SET event_status = $1
            WHERE id = $2 AND event_status = $3
            RETURNING id, name, sport_type, event_status, start_time
            "#,
        )
        .bind(new_status.as_str())
        .bind(id)
        .bind(expected.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(row_to_event).transpose()
    }

    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
