pub mod api_server;
pub mod memory;
pub mod postgres;
pub mod store;

pub use api_server::start_api_server;
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use store::SportEventStore;

#[cfg(test)]
pub use store::MockSportEventStore;
