pub mod sport_events;

pub use sport_events::SportEventService;
