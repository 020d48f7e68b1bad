pub mod sport_events;
pub mod system;

pub use sport_events::*;
pub use system::*;
