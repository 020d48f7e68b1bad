pub mod clock;
pub mod event;
pub mod query;
pub mod state;

pub use clock::*;
pub use event::*;
pub use query::*;
pub use state::*;
