pub mod events;
pub use events::*;

pub mod voting;
pub use voting::*;
