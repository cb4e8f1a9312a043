//! API request handlers.

mod health;
mod locations;
mod map;
mod reset;

pub use health::health_handler;
pub use locations::{create_location, list_locations};
pub use map::map_handler;
pub use reset::reset_handler;
