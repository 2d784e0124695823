//! Logging infrastructure for structured console output.

mod logger;
mod subscriber;

pub use logger::{ActionEntry, ActionStatus, Logger};
pub use subscriber::init_subscriber;
