/// homework-hub library
///
/// Assignments, reminders, and study sessions for one student at a time,
/// stored in SQLite and driven from a text menu.

pub mod config;
pub mod core;
pub mod db;
pub mod error;
pub mod logging;
pub mod menu;

// Re-exports for convenience
pub use config::Config;
pub use db::Database;
pub use error::{HubError, Result};
