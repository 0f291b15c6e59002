/// Core functionality modules
///
/// Contains the homework operations: login, assignments, reminders,
/// and study sessions. Each service validates raw input before it
/// touches the database.

pub mod assignments;
pub mod identity;
pub mod parse;
pub mod reminders;
pub mod sessions;

pub use assignments::{AssignmentForm, AssignmentTracker};
pub use identity::{Identity, IdentityResolver};
pub use reminders::ReminderScheduler;
pub use sessions::{StudyLogger, StudySessionForm};
