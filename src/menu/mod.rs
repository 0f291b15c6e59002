/// Interactive menu
///
/// The numbered text menu that drives one logged-in session.

pub mod prompt;
pub mod render;
pub mod session;

pub use prompt::Prompt;
pub use session::{login, Session};

pub const MAIN_MENU: &str = "\n=== Local Homework Hub Menu ===
1. Add Assignment
2. Add Reminder
3. Log Study Session
4. View Assignments
5. View Reminders
6. View Study Sessions
7. Delete Item
8. Edit Assignment
9. Exit";

pub const DELETE_MENU: &str = "\nWhat would you like to delete?
1. Assignment
2. Reminder
3. Study Session
4. Return to Main Menu";

/// Top-level menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddAssignment,
    AddReminder,
    LogStudySession,
    ViewAssignments,
    ViewReminders,
    ViewStudySessions,
    DeleteItem,
    EditAssignment,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        let choice = match input.trim() {
            "1" => MenuChoice::AddAssignment,
            "2" => MenuChoice::AddReminder,
            "3" => MenuChoice::LogStudySession,
            "4" => MenuChoice::ViewAssignments,
            "5" => MenuChoice::ViewReminders,
            "6" => MenuChoice::ViewStudySessions,
            "7" => MenuChoice::DeleteItem,
            "8" => MenuChoice::EditAssignment,
            "9" => MenuChoice::Exit,
            _ => return None,
        };
        Some(choice)
    }

    /// Used in "Error <action>: ..." messages
    pub fn action(&self) -> &'static str {
        match self {
            MenuChoice::AddAssignment => "adding assignment",
            MenuChoice::AddReminder => "adding reminder",
            MenuChoice::LogStudySession => "logging study session",
            MenuChoice::ViewAssignments => "viewing assignments",
            MenuChoice::ViewReminders => "viewing reminders",
            MenuChoice::ViewStudySessions => "viewing study sessions",
            MenuChoice::DeleteItem => "deleting item",
            MenuChoice::EditAssignment => "editing assignment",
            MenuChoice::Exit => "exiting",
        }
    }
}

/// Delete submenu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Assignment,
    Reminder,
    StudySession,
    Return,
}

impl DeleteTarget {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(DeleteTarget::Assignment),
            "2" => Some(DeleteTarget::Reminder),
            "3" => Some(DeleteTarget::StudySession),
            "4" => Some(DeleteTarget::Return),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddAssignment));
        assert_eq!(MenuChoice::parse(" 9 "), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_delete_target_parse() {
        assert_eq!(DeleteTarget::parse("3"), Some(DeleteTarget::StudySession));
        assert_eq!(DeleteTarget::parse("4"), Some(DeleteTarget::Return));
        assert_eq!(DeleteTarget::parse("5"), None);
    }
}
