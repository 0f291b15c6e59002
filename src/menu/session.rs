// One logged-in student driving the menu until they exit.
//
// Every handler is an error boundary: failures are printed and the menu
// comes back. Only Exit or closed input ends the loop.

use crate::core::parse;
use crate::core::{
    AssignmentForm, AssignmentTracker, Identity, IdentityResolver, ReminderScheduler,
    StudyLogger, StudySessionForm,
};
use crate::db::{Database, Student};
use crate::error::{HubError, Result};
use crate::menu::{render, DeleteTarget, MenuChoice, Prompt, DELETE_MENU, MAIN_MENU};
use std::io::{BufRead, Write};
use std::sync::Arc;
use tracing::{debug, warn};

pub struct Session<R, W> {
    prompt: Prompt<R, W>,
    student: Student,
    assignments: AssignmentTracker,
    reminders: ReminderScheduler,
    study: StudyLogger,
}

/// Ask for an email (unless given) and resolve it to a student.
///
/// Failure is printed before it is returned; no session can start without a student.
pub async fn login<R: BufRead, W: Write>(
    db: Arc<Database>,
    mut prompt: Prompt<R, W>,
    email: Option<&str>,
) -> Result<Session<R, W>> {
    prompt.say("Welcome to the Local Homework Hub!")?;

    let email = match email {
        Some(email) => email.to_string(),
        None => prompt.ask("Enter your email: ")?,
    };

    let resolver = IdentityResolver::new(Arc::clone(&db));
    let resolved = resolver
        .resolve(&email, || std::future::ready(prompt.ask("Enter your full name: ")))
        .await;

    let student = match resolved {
        Ok(Identity::Returning(student)) => {
            prompt.say(format!(
                "Welcome back, {}! Your student ID is {}.",
                student.full_name, student.id
            ))?;
            student
        }
        Ok(Identity::Registered(student)) => {
            prompt.say(format!(
                "Welcome, {}! Your student ID is {}.",
                student.full_name, student.id
            ))?;
            student
        }
        Err(e) => {
            prompt.say(format!("Error initializing student: {}", e.user_message()))?;
            return Err(e);
        }
    };

    Ok(Session {
        prompt,
        student,
        assignments: AssignmentTracker::new(Arc::clone(&db)),
        reminders: ReminderScheduler::new(Arc::clone(&db)),
        study: StudyLogger::new(db),
    })
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn student(&self) -> &Student {
        &self.student
    }

    /// Show the menu and handle selections until Exit or end of input.
    ///
    /// Only a failure to write to the terminal is returned.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.prompt.say(MAIN_MENU)?;
            let input = match self.prompt.ask("Enter your choice: ") {
                Ok(input) => input,
                Err(HubError::InputClosed) => break,
                Err(e) => return Err(e),
            };

            let choice = match MenuChoice::parse(&input) {
                Some(MenuChoice::Exit) => {
                    self.prompt.say("Exiting the program.")?;
                    break;
                }
                Some(choice) => choice,
                None => {
                    self.prompt.say("Invalid choice. Please try again.")?;
                    continue;
                }
            };

            debug!(?choice, "Menu selection");
            match self.dispatch(choice).await {
                Ok(()) => {}
                Err(HubError::InputClosed) => break,
                Err(e) => self.report(choice.action(), &e)?,
            }
        }

        Ok(())
    }

    async fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::AddAssignment => self.add_assignment().await,
            MenuChoice::AddReminder => self.add_reminder().await,
            MenuChoice::LogStudySession => self.log_study_session().await,
            MenuChoice::ViewAssignments => self.view_assignments().await,
            MenuChoice::ViewReminders => self.view_reminders().await,
            MenuChoice::ViewStudySessions => self.view_study_sessions().await,
            MenuChoice::DeleteItem => self.delete_item().await,
            MenuChoice::EditAssignment => self.edit_assignments().await,
            MenuChoice::Exit => Ok(()),
        }
    }

    // Not-found is informational; everything else is an error.
    fn report(&mut self, action: &str, err: &HubError) -> Result<()> {
        if err.is_not_found() {
            debug!(error = %err, "Nothing matched");
            return self.prompt.say(err.user_message());
        }

        warn!(error = %err, action, "Operation failed");
        self.prompt
            .say(format!("Error {}: {}", action, err.user_message()))
    }

    async fn add_assignment(&mut self) -> Result<()> {
        let form = AssignmentForm {
            task_name: self.prompt.ask("Enter task name: ")?,
            due_date: self.prompt.ask("Enter due date (YYYY-MM-DD): ")?,
            subject: self.prompt.ask("Enter subject: ")?,
            priority_level: self.prompt.ask("Enter priority level (1-5): ")?,
        };
        let task_name = form.task_name.trim().to_string();

        let id = self.assignments.create(self.student.id, form).await?;
        self.prompt.say(format!(
            "Assignment '{}' added successfully! (ID: {})",
            task_name, id
        ))
    }

    async fn add_reminder(&mut self) -> Result<()> {
        let assignment_id = self.prompt.ask("Enter assignment ID: ")?;
        let date = self.prompt.ask("Enter reminder date (YYYY-MM-DD): ")?;

        self.reminders
            .create(self.student.id, &assignment_id, &date)
            .await?;
        self.prompt.say("Reminder added successfully!")
    }

    async fn log_study_session(&mut self) -> Result<()> {
        let form = StudySessionForm {
            subject: self.prompt.ask("Enter subject: ")?,
            start_time: self.prompt.ask("Enter start time (YYYY-MM-DD HH:MM:SS): ")?,
            end_time: self.prompt.ask("Enter end time (YYYY-MM-DD HH:MM:SS): ")?,
            notes: self.prompt.ask("Enter notes (optional): ")?,
        };

        self.study.log(self.student.id, form).await?;
        self.prompt.say("Study session logged successfully!")
    }

    async fn view_assignments(&mut self) -> Result<()> {
        let assignments = self.assignments.list(self.student.id).await?;
        if assignments.is_empty() {
            return self.prompt.say("No assignments found.");
        }

        self.prompt.say("\nAssignments:")?;
        for a in &assignments {
            self.prompt.say(render::assignment(a))?;
        }
        Ok(())
    }

    async fn view_reminders(&mut self) -> Result<()> {
        let reminders = self.reminders.list(self.student.id).await?;
        if reminders.is_empty() {
            return self.prompt.say("No reminders found.");
        }

        self.prompt.say("\nReminders:")?;
        for r in &reminders {
            self.prompt.say(render::reminder(r))?;
        }
        Ok(())
    }

    async fn view_study_sessions(&mut self) -> Result<()> {
        let sessions = self.study.list(self.student.id).await?;
        if sessions.is_empty() {
            return self.prompt.say("No study sessions found.");
        }

        self.prompt.say("\nStudy Sessions:")?;
        for s in &sessions {
            self.prompt.say(render::study_session(s))?;
        }
        Ok(())
    }

    async fn delete_item(&mut self) -> Result<()> {
        self.prompt.say(DELETE_MENU)?;
        let input = self.prompt.ask("Enter your choice: ")?;

        match DeleteTarget::parse(&input) {
            Some(DeleteTarget::Assignment) => self.delete_assignment().await,
            Some(DeleteTarget::Reminder) => self.delete_reminder().await,
            Some(DeleteTarget::StudySession) => self.delete_study_session().await,
            Some(DeleteTarget::Return) => self.prompt.say("Returning to the main menu."),
            None => self
                .prompt
                .say("Invalid choice. Returning to the main menu."),
        }
    }

    /// Read an id for `label`. `None` means the student entered 0 to go back.
    fn ask_id(&mut self, label: &str) -> Result<Option<i64>> {
        self.prompt.say("Or enter 0 to exit")?;
        let id = parse::parse_id(&self.prompt.ask(label)?)?;
        if id == 0 {
            self.prompt.say("Returning to the main menu.")?;
            return Ok(None);
        }
        Ok(Some(id))
    }

    async fn list_assignments_with_ids(&mut self) -> Result<()> {
        self.prompt.say("\nYour Assignments:")?;
        let assignments = self.assignments.list(self.student.id).await?;
        if assignments.is_empty() {
            return self.prompt.say("No assignments found.");
        }
        for a in &assignments {
            self.prompt.say(render::assignment_with_id(a))?;
        }
        Ok(())
    }

    async fn delete_assignment(&mut self) -> Result<()> {
        self.list_assignments_with_ids().await?;
        let Some(id) = self.ask_id("Enter the Assignment ID to delete: ")? else {
            return Ok(());
        };

        let reminders = self.assignments.delete(id, self.student.id).await?;
        self.prompt.say(format!(
            "Assignment ID {} and its associated reminders ({}) deleted successfully.",
            id, reminders
        ))
    }

    async fn delete_reminder(&mut self) -> Result<()> {
        self.prompt.say("\nReminders:")?;
        let reminders = self.reminders.list(self.student.id).await?;
        if reminders.is_empty() {
            self.prompt.say("No reminders found.")?;
        }
        for r in &reminders {
            self.prompt.say(render::reminder_with_id(r))?;
        }

        let Some(id) = self.ask_id("Enter the Reminder ID to delete: ")? else {
            return Ok(());
        };

        self.reminders.delete(id, self.student.id).await?;
        self.prompt
            .say(format!("Reminder ID {} deleted successfully.", id))
    }

    async fn delete_study_session(&mut self) -> Result<()> {
        self.prompt.say("\nStudy Sessions:")?;
        let sessions = self.study.list(self.student.id).await?;
        if sessions.is_empty() {
            self.prompt.say("No study sessions found.")?;
        }
        for s in &sessions {
            self.prompt.say(render::study_session_with_id(s))?;
        }

        let Some(id) = self.ask_id("Enter the Study Session ID to delete: ")? else {
            return Ok(());
        };

        self.study.delete(id, self.student.id).await?;
        self.prompt
            .say(format!("Study Session ID {} deleted successfully.", id))
    }

    /// Keep offering assignments to edit until the student enters 0
    async fn edit_assignments(&mut self) -> Result<()> {
        loop {
            self.list_assignments_with_ids().await?;
            self.prompt
                .say("Enter the Assignment ID to edit or '0' to return to the main menu.")?;
            let input = self.prompt.ask("Assignment ID: ")?;

            if input.trim() == "0" {
                return self.prompt.say("Returning to main menu.");
            }

            match self.edit_assignment(&input).await {
                Ok(()) => {}
                Err(HubError::InputClosed) => return Err(HubError::InputClosed),
                Err(e) => self.report(MenuChoice::EditAssignment.action(), &e)?,
            }
        }
    }

    async fn edit_assignment(&mut self, input: &str) -> Result<()> {
        let id = parse::parse_id(input)?;
        let current = self.assignments.get(id, self.student.id).await?;

        self.prompt.say(format!(
            "\nEditing Assignment: {} (ID: {})",
            current.task_name, current.id
        ))?;
        let form = AssignmentForm {
            task_name: self.prompt.ask(&format!(
                "Enter new task name (leave blank to keep: '{}'): ",
                current.task_name
            ))?,
            due_date: self.prompt.ask(&format!(
                "Enter new due date (YYYY-MM-DD, leave blank to keep: '{}'): ",
                current.due_date
            ))?,
            subject: self.prompt.ask(&format!(
                "Enter new subject (leave blank to keep: '{}'): ",
                current.subject
            ))?,
            priority_level: self.prompt.ask(&format!(
                "Enter new priority level (1-5, leave blank to keep: '{}'): ",
                current.priority_level
            ))?,
        };

        self.assignments.edit(id, self.student.id, form).await?;
        self.prompt
            .say(format!("Assignment ID {} updated successfully.", id))
    }
}
