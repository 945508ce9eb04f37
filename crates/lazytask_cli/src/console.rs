//! Interactive menu loop.
//!
//! # Responsibility
//! - Drive the numbered main menu and each use-case dialog.
//! - Validate field answers with the core predicates before calling the
//!   service, re-prompting on invalid input.
//!
//! # Invariants
//! - End of input ends the session without an error.
//! - Engine errors are shown to the user; none of them ends the session.

use crate::prompt::{ConsoleError, ConsoleResult, Prompter};
use crate::render;
use lazytask_core::{
    is_valid_category, is_valid_date, is_valid_priority, is_valid_title, Category, Priority,
    RepoError, StatusFilter, Task, TaskId, TaskInput, TaskRepository, TaskService,
};
use log::info;
use std::io::{BufRead, Write};

const MAIN_MENU: [&str; 8] = [
    "Add task",
    "Show tasks",
    "Edit task",
    "Mark task completed",
    "Delete task",
    "Search tasks",
    "Statistics",
    "Exit",
];

const SHOW_MENU: [&str; 4] = ["All", "Active", "Completed", "Overdue"];

const OTHER_CATEGORY: &str = "Other";

pub struct Console<R: TaskRepository, I, O> {
    service: TaskService<R>,
    prompt: Prompter<I, O>,
}

impl<R: TaskRepository, I: BufRead, O: Write> Console<R, I, O> {
    pub fn new(service: TaskService<R>, input: I, output: O) -> Self {
        Self {
            service,
            prompt: Prompter::new(input, output),
        }
    }

    pub fn into_parts(self) -> (TaskService<R>, O) {
        (self.service, self.prompt.into_output())
    }

    /// Runs until the user picks "Exit" or input ends.
    ///
    /// # Errors
    /// - Returns `ConsoleError::Io` when reading or writing fails.
    pub fn run(&mut self) -> ConsoleResult<()> {
        match self.run_menu() {
            Err(ConsoleError::InputClosed) => {
                info!("event=session_end module=console status=ok reason=input_closed");
                Ok(())
            }
            other => other,
        }
    }

    fn run_menu(&mut self) -> ConsoleResult<()> {
        self.prompt.say(&format!(
            "LazyTask {} (today is {})",
            lazytask_core::core_version(),
            lazytask_core::format_date(self.service.clock().today())
        ))?;

        loop {
            self.prompt.say("")?;
            match self.prompt.choose("Main menu", &MAIN_MENU)? {
                0 => self.add_task()?,
                1 => self.show_tasks()?,
                2 => self.edit_task()?,
                3 => self.complete_task()?,
                4 => self.delete_task()?,
                5 => self.search_tasks()?,
                6 => self.show_statistics()?,
                _ => {
                    self.prompt.say("Goodbye!")?;
                    info!("event=session_end module=console status=ok reason=exit");
                    return Ok(());
                }
            }
        }
    }

    fn add_task(&mut self) -> ConsoleResult<()> {
        let title = self
            .prompt
            .ask_until("Title", "Title must not be empty.", is_valid_title)?;
        let description = self.prompt.ask("Description (optional)")?;
        let priority = self.ask_priority()?;
        let due_date = self.prompt.ask_until(
            "Due date (dd.mm.yyyy)",
            "Please enter a valid date such as 11.10.2025.",
            is_valid_date,
        )?;
        let category = self.ask_category()?;

        let input = TaskInput {
            title,
            description,
            priority,
            due_date,
            category,
        };
        match self.service.create_task(&input) {
            Ok(task) => self.prompt.say(&format!("Task {} created.", task.id)),
            Err(err) => self.prompt.say(&format!("Task not created: {err}")),
        }
    }

    fn show_tasks(&mut self) -> ConsoleResult<()> {
        let choice = self.prompt.choose("Show", &SHOW_MENU)?;
        let tasks = match choice {
            0 => self.service.filter_by_status(StatusFilter::All),
            1 => self.service.filter_by_status(StatusFilter::Active),
            2 => self.service.filter_by_status(StatusFilter::Completed),
            _ => self.service.overdue_tasks(),
        };
        let lines = self.render_tasks(&tasks);
        self.prompt.say(&lines)
    }

    fn edit_task(&mut self) -> ConsoleResult<()> {
        let Some(task) = self.ask_existing_task()? else {
            return Ok(());
        };
        if task.is_completed {
            return self.prompt.say(&format!(
                "Task {} is completed and cannot be edited.",
                task.id
            ));
        }

        let current = TaskInput::from_task(&task);
        let title = self.ask_field(
            "Title",
            &current.title,
            "Title must not be empty.",
            is_valid_title,
        )?;
        let description = self
            .prompt
            .ask_with_default("Description", &current.description)?;
        let priority = self.ask_field(
            "Priority (Low/Medium/High/Urgent)",
            &current.priority,
            "Priority must be one of Low, Medium, High, Urgent.",
            is_valid_priority,
        )?;
        let due_date = self.ask_field(
            "Due date (dd.mm.yyyy)",
            &current.due_date,
            "Please enter a valid date such as 11.10.2025.",
            is_valid_date,
        )?;
        let category = self.ask_field(
            "Category",
            &current.category,
            "Category must not be empty.",
            is_valid_category,
        )?;

        let edit = TaskInput {
            title,
            description,
            priority,
            due_date,
            category,
        };
        match self.service.update_task(task.id, &edit) {
            Ok(()) => self.prompt.say(&format!("Task {} updated.", task.id)),
            Err(err) => self.prompt.say(&format!("Task not updated: {err}")),
        }
    }

    fn complete_task(&mut self) -> ConsoleResult<()> {
        let Some(id) = self.ask_id()? else {
            return Ok(());
        };
        let already_done = self
            .service
            .get_task(id)
            .is_some_and(|task| task.is_completed);

        if !self.service.mark_completed(id) {
            return self.prompt.say(&RepoError::NotFound(id).to_string());
        }
        if already_done {
            self.prompt.say(&format!("Task {id} was already completed."))
        } else {
            self.prompt.say(&format!("Task {id} marked as completed."))
        }
    }

    fn delete_task(&mut self) -> ConsoleResult<()> {
        let Some(task) = self.ask_existing_task()? else {
            return Ok(());
        };
        if !self
            .prompt
            .confirm(&format!("Delete task {} \"{}\"?", task.id, task.title))?
        {
            return self.prompt.say("Deletion cancelled.");
        }

        if self.service.delete_task(task.id) {
            self.prompt.say(&format!("Task {} deleted.", task.id))
        } else {
            self.prompt.say(&RepoError::NotFound(task.id).to_string())
        }
    }

    fn search_tasks(&mut self) -> ConsoleResult<()> {
        let query = self.prompt.ask("Search")?;
        if query.trim().is_empty() {
            return self.prompt.say("Search query must not be empty.");
        }
        let hits = self.service.search(query.trim());
        let lines = self.render_tasks(&hits);
        self.prompt.say(&lines)
    }

    fn show_statistics(&mut self) -> ConsoleResult<()> {
        let text = render::statistics(&self.service.statistics());
        self.prompt.say(&text)
    }

    fn ask_priority(&mut self) -> ConsoleResult<String> {
        let labels = Priority::ALL.map(Priority::label);
        let index = self.prompt.choose("Priority", &labels)?;
        Ok(labels[index].to_string())
    }

    fn ask_category(&mut self) -> ConsoleResult<String> {
        let defaults = Category::DEFAULTS;
        let mut options: Vec<&str> = defaults.iter().map(Category::label).collect();
        options.push(OTHER_CATEGORY);

        let index = self.prompt.choose("Category", &options)?;
        if index < defaults.len() {
            return Ok(options[index].to_string());
        }
        self.prompt.ask_until(
            "Custom category",
            "Category must not be empty.",
            is_valid_category,
        )
    }

    /// Edit-form field: empty answer keeps `current`, invalid answers re-prompt.
    fn ask_field(
        &mut self,
        label: &str,
        current: &str,
        hint: &str,
        accept: fn(&str) -> bool,
    ) -> ConsoleResult<String> {
        loop {
            let answer = self.prompt.ask_with_default(label, current)?;
            if accept(answer.as_str()) {
                return Ok(answer);
            }
            self.prompt.say(hint)?;
        }
    }

    fn ask_id(&mut self) -> ConsoleResult<Option<TaskId>> {
        let answer = self.prompt.ask("Task id")?;
        match answer.trim().parse::<TaskId>() {
            Ok(id) => Ok(Some(id)),
            Err(_) => {
                self.prompt.say("Task id must be a positive number.")?;
                Ok(None)
            }
        }
    }

    /// Asks for an id and returns a snapshot of the task, or reports not-found.
    fn ask_existing_task(&mut self) -> ConsoleResult<Option<Task>> {
        let Some(id) = self.ask_id()? else {
            return Ok(None);
        };
        match self.service.get_task(id) {
            Some(task) => Ok(Some(task.clone())),
            None => {
                self.prompt.say(&RepoError::NotFound(id).to_string())?;
                Ok(None)
            }
        }
    }

    fn render_tasks(&self, tasks: &[&Task]) -> String {
        if tasks.is_empty() {
            return "No tasks.".to_string();
        }
        tasks
            .iter()
            .map(|task| render::task_line(task, self.service.is_overdue(task)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
