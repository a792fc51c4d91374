// File: src/tasklist.rs
// Ordered task collection and the operations the command loop dispatches to.
use crate::error::ListoError;
use crate::keyword::StatusChange;
use crate::model::Task;

const EMPTY_LIST_MSG: &str = "Looks like you don't have any tasks for now!";
const NO_MATCH_MSG: &str = "I don't think we have that one..";

#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// Wraps an initial set of tasks, usually whatever the storage layer
    /// loaded at startup.
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Parses a 1-based index string and checks it against `[1, len]`,
    /// both ends inclusive. Anything else is a user error, not a panic.
    fn resolve_index(&self, index_text: &str) -> Result<usize, ListoError> {
        let index: usize = index_text
            .parse()
            .map_err(|_| ListoError::InvalidTaskReference)?;
        if index < 1 || index > self.tasks.len() {
            return Err(ListoError::InvalidTaskReference);
        }
        Ok(index - 1)
    }

    /// Returns the task at a 1-based position given as text.
    pub fn get_task(&self, index_text: &str) -> Result<&Task, ListoError> {
        Ok(&self.tasks[self.resolve_index(index_text)?])
    }

    /// Removes and returns the task at a 1-based position given as text.
    /// Later tasks shift down by one.
    pub fn delete_task(&mut self, index_text: &str) -> Result<Task, ListoError> {
        let index = self.resolve_index(index_text)?;
        Ok(self.tasks.remove(index))
    }

    /// Applies a status change to the task at a 1-based position given as
    /// text and returns it for display.
    pub fn set_status(
        &mut self,
        index_text: &str,
        change: StatusChange,
    ) -> Result<&Task, ListoError> {
        let index = self.resolve_index(index_text)?;
        let task = &mut self.tasks[index];
        match change {
            StatusChange::Mark => task.mark_done(),
            StatusChange::Unmark => task.mark_not_done(),
        }
        Ok(&self.tasks[index])
    }

    /// Renders the whole list, 1-indexed, one tab-prefixed task per line.
    pub fn display(&self) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MSG.to_string();
        }
        let mut out = String::new();
        for (i, task) in self.tasks.iter().enumerate() {
            out.push_str(&format!("\t{}. {}\n", i + 1, task));
        }
        out
    }

    /// Renders the tasks whose rendering contains `term` as a literal,
    /// case-sensitive substring, in original order, renumbered from 1.
    pub fn search(&self, term: &str) -> String {
        if self.tasks.is_empty() {
            return EMPTY_LIST_MSG.to_string();
        }
        let mut out = String::new();
        let mut count = 1;
        for task in &self.tasks {
            if task.to_string().contains(term) {
                out.push_str(&format!("{}. {}\n", count, task));
                count += 1;
            }
        }
        if out.is_empty() {
            return NO_MATCH_MSG.to_string();
        }
        out
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only view for the storage layer.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }
}
