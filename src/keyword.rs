// Command words recognized by the interactive loop.
use crate::error::ListoError;
use strum::{EnumIter, IntoEnumIterator};

/// Closed set of command words. Resolution is exact and case-sensitive;
/// the dispatch layer hands over a clean, already-split token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Keyword {
    Exit,
    Mark,
    Unmark,
    List,
    AddTodo,
    AddDeadline,
    AddEvent,
    Delete,
    Find,
}

impl Keyword {
    /// The input word bound to this command.
    pub fn input_key(self) -> &'static str {
        match self {
            Keyword::Exit => "bye",
            Keyword::Mark => "mark",
            Keyword::Unmark => "unmark",
            Keyword::List => "list",
            Keyword::AddTodo => "todo",
            Keyword::AddDeadline => "deadline",
            Keyword::AddEvent => "event",
            Keyword::Delete => "delete",
            Keyword::Find => "find",
        }
    }

    /// Resolve an input token against the fixed table of command words.
    pub fn resolve(input_key: &str) -> Result<Keyword, ListoError> {
        Keyword::iter()
            .find(|k| k.input_key() == input_key)
            .ok_or(ListoError::UnrecognizedCommand)
    }
}

/// The two status mutations a task supports. `TaskList::set_status` takes
/// this instead of a raw `Keyword`, so an out-of-range keyword cannot reach
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusChange {
    Mark,
    Unmark,
}

impl TryFrom<Keyword> for StatusChange {
    type Error = ListoError;

    fn try_from(keyword: Keyword) -> Result<Self, ListoError> {
        match keyword {
            Keyword::Mark => Ok(StatusChange::Mark),
            Keyword::Unmark => Ok(StatusChange::Unmark),
            _ => Err(ListoError::UnexpectedKeyword),
        }
    }
}
