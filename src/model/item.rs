// File: ./src/model/item.rs
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a date carries a clock time or covers the whole day.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum DateType {
    AllDay(NaiveDate),
    Specific(NaiveDateTime),
}

impl DateType {
    /// Parses "YYYY-MM-DD" or "YYYY-MM-DD HH:MM".
    pub fn parse(text: &str) -> Option<DateType> {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M") {
            return Some(DateType::Specific(dt));
        }
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .map(DateType::AllDay)
    }
}

impl fmt::Display for DateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateType::AllDay(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateType::Specific(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TaskKind {
    Todo,
    Deadline,
    Event,
}

impl TaskKind {
    fn tag(self) -> &'static str {
        match self {
            TaskKind::Todo => "[T]",
            TaskKind::Deadline => "[D]",
            TaskKind::Event => "[E]",
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum TaskStatus {
    NeedsAction,
    Completed,
}

impl TaskStatus {
    pub fn is_done(self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

/// One entry in the list. Identity is positional; there is no stable id.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub summary: String,
    pub kind: TaskKind,
    pub status: TaskStatus,
    /// Deadline "by" date, or the end of an event.
    pub due: Option<DateType>,
    /// Start of an event.
    pub dtstart: Option<DateType>,
}

impl Task {
    pub fn todo(summary: &str) -> Self {
        Self {
            summary: summary.to_string(),
            kind: TaskKind::Todo,
            status: TaskStatus::NeedsAction,
            due: None,
            dtstart: None,
        }
    }

    pub fn deadline(summary: &str, by: DateType) -> Self {
        Self {
            summary: summary.to_string(),
            kind: TaskKind::Deadline,
            status: TaskStatus::NeedsAction,
            due: Some(by),
            dtstart: None,
        }
    }

    pub fn event(summary: &str, from: DateType, to: DateType) -> Self {
        Self {
            summary: summary.to_string(),
            kind: TaskKind::Event,
            status: TaskStatus::NeedsAction,
            due: Some(to),
            dtstart: Some(from),
        }
    }

    pub fn mark_done(&mut self) {
        self.status = TaskStatus::Completed;
    }

    pub fn mark_not_done(&mut self) {
        self.status = TaskStatus::NeedsAction;
    }

    fn checkbox_symbol(&self) -> &'static str {
        match self.status {
            TaskStatus::Completed => "[✔]",
            TaskStatus::NeedsAction => "[ ]",
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}",
            self.kind.tag(),
            self.checkbox_symbol(),
            self.summary
        )?;
        match self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline => {
                if let Some(due) = &self.due {
                    write!(f, " (by: {})", due)?;
                }
            }
            TaskKind::Event => {
                if let (Some(from), Some(to)) = (&self.dtstart, &self.due) {
                    write!(f, " (from: {} to: {})", from, to)?;
                }
            }
        }
        Ok(())
    }
}
