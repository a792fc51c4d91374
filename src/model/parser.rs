// File: src/model/parser.rs
// Turns command lines into command tokens and Task values.
use crate::error::ListoError;
use crate::model::item::{DateType, Task};

/// Splits an input line into its command word and the trimmed remainder.
pub fn split_command(line: &str) -> (&str, &str) {
    let trimmed = line.trim();
    match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    }
}

pub fn parse_todo(rest: &str) -> Result<Task, ListoError> {
    let summary = rest.trim();
    if summary.is_empty() {
        return Err(empty_description("todo"));
    }
    Ok(Task::todo(summary))
}

pub fn parse_deadline(rest: &str) -> Result<Task, ListoError> {
    let (summary, by) = rest.split_once("/by").ok_or_else(|| {
        ListoError::MalformedCommand("A deadline needs '/by <date>'.".to_string())
    })?;
    let summary = summary.trim();
    if summary.is_empty() {
        return Err(empty_description("deadline"));
    }
    let by = parse_date(by)?;
    Ok(Task::deadline(summary, by))
}

pub fn parse_event(rest: &str) -> Result<Task, ListoError> {
    let missing_clause = || {
        ListoError::MalformedCommand(
            "An event needs '/from <date>' and '/to <date>'.".to_string(),
        )
    };
    let (summary, clauses) = rest.split_once("/from").ok_or_else(missing_clause)?;
    let (from, to) = clauses.split_once("/to").ok_or_else(missing_clause)?;
    let summary = summary.trim();
    if summary.is_empty() {
        return Err(empty_description("event"));
    }
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    Ok(Task::event(summary, from, to))
}

fn parse_date(raw: &str) -> Result<DateType, ListoError> {
    let raw = raw.trim();
    DateType::parse(raw).ok_or_else(|| {
        ListoError::MalformedCommand(format!(
            "'{}' is not a date I recognize, try '2026-08-12' or '2026-08-12 14:00'.",
            raw
        ))
    })
}

fn empty_description(kind: &str) -> ListoError {
    ListoError::MalformedCommand(format!("The description of a {} cannot be empty.", kind))
}
