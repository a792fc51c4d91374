use listo::model::parser;
use listo::model::{DateType, TaskKind};

#[test]
fn test_split_command() {
    assert_eq!(parser::split_command("mark 2"), ("mark", "2"));
    assert_eq!(parser::split_command("list"), ("list", ""));
    assert_eq!(parser::split_command("todo buy milk"), ("todo", "buy milk"));
    assert_eq!(parser::split_command("  todo  buy milk  "), ("todo", "buy milk"));
}

#[test]
fn test_parse_todo() {
    let task = parser::parse_todo("buy milk").unwrap();
    assert_eq!(task.kind, TaskKind::Todo);
    assert_eq!(task.summary, "buy milk");
    assert!(task.due.is_none());
    assert!(task.dtstart.is_none());
}

#[test]
fn test_parse_todo_empty_description_fails() {
    assert!(parser::parse_todo("").is_err());
    assert!(parser::parse_todo("   ").is_err());
}

#[test]
fn test_parse_deadline_with_all_day_date() {
    let task = parser::parse_deadline("return book /by 2026-08-12").unwrap();
    assert_eq!(task.kind, TaskKind::Deadline);
    assert_eq!(task.summary, "return book");
    assert_eq!(task.due, DateType::parse("2026-08-12"));
}

#[test]
fn test_parse_deadline_with_time() {
    let task = parser::parse_deadline("submit report /by 2026-08-12 14:00").unwrap();
    match task.due {
        Some(DateType::Specific(_)) => {}
        other => panic!("expected a specific time, got {:?}", other),
    }
}

#[test]
fn test_parse_deadline_rejects_bad_shapes() {
    assert!(parser::parse_deadline("return book").is_err());
    assert!(parser::parse_deadline("return book /by").is_err());
    assert!(parser::parse_deadline("return book /by next tuesday").is_err());
    assert!(parser::parse_deadline("/by 2026-08-12").is_err());
}

#[test]
fn test_parse_event() {
    let task = parser::parse_event("team offsite /from 2026-09-01 /to 2026-09-03").unwrap();
    assert_eq!(task.kind, TaskKind::Event);
    assert_eq!(task.summary, "team offsite");
    assert_eq!(task.dtstart, DateType::parse("2026-09-01"));
    assert_eq!(task.due, DateType::parse("2026-09-03"));
}

#[test]
fn test_parse_event_with_times() {
    let task =
        parser::parse_event("project meeting /from 2026-08-12 14:00 /to 2026-08-12 16:00").unwrap();
    assert_eq!(task.dtstart, DateType::parse("2026-08-12 14:00"));
    assert_eq!(task.due, DateType::parse("2026-08-12 16:00"));
}

#[test]
fn test_parse_event_requires_both_clauses() {
    assert!(parser::parse_event("offsite /from 2026-09-01").is_err());
    assert!(parser::parse_event("offsite /to 2026-09-03").is_err());
    assert!(parser::parse_event("offsite").is_err());
}

#[test]
fn test_date_rendering_round_trip() {
    assert_eq!(
        DateType::parse("2026-08-12").unwrap().to_string(),
        "2026-08-12"
    );
    assert_eq!(
        DateType::parse("2026-08-12 14:00").unwrap().to_string(),
        "2026-08-12 14:00"
    );
}
