use listo::error::ListoError;
use listo::keyword::{Keyword, StatusChange};

#[test]
fn test_resolve_known_keywords() {
    assert_eq!(Keyword::resolve("bye").unwrap(), Keyword::Exit);
    assert_eq!(Keyword::resolve("mark").unwrap(), Keyword::Mark);
    assert_eq!(Keyword::resolve("unmark").unwrap(), Keyword::Unmark);
    assert_eq!(Keyword::resolve("list").unwrap(), Keyword::List);
    assert_eq!(Keyword::resolve("todo").unwrap(), Keyword::AddTodo);
    assert_eq!(Keyword::resolve("deadline").unwrap(), Keyword::AddDeadline);
    assert_eq!(Keyword::resolve("event").unwrap(), Keyword::AddEvent);
    assert_eq!(Keyword::resolve("delete").unwrap(), Keyword::Delete);
    assert_eq!(Keyword::resolve("find").unwrap(), Keyword::Find);
}

#[test]
fn test_resolve_unknown_fails() {
    assert_eq!(
        Keyword::resolve("frobnicate"),
        Err(ListoError::UnrecognizedCommand)
    );
    assert_eq!(Keyword::resolve(""), Err(ListoError::UnrecognizedCommand));
}

#[test]
fn test_resolve_is_case_sensitive() {
    assert!(Keyword::resolve("Mark").is_err());
    assert!(Keyword::resolve("MARK").is_err());
}

#[test]
fn test_resolve_does_not_trim() {
    // The caller is responsible for producing a clean token.
    assert!(Keyword::resolve(" mark").is_err());
    assert!(Keyword::resolve("mark ").is_err());
}

#[test]
fn test_resolve_rejects_partial_match() {
    assert!(Keyword::resolve("mar").is_err());
    assert!(Keyword::resolve("marked").is_err());
}

#[test]
fn test_status_change_from_keyword() {
    assert_eq!(
        StatusChange::try_from(Keyword::Mark).unwrap(),
        StatusChange::Mark
    );
    assert_eq!(
        StatusChange::try_from(Keyword::Unmark).unwrap(),
        StatusChange::Unmark
    );
    assert_eq!(
        StatusChange::try_from(Keyword::List),
        Err(ListoError::UnexpectedKeyword)
    );
    assert_eq!(
        StatusChange::try_from(Keyword::Delete),
        Err(ListoError::UnexpectedKeyword)
    );
}
