// Typed recoverable errors surfaced to the interactive loop.
//
// Every variant carries the exact message the loop prints; the caller
// displays it and keeps running. Infrastructure failures (IO, config
// parsing) go through `anyhow` instead.
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListoError {
    /// The input token does not match any known command word.
    #[error("Sorry, I don't understand...")]
    UnrecognizedCommand,

    /// The index text was non-numeric or outside `[1, len]`.
    #[error("Sorry, that task number doesn't look right...")]
    InvalidTaskReference,

    /// An add command was missing its description, a clause, or a
    /// parseable date. The message names what was wrong.
    #[error("{0}")]
    MalformedCommand(String),

    /// A status change was requested with a keyword that is neither
    /// `mark` nor `unmark`. Unreachable from the dispatch loop.
    #[error("Unexpected command state, please report this bug.")]
    UnexpectedKeyword,
}
