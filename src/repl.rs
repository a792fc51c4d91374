// File: src/repl.rs
// Interactive console loop: reads command lines, dispatches them to the
// task list, and prints the outcome.
//
// All dispatch logic lives in `handle_line`, which is pure over the list
// and the input line; `run` is the IO shell around it (stdin, prompt,
// persistence).
use crate::config::Config;
use crate::context::AppContext;
use crate::error::ListoError;
use crate::keyword::{Keyword, StatusChange};
use crate::model::parser;
use crate::storage::LocalStorage;
use crate::tasklist::TaskList;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// What the loop should do after a command.
#[derive(Debug)]
pub enum Outcome {
    /// Print the message; `mutated` tells the loop whether the list
    /// changed and needs saving.
    Reply { message: String, mutated: bool },
    /// Save and stop reading.
    Exit,
}

impl Outcome {
    fn reply(message: String) -> Self {
        Outcome::Reply {
            message,
            mutated: false,
        }
    }

    fn mutation(message: String) -> Self {
        Outcome::Reply {
            message,
            mutated: true,
        }
    }
}

/// Dispatches one input line against the task list.
///
/// Errors are recoverable user errors; the caller prints the message and
/// keeps the loop running. A failed command leaves the list untouched.
pub fn handle_line(list: &mut TaskList, line: &str) -> Result<Outcome, ListoError> {
    let (word, rest) = parser::split_command(line);
    let keyword = Keyword::resolve(word)?;

    let outcome = match keyword {
        Keyword::Exit => Outcome::Exit,
        Keyword::List => Outcome::reply(list.display()),
        Keyword::Find => Outcome::reply(list.search(rest)),
        Keyword::Mark | Keyword::Unmark => {
            let change = StatusChange::try_from(keyword)?;
            let task = list.set_status(rest, change)?;
            let message = match change {
                StatusChange::Mark => {
                    format!("\tNice! I've marked this task as done:\n\t  {}", task)
                }
                StatusChange::Unmark => {
                    format!("\tOK, I've marked this task as not done yet:\n\t  {}", task)
                }
            };
            Outcome::mutation(message)
        }
        Keyword::Delete => {
            let task = list.delete_task(rest)?;
            Outcome::mutation(format!(
                "\tNoted. I've removed this task:\n\t  {}\n\tNow you have {} tasks in the list.",
                task,
                list.len()
            ))
        }
        Keyword::AddTodo | Keyword::AddDeadline | Keyword::AddEvent => {
            let task = match keyword {
                Keyword::AddTodo => parser::parse_todo(rest)?,
                Keyword::AddDeadline => parser::parse_deadline(rest)?,
                _ => parser::parse_event(rest)?,
            };
            let rendered = task.to_string();
            list.add_task(task);
            Outcome::mutation(format!(
                "\tGot it. I've added this task:\n\t  {}\n\tNow you have {} tasks in the list.",
                rendered,
                list.len()
            ))
        }
    };

    Ok(outcome)
}

/// Runs the interactive loop until `bye` or EOF, then saves and returns.
pub fn run(ctx: &dyn AppContext, config: &Config) -> Result<()> {
    let tasks = LocalStorage::load(ctx).unwrap_or_else(|e| {
        log::warn!("Could not load task file, starting empty: {}", e);
        vec![]
    });
    let mut list = TaskList::new(tasks);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("Hello! This is Listo. What can I do for you?");
    if config.list_on_start {
        println!("{}", list.display());
    }

    loop {
        print!("{}", config.prompt);
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like "bye"
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match handle_line(&mut list, line) {
            Ok(Outcome::Exit) => break,
            Ok(Outcome::Reply { message, mutated }) => {
                println!("{}", message);
                if mutated
                    && config.save_on_change
                    && let Err(e) = LocalStorage::save(ctx, list.tasks())
                {
                    log::error!("Failed to save task file: {}", e);
                    println!("\tWarning: your changes could not be saved.");
                }
            }
            Err(e) => println!("\t{}", e),
        }
    }

    LocalStorage::save(ctx, list.tasks())?;
    println!("Bye. Hope to see you again soon!");
    Ok(())
}
