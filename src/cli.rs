// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "Listo v{} - A simple, fast and elegant task / TODO list manager (CLI)",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [--root <path>]", binary_name);
    println!("    {} export", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("OPTIONS:");
    println!("    -r, --root <path>     Use a different directory for config and data.");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("INTERACTIVE COMMANDS:");
    println!("    list                          Show every task");
    println!("    todo <desc>                   Add a plain todo");
    println!("    deadline <desc> /by <date>    Add a task with a due date");
    println!("    event <desc> /from <date> /to <date>");
    println!("                                  Add an event with a start and end");
    println!("    mark <n>                      Mark task n as done");
    println!("    unmark <n>                    Mark task n as not done yet");
    println!("    delete <n>                    Remove task n");
    println!("    find <text>                   Show tasks containing <text>");
    println!("    bye                           Save and quit");
    println!();
    println!("DATES:");
    println!("    2026-08-12                    All-day");
    println!("    2026-08-12 14:00              Specific time");
    println!();
    println!("EXPORT COMMAND:");
    println!(
        "    {} export > backup.json       Dump the task file to stdout",
        binary_name
    );
    println!();
    println!("MORE INFO:");
    println!("    Repository: https://codeberg.org/trougnouf/listo");
    println!("    License:    GPL-3.0");
}
