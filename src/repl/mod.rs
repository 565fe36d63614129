//! The read-eval-print loop.
//!
//! One state: awaiting a command. Each iteration reads a line, normalizes
//! the command token, routes it, and prints the reply. The loop terminates
//! on `exit`/`close` or end of input; the caller persists the book after
//! the loop returns.

pub mod commands;
pub mod handlers;

pub use commands::Command;
pub use handlers::dispatch;

use crate::models::AddressBook;
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, BufRead, Write};
use std::path::Path;
use tracing::debug;

static COMMAND_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z-]").expect("Failed to compile command token regex"));

/// Split one input line into a normalized command token and its arguments.
///
/// The command token is lowercased and stripped of everything outside
/// `[a-z-]`; arguments are whitespace-split and kept verbatim.
pub fn parse_input(line: &str) -> (String, Vec<String>) {
    let mut parts = line.split_whitespace();
    let Some(raw) = parts.next() else {
        return (String::new(), Vec::new());
    };

    let command = COMMAND_TOKEN_RE
        .replace_all(&raw.to_lowercase(), "")
        .into_owned();
    (command, parts.map(str::to_string).collect())
}

/// Run the command loop over stdin/stdout until `exit`, `close`, or EOF.
pub fn run(book: &mut AddressBook, book_path: &Path) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();

    println!("Welcome to the assistant bot! Type 'hello' to continue, 'exit/close' to exit");

    loop {
        write!(stdout, "Input a command: ")?;
        stdout.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like exit; the caller saves the book
            debug!("End of input, leaving the command loop");
            break;
        }

        let (token, args) = parse_input(&line);
        if token.is_empty() {
            continue;
        }

        match token.parse::<Command>() {
            Ok(command) => {
                println!("{}", dispatch(command, &args, book, book_path));
                if command == Command::Exit {
                    break;
                }
            }
            Err(()) => println!("Invalid command."),
        }
    }

    Ok(())
}
