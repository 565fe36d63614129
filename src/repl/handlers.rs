//! Command handlers.
//!
//! Every handler returns `Result<String, CommandError>`; [`dispatch`]
//! converts failures into their user-facing strings, so nothing here ever
//! terminates the process.

use crate::error::{CommandError, CommandResult};
use crate::models::{AddressBook, Record};
use crate::domain::{Name, Phone};
use crate::storage;
use chrono::Local;
use std::path::Path;

use super::Command;

const ADD_USAGE: &str = "add [name] [phone]";
const CHANGE_USAGE: &str = "change [name] [new phone]";
const PHONE_USAGE: &str = "phone [name]";
const DELETE_USAGE: &str = "delete [name]";
const ADD_BIRTHDAY_USAGE: &str = "add-birthday [name] [DD.MM.YYYY]";
const SHOW_BIRTHDAY_USAGE: &str = "show-birthday [name]";

const HELP_TEXT: &str = "How can I help you? You can 'add', 'change' or 'delete' contacts,\n\
    see 'all' contacts, or the 'phone' of a specific contact,\n\
    'add-birthday', 'show-birthday' or see all upcoming 'birthdays'.\n\
    'save' stores the book right away; 'exit' or 'close' saves and leaves.";

/// Route a parsed command to its handler and flatten the outcome into the
/// line printed back to the user.
pub fn dispatch(
    command: Command,
    args: &[String],
    book: &mut AddressBook,
    book_path: &Path,
) -> String {
    let result = match command {
        Command::Hello => Ok(HELP_TEXT.to_string()),
        Command::Add => add_contact(args, book),
        Command::Change => change_contact(args, book),
        Command::All => show_all(book),
        Command::Phone => show_phone(args, book),
        Command::Delete => delete_contact(args, book),
        Command::AddBirthday => add_birthday(args, book),
        Command::ShowBirthday => show_birthday(args, book),
        Command::Birthdays => birthdays(book),
        Command::Save => save_book(book, book_path),
        Command::Exit => Ok("Good bye!".to_string()),
    };

    result.unwrap_or_else(|e| e.to_string())
}

fn add_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, phone] = args else {
        return Err(CommandError::Usage(ADD_USAGE));
    };
    if book.find(name).is_some() {
        return Err(CommandError::DuplicateName(name.clone()));
    }

    let mut record = Record::new(Name::new(name.as_str())?);
    record.add_phone(phone)?;
    book.add_record(record);
    Ok("Contact added".to_string())
}

fn change_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, new_phone] = args else {
        return Err(CommandError::Usage(CHANGE_USAGE));
    };
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    let first = record.phones.first().map(|p| p.as_str().to_string());
    match first {
        Some(old) => record.edit_phone(&old, new_phone)?,
        None => record.add_phone(new_phone)?,
    }
    Ok(format!("Contact {} updated", record.name))
}

fn show_all(book: &AddressBook) -> CommandResult {
    if book.is_empty() {
        return Ok("No contacts found.".to_string());
    }

    let lines: Vec<String> = book
        .records()
        .map(|record| format!("{}: {}", record.name, joined_phones(record)))
        .collect();
    Ok(lines.join("\n"))
}

fn show_phone(args: &[String], book: &AddressBook) -> CommandResult {
    let [name] = args else {
        return Err(CommandError::Usage(PHONE_USAGE));
    };
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    Ok(format!(
        "{}'s number(s): {}",
        record.name,
        joined_phones(record)
    ))
}

fn delete_contact(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name] = args else {
        return Err(CommandError::Usage(DELETE_USAGE));
    };
    let removed = book
        .delete(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;
    Ok(format!("Contact {} deleted", removed.name))
}

fn add_birthday(args: &[String], book: &mut AddressBook) -> CommandResult {
    let [name, date] = args else {
        return Err(CommandError::Usage(ADD_BIRTHDAY_USAGE));
    };
    let record = book
        .find_mut(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    record.add_birthday(date)?;
    Ok(format!("Birthday for {} set to {}", name, date))
}

fn show_birthday(args: &[String], book: &AddressBook) -> CommandResult {
    let [name] = args else {
        return Err(CommandError::Usage(SHOW_BIRTHDAY_USAGE));
    };
    let record = book
        .find(name)
        .ok_or_else(|| CommandError::NotFound(name.clone()))?;

    match &record.birthday {
        Some(birthday) => Ok(format!("{}'s birthday is {}", name, birthday)),
        None => Ok(format!("{} does not have a birthday set.", name)),
    }
}

fn birthdays(book: &AddressBook) -> CommandResult {
    let today = Local::now().date_naive();
    let upcoming = book.upcoming_birthdays(today);
    if upcoming.is_empty() {
        return Ok("No birthdays in the next 7 days.".to_string());
    }

    let lines: Vec<String> = upcoming.iter().map(ToString::to_string).collect();
    Ok(format!("Upcoming birthdays:\n{}", lines.join("\n")))
}

fn save_book(book: &AddressBook, book_path: &Path) -> CommandResult {
    storage::save(book, book_path)?;
    Ok("Address book saved".to_string())
}

fn joined_phones(record: &Record) -> String {
    record
        .phones
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
