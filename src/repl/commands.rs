//! Command vocabulary of the prompt.

use std::str::FromStr;

/// One user command, parsed from the normalized command token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print the help text
    Hello,
    /// Create a contact with one phone
    Add,
    /// Replace a contact's first phone (or add one if none exist)
    Change,
    /// List every contact
    All,
    /// Show a contact's phones
    Phone,
    /// Remove a contact
    Delete,
    /// Set a contact's birthday
    AddBirthday,
    /// Show a contact's birthday
    ShowBirthday,
    /// Report birthdays in the next 7 days
    Birthdays,
    /// Persist the book immediately
    Save,
    /// Save and leave
    Exit,
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "all" => Ok(Command::All),
            "phone" => Ok(Command::Phone),
            "delete" => Ok(Command::Delete),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "save" => Ok(Command::Save),
            "exit" | "close" => Ok(Command::Exit),
            _ => Err(()),
        }
    }
}
