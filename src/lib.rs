//! Contact Book - a line-oriented address book assistant with
//! upcoming-birthday reminders.
//!
//! Contacts (name, phones, optional birthday) live in memory, persist to a
//! binary file between sessions, and can be queried for birthdays falling
//! in the next week, with weekend dates shifted to the following Monday.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the contact record and the address book
//! - **storage**: binary (de)serialization of the whole book
//! - **repl**: the command loop, parser, and handlers
//! - **error**: custom error types for precise error handling
//! - **config**: configuration from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;
pub mod storage;

pub use config::Config;
pub use domain::{Birthday, Name, Phone, ValidationError};
pub use error::{CommandError, ConfigError, StorageError};
pub use models::{AddressBook, Record, UpcomingBirthday};
pub use repl::Command;
