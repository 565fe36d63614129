//! Data structures for the address book and its records.

pub mod book;
pub mod record;

pub use book::{AddressBook, UpcomingBirthday};
pub use record::Record;
