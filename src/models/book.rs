//! The address book: every record, keyed by case-insensitive name.

use crate::models::Record;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::birthday::DATE_FORMAT;

/// An upcoming birthday, already shifted off weekends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    /// The contact's name, as stored on the record
    pub name: String,

    /// The congratulation date (Monday if the occurrence fell on a weekend)
    pub date: NaiveDate,
}

impl fmt::Display for UpcomingBirthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.name, self.date.format(DATE_FORMAT))
    }
}

/// The collection of all contact records.
///
/// Keyed by the lowercased name, so there is at most one record per
/// case-insensitive name and iteration yields records in case-insensitive
/// name order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AddressBook {
    records: BTreeMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its lowercased name key.
    ///
    /// Silently overwrites an existing record with the same key; duplicate
    /// checks belong to callers.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name.key(), record);
    }

    /// Case-insensitive lookup.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(&name.to_lowercase())
    }

    /// Case-insensitive mutable lookup.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(&name.to_lowercase())
    }

    /// Case-insensitive removal. Returns the removed record, if any.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.remove(&name.to_lowercase())
    }

    /// Records in case-insensitive name order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays occurring 1-7 days from `today` (exclusive of today,
    /// inclusive of day 7), with weekend occurrences shifted to the
    /// following Monday.
    ///
    /// The window test uses the unshifted occurrence; only the reported
    /// date is shifted.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.records
            .values()
            .filter_map(|record| {
                let birthday = record.birthday.as_ref()?;
                let occurrence = birthday.next_occurrence(today);
                let days_until = (occurrence - today).num_days();
                if (1..=7).contains(&days_until) {
                    Some(UpcomingBirthday {
                        name: record.name.as_str().to_string(),
                        date: birthday.congratulation_date(today),
                    })
                } else {
                    None
                }
            })
            .collect()
    }
}
