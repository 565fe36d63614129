//! Contact record: one name, its phones, and an optional birthday.

use crate::domain::{Birthday, Name, Phone, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// Phones form an ordered sequence and duplicates are permitted unless
/// explicitly removed. At most one birthday can be set; setting it again
/// replaces the previous value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Record {
    /// The contact's name
    pub name: Name,

    /// Phone numbers, in insertion order
    #[serde(default)]
    pub phones: Vec<Phone>,

    /// Birthday, if set
    #[serde(default)]
    pub birthday: Option<Birthday>,
}

impl Record {
    /// Create a new record with no phones and no birthday.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    /// Validate `value` and append it to the phone sequence.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError::InvalidPhone` from [`Phone::new`].
    pub fn add_phone(&mut self, value: &str) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(value)?);
        Ok(())
    }

    /// Remove the first phone equal to `value`; no-op if absent.
    pub fn remove_phone(&mut self, value: &str) {
        if let Some(pos) = self.phones.iter().position(|p| p.as_str() == value) {
            self.phones.remove(pos);
        }
    }

    /// Replace the first phone equal to `old` with a freshly validated `new`.
    ///
    /// No-op if `old` is not present. If `new` fails validation the phone
    /// list is left unchanged.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<(), ValidationError> {
        if let Some(slot) = self.phones.iter_mut().find(|p| p.as_str() == old) {
            *slot = Phone::new(new)?;
        }
        Ok(())
    }

    /// Find the first phone equal to `value`.
    pub fn find_phone(&self, value: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.as_str() == value)
    }

    /// Validate `value` and set it as the birthday, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Propagates `ValidationError::InvalidBirthday` from [`Birthday::new`].
    pub fn add_birthday(&mut self, value: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(value)?);
        Ok(())
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(
            f,
            "Contact name: {}, phones: {}",
            self.name,
            phones.join("; ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> Record {
        Record::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_add_phone() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5551234567").unwrap();
        assert_eq!(rec.phones.len(), 2);
        assert_eq!(rec.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn test_add_phone_invalid_fails() {
        let mut rec = record("Alice");
        assert!(rec.add_phone("123").is_err());
        assert!(rec.phones.is_empty());
    }

    #[test]
    fn test_add_phone_permits_duplicates() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("1234567890").unwrap();
        assert_eq!(rec.phones.len(), 2);
    }

    #[test]
    fn test_remove_phone_first_match_only() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5551234567").unwrap();
        rec.add_phone("1234567890").unwrap();
        rec.remove_phone("1234567890");
        assert_eq!(rec.phones.len(), 2);
        assert_eq!(rec.phones[0].as_str(), "5551234567");
        assert_eq!(rec.phones[1].as_str(), "1234567890");
    }

    #[test]
    fn test_remove_phone_absent_is_noop() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.remove_phone("0000000000");
        assert_eq!(rec.phones.len(), 1);
    }

    #[test]
    fn test_edit_phone() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.edit_phone("1234567890", "5551234567").unwrap();
        assert_eq!(rec.phones[0].as_str(), "5551234567");
    }

    #[test]
    fn test_edit_phone_absent_is_noop() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.edit_phone("0000000000", "5551234567").unwrap();
        assert_eq!(rec.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn test_edit_phone_invalid_new_leaves_list_unchanged() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        assert!(rec.edit_phone("1234567890", "bad").is_err());
        assert_eq!(rec.phones[0].as_str(), "1234567890");
    }

    #[test]
    fn test_find_phone() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        assert_eq!(rec.find_phone("1234567890").unwrap().as_str(), "1234567890");
        assert!(rec.find_phone("0000000000").is_none());
    }

    #[test]
    fn test_add_birthday_replaces_previous() {
        let mut rec = record("Alice");
        rec.add_birthday("24.06.1990").unwrap();
        rec.add_birthday("01.01.1991").unwrap();
        assert_eq!(rec.birthday.unwrap().to_string(), "01.01.1991");
    }

    #[test]
    fn test_add_birthday_invalid_fails() {
        let mut rec = record("Alice");
        assert!(rec.add_birthday("31.02.2024").is_err());
        assert!(rec.birthday.is_none());
    }

    #[test]
    fn test_display() {
        let mut rec = record("Alice");
        rec.add_phone("1234567890").unwrap();
        rec.add_phone("5551234567").unwrap();
        assert_eq!(
            rec.to_string(),
            "Contact name: Alice, phones: 1234567890; 5551234567"
        );
    }

    #[test]
    fn test_display_no_phones() {
        assert_eq!(record("Alice").to_string(), "Contact name: Alice, phones: ");
    }
}
