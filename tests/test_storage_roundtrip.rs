//! Round-trip tests for address book persistence.
//!
//! Saving a populated book and loading it back must preserve every name,
//! phone, and birthday; loading from a path that doesn't exist must yield
//! an empty book rather than a failure.

use contact_book::domain::Name;
use contact_book::models::{AddressBook, Record};
use contact_book::storage;

fn sample_book(contacts: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for i in 0..contacts {
        let mut record = Record::new(Name::new(format!("Contact{}", i)).unwrap());
        record.add_phone(&format!("{:010}", i)).unwrap();
        record.add_phone(&format!("{:010}", i + 1000)).unwrap();
        if i % 2 == 0 {
            record
                .add_birthday(&format!("{:02}.{:02}.1990", (i % 28) + 1, (i % 12) + 1))
                .unwrap();
        }
        book.add_record(record);
    }
    book
}

#[test]
fn test_roundtrip_preserves_names_phones_and_birthdays() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");

    let book = sample_book(7);
    storage::save(&book, &path).unwrap();

    let loaded = storage::load(&path).unwrap();
    assert_eq!(loaded.len(), 7);
    assert_eq!(loaded, book);

    // Spot-check one record in detail
    let record = loaded.find("contact2").unwrap();
    assert_eq!(record.name.as_str(), "Contact2");
    assert_eq!(record.phones.len(), 2);
    assert!(record.find_phone("0000000002").is_some());
    assert_eq!(record.birthday.unwrap().to_string(), "03.03.1990");
}

#[test]
fn test_load_nonexistent_path_yields_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let book = storage::load(&dir.path().join("missing.bin")).unwrap();
    assert!(book.is_empty());
}

#[test]
fn test_save_twice_keeps_only_latest_state() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");

    storage::save(&sample_book(5), &path).unwrap();
    storage::save(&sample_book(2), &path).unwrap();

    assert_eq!(storage::load(&path).unwrap().len(), 2);
}

#[test]
fn test_roundtrip_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("book.bin");

    storage::save(&AddressBook::new(), &path).unwrap();
    assert!(storage::load(&path).unwrap().is_empty());
}
