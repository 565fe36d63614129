//! On-disk persistence for the address book.
//!
//! The whole book round-trips through one binary file: a single blocking
//! read at startup, a single blocking write at shutdown (plus any explicit
//! `save` commands in between).

use crate::error::StorageResult;
use crate::models::AddressBook;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Default file name for the persisted address book.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.bin";

/// Serialize the entire book to `path`, overwriting any existing file.
pub fn save(book: &AddressBook, path: &Path) -> StorageResult<()> {
    let bytes = bincode::serde::encode_to_vec(book, bincode::config::standard())?;
    fs::write(path, &bytes)?;
    debug!(
        "Saved {} contacts ({} bytes) to {}",
        book.len(),
        bytes.len(),
        path.display()
    );
    Ok(())
}

/// Deserialize the book from `path`.
///
/// A missing file yields a fresh empty book; any other read or decode
/// failure is returned for the caller to handle.
pub fn load(path: &Path) -> StorageResult<AddressBook> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("No address book at {}, starting empty", path.display());
            return Ok(AddressBook::new());
        }
        Err(e) => return Err(e.into()),
    };

    let (book, _) = bincode::serde::decode_from_slice(&bytes, bincode::config::standard())?;
    Ok(book)
}
