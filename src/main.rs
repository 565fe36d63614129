//! Contact Book - Main entry point
//!
//! Loads the persisted address book, runs the command loop, and saves the
//! book on the way out.

use anyhow::Result;
use contact_book::models::AddressBook;
use contact_book::{repl, storage, Config};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Initialize logging (stderr only to keep stdout clean for the prompt)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Load the persisted book, or start empty. A corrupt or unreadable file
    // is downgraded to a warning so one bad byte doesn't lock the user out.
    let mut book = match storage::load(&config.book_path) {
        Ok(book) => {
            info!(
                "Loaded {} contacts from {}",
                book.len(),
                config.book_path.display()
            );
            book
        }
        Err(e) => {
            warn!(
                "Failed to load address book from {}: {}; starting with an empty book",
                config.book_path.display(),
                e
            );
            AddressBook::new()
        }
    };

    repl::run(&mut book, &config.book_path)?;

    // Save on exit so nothing typed this session is lost
    storage::save(&book, &config.book_path)?;
    info!("Address book saved to {}", config.book_path.display());

    Ok(())
}
