//! Command implementations.

pub mod cast;
pub mod history;
pub mod now;
pub mod prompt;
pub mod show;
pub mod time;

use std::path::Path;

use colored::Colorize;
use uuid::Uuid;

use lr_core::DivinationRecord;
use lr_store::HistoryStore;

use crate::render;

/// Open the history store.
pub fn open_store(db: &Path, passphrase: &str) -> Result<HistoryStore, String> {
    HistoryStore::open(db, passphrase)
        .map_err(|e| format!("cannot open history at {}: {e}", db.display()))
}

/// Parse a record id.
pub fn parse_id(id: &str) -> Result<Uuid, String> {
    Uuid::parse_str(id).map_err(|_| format!("not a record id: \"{id}\""))
}

/// Print a fresh reading and save it unless asked not to.
pub fn finish(
    record: &DivinationRecord,
    no_save: bool,
    db: &Path,
    passphrase: &str,
) -> Result<(), String> {
    render::print_record(record);

    if !no_save {
        let store = open_store(db, passphrase)?;
        store
            .insert(record)
            .map_err(|e| format!("could not save record: {e}"))?;
        println!("{}", format!("saved {}", record.id).dimmed());
    }
    Ok(())
}
