use std::path::Path;

use colored::Colorize;

use crate::render;

pub fn list(limit: usize, db: &Path, passphrase: &str) -> Result<(), String> {
    let store = super::open_store(db, passphrase)?;
    let mut records = store.all().map_err(|e| e.to_string())?;

    if records.is_empty() {
        println!("  No records yet.");
        return Ok(());
    }

    let total = records.len();
    records.truncate(limit);

    println!("{}", render::history_table(&records));
    println!();
    if records.len() < total {
        println!("  showing {} of {total} records", records.len());
    } else {
        println!("  {total} records");
    }
    Ok(())
}

pub fn show(id: &str, db: &Path, passphrase: &str) -> Result<(), String> {
    let store = super::open_store(db, passphrase)?;
    let id = super::parse_id(id)?;
    let record = store
        .get(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("no record with id {id}"))?;

    println!(
        "  {} {}",
        record.id.to_string().dimmed(),
        record.timestamp.format("%Y-%m-%d %H:%M:%S")
    );
    println!();
    render::print_record(&record);
    Ok(())
}

pub fn clear(yes: bool, db: &Path, passphrase: &str) -> Result<(), String> {
    if !yes {
        return Err("refusing to clear history without --yes".to_string());
    }
    let store = super::open_store(db, passphrase)?;
    let count = store.len().map_err(|e| e.to_string())?;
    store.clear().map_err(|e| e.to_string())?;
    println!("  cleared {count} records");
    Ok(())
}
