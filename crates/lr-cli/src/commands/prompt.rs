use std::path::Path;

use lr_reading::{SYSTEM_ROLE, llm_prompt};

pub fn run(id: &str, roles: bool, db: &Path, passphrase: &str) -> Result<(), String> {
    let store = super::open_store(db, passphrase)?;
    let id = super::parse_id(id)?;
    let record = store
        .get(id)
        .map_err(|e| e.to_string())?
        .ok_or_else(|| format!("no record with id {id}"))?;

    if roles {
        println!("# system\n{SYSTEM_ROLE}\n");
        println!("# user");
    }
    println!("{}", llm_prompt(&record));
    Ok(())
}
