//! SQLite-backed record store.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension, params};
use uuid::Uuid;

use lr_core::DivinationRecord;

use crate::cipher::FieldCipher;
use crate::error::StoreResult;

/// The persisted divination history.
///
/// Structured data lands in a JSON column; the query, notes, and AI-reading
/// texts are stripped before serialization and stored as separate encrypted
/// blobs, reinjected on read. Absent fields stay absent through a round trip.
pub struct HistoryStore {
    conn: Connection,
    cipher: FieldCipher,
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS divination_history (
    id         TEXT PRIMARY KEY,
    timestamp  INTEGER NOT NULL,
    record     TEXT NOT NULL,
    query      BLOB,
    notes      BLOB,
    ai_reading BLOB
)";

impl HistoryStore {
    /// Open (or create) a store at the given path.
    pub fn open(path: &Path, passphrase: &str) -> StoreResult<Self> {
        Self::with_connection(Connection::open(path)?, passphrase)
    }

    /// Open an in-memory store (useful in tests).
    pub fn open_in_memory(passphrase: &str) -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?, passphrase)
    }

    fn with_connection(conn: Connection, passphrase: &str) -> StoreResult<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self {
            conn,
            cipher: FieldCipher::from_passphrase(passphrase),
        })
    }

    /// Insert a record.
    pub fn insert(&self, record: &DivinationRecord) -> StoreResult<()> {
        let (json, query, notes, ai_reading) = self.split(record)?;
        self.conn.execute(
            "INSERT INTO divination_history (id, timestamp, record, query, notes, ai_reading)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                record.id.to_string(),
                record.timestamp_millis(),
                json,
                query,
                notes,
                ai_reading
            ],
        )?;
        Ok(())
    }

    /// Replace a stored record (e.g. after attaching an AI reading or notes).
    pub fn update(&self, record: &DivinationRecord) -> StoreResult<()> {
        let (json, query, notes, ai_reading) = self.split(record)?;
        self.conn.execute(
            "UPDATE divination_history
             SET timestamp = ?2, record = ?3, query = ?4, notes = ?5, ai_reading = ?6
             WHERE id = ?1",
            params![
                record.id.to_string(),
                record.timestamp_millis(),
                json,
                query,
                notes,
                ai_reading
            ],
        )?;
        Ok(())
    }

    /// Fetch a record by id.
    pub fn get(&self, id: Uuid) -> StoreResult<Option<DivinationRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT record, query, notes, ai_reading
                 FROM divination_history WHERE id = ?1",
                params![id.to_string()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, Option<Vec<u8>>>(1)?,
                        row.get::<_, Option<Vec<u8>>>(2)?,
                        row.get::<_, Option<Vec<u8>>>(3)?,
                    ))
                },
            )
            .optional()?;

        match row {
            Some((json, query, notes, ai_reading)) => {
                Ok(Some(self.join(&json, query, notes, ai_reading)?))
            }
            None => Ok(None),
        }
    }

    /// Fetch all records, newest first.
    pub fn all(&self) -> StoreResult<Vec<DivinationRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT record, query, notes, ai_reading
             FROM divination_history ORDER BY timestamp DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, Option<Vec<u8>>>(1)?,
                row.get::<_, Option<Vec<u8>>>(2)?,
                row.get::<_, Option<Vec<u8>>>(3)?,
            ))
        })?;

        let mut records = Vec::new();
        for row in rows {
            let (json, query, notes, ai_reading) = row?;
            records.push(self.join(&json, query, notes, ai_reading)?);
        }
        Ok(records)
    }

    /// Number of stored records.
    pub fn len(&self) -> StoreResult<usize> {
        let count: i64 =
            self.conn
                .query_row("SELECT COUNT(*) FROM divination_history", [], |row| {
                    row.get(0)
                })?;
        Ok(count as usize)
    }

    /// Whether the store has no records.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Delete every record.
    pub fn clear(&self) -> StoreResult<()> {
        self.conn.execute("DELETE FROM divination_history", [])?;
        Ok(())
    }

    /// Strip the sensitive fields and seal them separately.
    #[allow(clippy::type_complexity)]
    fn split(
        &self,
        record: &DivinationRecord,
    ) -> StoreResult<(String, Option<Vec<u8>>, Option<Vec<u8>>, Option<Vec<u8>>)> {
        let mut stripped = record.clone();
        stripped.meta.query = None;
        stripped.notes = None;
        stripped.ai_reading = None;
        let json = serde_json::to_string(&stripped)?;

        let seal = |field: &Option<String>| -> StoreResult<Option<Vec<u8>>> {
            field.as_deref().map(|t| self.cipher.seal(t)).transpose()
        };
        Ok((
            json,
            seal(&record.meta.query)?,
            seal(&record.notes)?,
            seal(&record.ai_reading)?,
        ))
    }

    /// Rebuild a record from its JSON body and sealed fields.
    fn join(
        &self,
        json: &str,
        query: Option<Vec<u8>>,
        notes: Option<Vec<u8>>,
        ai_reading: Option<Vec<u8>>,
    ) -> StoreResult<DivinationRecord> {
        let mut record: DivinationRecord = serde_json::from_str(json)?;
        record.meta.query = query.map(|b| self.cipher.open(&b)).transpose()?;
        record.notes = notes.map(|b| self.cipher.open(&b)).transpose()?;
        record.ai_reading = ai_reading.map(|b| self.cipher.open(&b)).transpose()?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lr_core::{DivinationRecord, ElementOverrides, RecordMeta, ThreePalaces};

    fn record(query: Option<&str>) -> DivinationRecord {
        let palaces = ThreePalaces::from_calendar(3, 8, 5, &ElementOverrides::none());
        DivinationRecord::assemble(
            palaces,
            RecordMeta {
                time_based: true,
                time_info: None,
                numbers: None,
                query: query.map(str::to_string),
            },
        )
    }

    #[test]
    fn insert_then_get_roundtrips() {
        let store = HistoryStore::open_in_memory("pw").unwrap();
        let rec = record(Some("出行吉凶"));
        store.insert(&rec).unwrap();
        let back = store.get(rec.id).unwrap().unwrap();
        assert_eq!(back, rec);
    }

    #[test]
    fn absent_optional_fields_stay_absent() {
        let store = HistoryStore::open_in_memory("pw").unwrap();
        let rec = record(None);
        store.insert(&rec).unwrap();
        let back = store.get(rec.id).unwrap().unwrap();
        assert_eq!(back.meta.query, None);
        assert_eq!(back.notes, None);
        assert_eq!(back.ai_reading, None);
    }

    #[test]
    fn get_unknown_id_is_none() {
        let store = HistoryStore::open_in_memory("pw").unwrap();
        assert!(store.get(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn all_returns_newest_first() {
        let store = HistoryStore::open_in_memory("pw").unwrap();
        let mut a = record(None);
        let mut b = record(None);
        a.timestamp = chrono_time(1_000);
        b.timestamp = chrono_time(2_000);
        store.insert(&a).unwrap();
        store.insert(&b).unwrap();
        let all = store.all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, b.id);
        assert_eq!(all[1].id, a.id);
    }

    fn chrono_time(millis: i64) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::from_timestamp_millis(millis).unwrap()
    }

    #[test]
    fn update_attaches_the_ai_reading() {
        let store = HistoryStore::open_in_memory("pw").unwrap();
        let mut rec = record(Some("求财"));
        store.insert(&rec).unwrap();

        rec.ai_reading = Some("一、卦象综合解析……".to_string());
        store.update(&rec).unwrap();

        let back = store.get(rec.id).unwrap().unwrap();
        assert_eq!(back.ai_reading.as_deref(), Some("一、卦象综合解析……"));
        assert_eq!(back.meta.query.as_deref(), Some("求财"));
    }

    #[test]
    fn sensitive_fields_are_encrypted_at_rest() {
        let store = HistoryStore::open_in_memory("pw").unwrap();
        let rec = record(Some("very secret question"));
        store.insert(&rec).unwrap();

        // The JSON column must not contain the query; the blob column must
        // not contain it in the clear.
        let (json, blob): (String, Vec<u8>) = store
            .conn
            .query_row(
                "SELECT record, query FROM divination_history WHERE id = ?1",
                params![rec.id.to_string()],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert!(!json.contains("very secret question"));
        let window = b"very secret";
        assert!(!blob.windows(window.len()).any(|w| w == window));
    }

    #[test]
    fn wrong_passphrase_surfaces_as_crypto_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");
        let rec = record(Some("求问"));
        {
            let store = HistoryStore::open(&path, "right").unwrap();
            store.insert(&rec).unwrap();
        }
        let store = HistoryStore::open(&path, "wrong").unwrap();
        assert!(matches!(
            store.get(rec.id),
            Err(crate::error::StoreError::Crypto(_))
        ));
    }

    #[test]
    fn clear_removes_everything() {
        let store = HistoryStore::open_in_memory("pw").unwrap();
        store.insert(&record(None)).unwrap();
        store.insert(&record(None)).unwrap();
        assert_eq!(store.len().unwrap(), 2);
        store.clear().unwrap();
        assert!(store.is_empty().unwrap());
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.db");
        let rec = record(Some("远行"));
        {
            let store = HistoryStore::open(&path, "pw").unwrap();
            store.insert(&rec).unwrap();
        }
        let store = HistoryStore::open(&path, "pw").unwrap();
        let back = store.get(rec.id).unwrap().unwrap();
        assert_eq!(back, rec);
    }
}
