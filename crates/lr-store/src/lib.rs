//! Encrypted local history for divination records.
//!
//! One SQLite row per record, keyed by id. Structured fields are stored as
//! plain JSON; the three free-text fields (query, notes, AI reading) are
//! sealed with ChaCha20-Poly1305 and only ever touch disk as ciphertext.

pub mod cipher;
pub mod error;
pub mod store;

pub use cipher::FieldCipher;
pub use error::{StoreError, StoreResult};
pub use store::HistoryStore;
