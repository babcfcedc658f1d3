//! Narrative output for divination records.
//!
//! Two surfaces: an offline markdown reading composed from the record's own
//! tables, and the prompt text handed to a language model when the caller
//! wants a richer narration. Both are pure string generation; the network
//! call (if any) belongs to the caller.

pub mod compose;
pub mod prompt;

pub use compose::{ReadingConfig, Verbosity, compose};
pub use prompt::{SYSTEM_ROLE, llm_prompt};
