//! Immutable divination records.
//!
//! The assembler stamps a fresh UUID and timestamp onto a computed reading
//! plus caller-supplied metadata. It copies the metadata verbatim (input
//! validation happened (or didn't) upstream) and performs no I/O. The AI
//! reading and notes are attached later by whoever owns persistence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chamber::{Chamber, ChamberOutcome, ThreePalaces};
use crate::overrides::ElementOverrides;
use crate::symbol::Symbol;

/// Lunar time metadata for a calendar-based cast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInfo {
    /// Display text of the lunar date, e.g. `正月初一`.
    pub lunar_date: String,
    /// Double-hour bucket, 0-11 (0 = 子时, 23:00-01:00).
    pub hour_bucket: u8,
    /// Lunar month, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lunar_month: Option<u32>,
}

/// Caller-supplied metadata for assembling a record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMeta {
    /// Whether the cast came from the calendar (true) or from numbers.
    pub time_based: bool,
    /// Lunar time info for calendar casts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_info: Option<TimeInfo>,
    /// The three numbers for numbers casts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numbers: Option<[u32; 3]>,
    /// The question the caster asked, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

/// A persisted divination event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationRecord {
    /// Unique record id.
    pub id: Uuid,
    /// When the record was assembled.
    pub timestamp: DateTime<Utc>,
    /// The primary outcome. For a three-chamber reading this is always the
    /// Human chamber, the "main" outcome of the traditional method.
    pub primary: ChamberOutcome,
    /// The full three-chamber reading, when one was computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palaces: Option<ThreePalaces>,
    /// Cast metadata.
    #[serde(flatten)]
    pub meta: RecordMeta,
    /// Free-form notes, attached after the fact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Model-generated narrative reading, attached after the fact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_reading: Option<String>,
}

impl DivinationRecord {
    /// Assemble a record from a three-chamber reading.
    pub fn assemble(palaces: ThreePalaces, meta: RecordMeta) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            primary: palaces.human.clone(),
            palaces: Some(palaces),
            meta,
            notes: None,
            ai_reading: None,
        }
    }

    /// Assemble a legacy single-symbol record.
    ///
    /// The symbol is read as a Human-chamber outcome with its table
    /// attributes and the given overrides applied.
    pub fn assemble_single(
        symbol: Symbol,
        overrides: &ElementOverrides,
        meta: RecordMeta,
    ) -> Self {
        let primary = ChamberOutcome {
            chamber: Chamber::Human,
            symbol,
            element: overrides.element_of(symbol),
            palace_position: symbol.palace_position(),
            guardian: symbol.guardian_spirit(),
            kinship: symbol.kinship(),
            description: format!("{}: {}", symbol.name_zh(), symbol.verse()),
        };
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            primary,
            palaces: None,
            meta,
            notes: None,
            ai_reading: None,
        }
    }

    /// Epoch milliseconds of the assembly time (the storage contract's
    /// timestamp representation).
    pub fn timestamp_millis(&self) -> i64 {
        self.timestamp.timestamp_millis()
    }
}
