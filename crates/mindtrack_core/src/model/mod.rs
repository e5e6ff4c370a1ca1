//! Read-only input records.
//!
//! # Responsibility
//! - Define the mood/journal/thought record shapes the engine consumes.
//! - Keep decoding tolerant so one bad field never rejects a record.

pub(crate) mod lenient;
pub mod records;

pub use records::{JournalEntry, MoodEntry, RecordId, ThoughtRecord, MAX_INTENSITY};
