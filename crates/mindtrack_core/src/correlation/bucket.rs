//! Per-emotion aggregate buckets.

use crate::model::{JournalEntry, RecordId, ThoughtRecord};
use crate::taxonomy::CoreEmotion;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Correlation result keyed by core emotion; always holds every core emotion.
pub type CorrelationMap = BTreeMap<CoreEmotion, CorrelationBucket>;

/// Aggregated statistics for one core emotion across all record types.
///
/// Averages are computed over the matched subset only and are `0` when the
/// subset is empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrelationBucket {
    /// Number of matched mood entries.
    pub total_entries: u32,
    /// Matched journal entries, each at most once.
    pub journal_entries: Vec<JournalEntry>,
    /// Matched thought records.
    pub thought_records: Vec<ThoughtRecord>,
    /// Mean intensity of the matched mood entries.
    pub average_intensity: f64,
    /// Mean `after - before` rating change of the matched thought records.
    pub average_improvement: f64,
}

impl CorrelationBucket {
    /// Whether no record of any type landed in this bucket.
    pub fn is_empty(&self) -> bool {
        self.total_entries == 0
            && self.journal_entries.is_empty()
            && self.thought_records.is_empty()
    }
}

/// Returns a map with one zero-valued bucket per core emotion.
pub fn empty_correlation_map() -> CorrelationMap {
    CoreEmotion::ALL
        .into_iter()
        .map(|core| (core, CorrelationBucket::default()))
        .collect()
}

/// Running sums for one bucket while records are folded in.
#[derive(Debug, Default)]
pub(crate) struct BucketAccumulator {
    total_entries: u32,
    intensity_sum: f64,
    journal_entries: Vec<JournalEntry>,
    journal_ids: BTreeSet<RecordId>,
    thought_records: Vec<ThoughtRecord>,
    improvement_sum: f64,
}

impl BucketAccumulator {
    pub(crate) fn add_mood(&mut self, intensity: f64) {
        self.total_entries = self.total_entries.saturating_add(1);
        self.intensity_sum += intensity;
    }

    /// Appends a journal entry unless one with the same id is present.
    pub(crate) fn add_journal(&mut self, entry: &JournalEntry) {
        if self.journal_ids.insert(entry.id) {
            self.journal_entries.push(entry.clone());
        }
    }

    pub(crate) fn add_thought(&mut self, record: &ThoughtRecord) {
        self.improvement_sum += record.rating_delta().unwrap_or(0.0);
        self.thought_records.push(record.clone());
    }

    pub(crate) fn finish(self) -> CorrelationBucket {
        let average_intensity = if self.total_entries == 0 {
            0.0
        } else {
            self.intensity_sum / f64::from(self.total_entries)
        };
        let average_improvement = if self.thought_records.is_empty() {
            0.0
        } else {
            self.improvement_sum / self.thought_records.len() as f64
        };
        CorrelationBucket {
            total_entries: self.total_entries,
            journal_entries: self.journal_entries,
            thought_records: self.thought_records,
            average_intensity,
            average_improvement,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{empty_correlation_map, BucketAccumulator};
    use crate::model::{JournalEntry, ThoughtRecord};
    use crate::taxonomy::CoreEmotion;
    use uuid::Uuid;

    #[test]
    fn empty_map_has_every_core_emotion() {
        let map = empty_correlation_map();
        assert_eq!(map.len(), CoreEmotion::ALL.len());
        assert!(map.values().all(|bucket| bucket.is_empty()));
    }

    #[test]
    fn finish_guards_division_by_zero() {
        let bucket = BucketAccumulator::default().finish();
        assert_eq!(bucket.average_intensity, 0.0);
        assert_eq!(bucket.average_improvement, 0.0);
    }

    #[test]
    fn journal_entries_are_deduplicated_by_id() {
        let mut acc = BucketAccumulator::default();
        let entry = JournalEntry::new(Uuid::new_v4(), "first");
        let mut same_id = JournalEntry::new(entry.id, "edited copy");
        same_id.tags.push("joy".to_string());
        acc.add_journal(&entry);
        acc.add_journal(&same_id);
        let bucket = acc.finish();
        assert_eq!(bucket.journal_entries, vec![entry]);
    }

    #[test]
    fn unrated_thought_records_dilute_the_average() {
        let mut acc = BucketAccumulator::default();
        let mut rated = ThoughtRecord::new(Uuid::new_v4(), "rated");
        rated.belief_before = Some(8.0);
        rated.belief_after = Some(2.0);
        acc.add_thought(&rated);
        acc.add_thought(&ThoughtRecord::new(Uuid::new_v4(), "unrated"));
        let bucket = acc.finish();
        assert_eq!(bucket.thought_records.len(), 2);
        assert_eq!(bucket.average_improvement, -3.0);
    }
}
