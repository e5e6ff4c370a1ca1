//! Cross-entity correlator.
//!
//! # Responsibility
//! - Join mood entries, journal entries and thought records through the
//!   taxonomy into one bucket per core emotion.
//! - Derive per-bucket averages.
//!
//! # Invariants
//! - Pure: inputs are never mutated and identical inputs give equal output.
//! - Every core emotion appears in the result, even with zero records.
//! - A malformed record contributes nothing; it never aborts the batch.
//! - A mood entry counts once per distinct core emotion it resolves to.
//! - A journal entry appears at most once per bucket (dedup by id).
//! - A thought record lands in at most one bucket.

use crate::correlation::bucket::{BucketAccumulator, CorrelationMap};
use crate::model::{JournalEntry, MoodEntry, RecordId, ThoughtRecord};
use crate::resolve::{normalize_label, EmotionResolver};
use crate::taxonomy::CoreEmotion;
use log::debug;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Correlation buckets plus labels that could not be resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub buckets: CorrelationMap,
    /// Normalized labels that matched no core emotion.
    pub unresolved_labels: BTreeSet<String>,
}

/// Correlation engine bound to one resolver configuration.
#[derive(Debug, Clone, Default)]
pub struct Correlator {
    resolver: EmotionResolver,
}

impl Correlator {
    pub fn new(resolver: EmotionResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &EmotionResolver {
        &self.resolver
    }

    /// Builds one bucket per core emotion from the three record streams.
    pub fn correlate(
        &self,
        mood_entries: &[MoodEntry],
        journal_entries: &[JournalEntry],
        thought_records: &[ThoughtRecord],
    ) -> CorrelationMap {
        self.correlate_with_report(mood_entries, journal_entries, thought_records)
            .buckets
    }

    /// Same as [`Correlator::correlate`], also reporting unresolved labels.
    pub fn correlate_with_report(
        &self,
        mood_entries: &[MoodEntry],
        journal_entries: &[JournalEntry],
        thought_records: &[ThoughtRecord],
    ) -> CorrelationReport {
        let mut pass = CorrelationPass::new(&self.resolver);

        for entry in mood_entries {
            pass.fold_mood(entry);
        }
        for entry in journal_entries {
            pass.fold_journal(entry);
        }

        let mut mood_index: BTreeMap<RecordId, &MoodEntry> = BTreeMap::new();
        for entry in mood_entries {
            mood_index.entry(entry.id).or_insert(entry);
        }
        for record in thought_records {
            pass.fold_thought(record, &mood_index);
        }

        debug!(
            "event=correlate module=correlation status=ok moods={} moods_matched={} journals={} journals_matched={} thoughts={} thoughts_matched={} unresolved_labels={}",
            mood_entries.len(),
            pass.moods_matched,
            journal_entries.len(),
            pass.journals_matched,
            thought_records.len(),
            pass.thoughts_matched,
            pass.unresolved.len()
        );

        pass.finish()
    }
}

/// Builds buckets with the default resolver.
pub fn correlate(
    mood_entries: &[MoodEntry],
    journal_entries: &[JournalEntry],
    thought_records: &[ThoughtRecord],
) -> CorrelationMap {
    Correlator::default().correlate(mood_entries, journal_entries, thought_records)
}

/// Builds buckets and the unresolved-label report with the default resolver.
pub fn correlate_with_report(
    mood_entries: &[MoodEntry],
    journal_entries: &[JournalEntry],
    thought_records: &[ThoughtRecord],
) -> CorrelationReport {
    Correlator::default().correlate_with_report(mood_entries, journal_entries, thought_records)
}

struct CorrelationPass<'r> {
    resolver: &'r EmotionResolver,
    accumulators: BTreeMap<CoreEmotion, BucketAccumulator>,
    unresolved: BTreeSet<String>,
    moods_matched: usize,
    journals_matched: usize,
    thoughts_matched: usize,
}

impl<'r> CorrelationPass<'r> {
    fn new(resolver: &'r EmotionResolver) -> Self {
        Self {
            resolver,
            accumulators: CoreEmotion::ALL
                .into_iter()
                .map(|core| (core, BucketAccumulator::default()))
                .collect(),
            unresolved: BTreeSet::new(),
            moods_matched: 0,
            journals_matched: 0,
            thoughts_matched: 0,
        }
    }

    fn bucket(&mut self, core: CoreEmotion) -> &mut BucketAccumulator {
        self.accumulators.entry(core).or_default()
    }

    fn resolve(&mut self, label: &str) -> Option<CoreEmotion> {
        let core = self.resolver.resolve_core(label);
        if core.is_none() {
            let normalized = normalize_label(label);
            if !normalized.is_empty() {
                self.unresolved.insert(normalized);
            }
        }
        core
    }

    fn resolve_all<'a>(
        &mut self,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> BTreeSet<CoreEmotion> {
        labels
            .into_iter()
            .filter_map(|label| self.resolve(label))
            .collect()
    }

    fn resolve_first<'a>(
        &mut self,
        labels: impl IntoIterator<Item = &'a str>,
    ) -> Option<CoreEmotion> {
        labels.into_iter().find_map(|label| self.resolve(label))
    }

    fn fold_mood(&mut self, entry: &MoodEntry) {
        let matched = self.resolve_all(entry.labels());
        if matched.is_empty() {
            return;
        }
        self.moods_matched += 1;
        let intensity = entry.effective_intensity();
        for core in matched {
            self.bucket(core).add_mood(intensity);
        }
    }

    /// Tag tiers, first tier that resolves wins: curated tags, AI tags, then
    /// taxonomy terms scanned from the content.
    fn fold_journal(&mut self, entry: &JournalEntry) {
        let mut matched = self.resolve_all(entry.curated_tags());
        if matched.is_empty() {
            matched = self.resolve_all(entry.ai_tags.iter().map(String::as_str));
        }
        if matched.is_empty() {
            let terms = self.resolver.taxonomy().terms_in(&entry.content);
            matched = self.resolve_all(terms);
        }
        if matched.is_empty() {
            return;
        }
        self.journals_matched += 1;
        for core in matched {
            self.bucket(core).add_journal(entry);
        }
    }

    /// Linked mood entry first, then the record's own labels, then taxonomy
    /// terms scanned from the automatic thought.
    fn fold_thought(
        &mut self,
        record: &ThoughtRecord,
        mood_index: &BTreeMap<RecordId, &MoodEntry>,
    ) {
        let linked = record
            .mood_entry_id
            .and_then(|id| mood_index.get(&id).copied());

        let mut core = None;
        if let Some(mood) = linked {
            core = self.resolve_first(mood.labels());
        }
        if core.is_none() {
            core = self.resolve_first(record.emotions.iter().map(String::as_str));
        }
        if core.is_none() {
            let terms = self.resolver.taxonomy().terms_in(&record.automatic_thought);
            core = self.resolve_first(terms);
        }

        if let Some(core) = core {
            self.thoughts_matched += 1;
            self.bucket(core).add_thought(record);
        }
    }

    fn finish(self) -> CorrelationReport {
        CorrelationReport {
            buckets: self
                .accumulators
                .into_iter()
                .map(|(core, accumulator)| (core, accumulator.finish()))
                .collect(),
            unresolved_labels: self.unresolved,
        }
    }
}
