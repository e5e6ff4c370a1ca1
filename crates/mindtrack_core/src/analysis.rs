//! Dashboard analysis facade.
//!
//! # Responsibility
//! - Run correlation and insight generation in one pure call.
//! - Attach chart metadata (share and color per core emotion).
//!
//! # Invariants
//! - `distribution` lists every core emotion in canonical order.
//! - Shares sum to `100` when any mood entry matched, and are all `0` otherwise.

use crate::correlation::{CorrelationMap, Correlator};
use crate::insight::{generate_insights, Insight};
use crate::model::{JournalEntry, MoodEntry, ThoughtRecord};
use crate::taxonomy::CoreEmotion;
use serde::Serialize;
use std::collections::BTreeSet;

/// One chart slice for a core emotion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionShare {
    pub core: CoreEmotion,
    pub color: &'static str,
    pub mood_entries: u32,
    /// Percentage of all matched mood-entry counts.
    pub share_percent: f64,
}

/// Correlation buckets, insights and chart data for one record batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionAnalysis {
    pub buckets: CorrelationMap,
    pub insights: Vec<Insight>,
    pub distribution: Vec<EmotionShare>,
    pub unresolved_labels: BTreeSet<String>,
}

impl EmotionAnalysis {
    /// Builds an analysis with the given correlator.
    pub fn build(
        correlator: &Correlator,
        mood_entries: &[MoodEntry],
        journal_entries: &[JournalEntry],
        thought_records: &[ThoughtRecord],
    ) -> Self {
        let report =
            correlator.correlate_with_report(mood_entries, journal_entries, thought_records);
        let insights = generate_insights(&report.buckets);
        let distribution = distribution(&report.buckets);
        Self {
            buckets: report.buckets,
            insights,
            distribution,
            unresolved_labels: report.unresolved_labels,
        }
    }
}

/// Builds an analysis with the default resolver.
pub fn analyze(
    mood_entries: &[MoodEntry],
    journal_entries: &[JournalEntry],
    thought_records: &[ThoughtRecord],
) -> EmotionAnalysis {
    EmotionAnalysis::build(
        &Correlator::default(),
        mood_entries,
        journal_entries,
        thought_records,
    )
}

fn distribution(buckets: &CorrelationMap) -> Vec<EmotionShare> {
    let total: u64 = buckets
        .values()
        .map(|bucket| u64::from(bucket.total_entries))
        .sum();
    CoreEmotion::ALL
        .into_iter()
        .map(|core| {
            let mood_entries = buckets
                .get(&core)
                .map(|bucket| bucket.total_entries)
                .unwrap_or(0);
            let share_percent = if total == 0 {
                0.0
            } else {
                f64::from(mood_entries) * 100.0 / total as f64
            };
            EmotionShare {
                core,
                color: core.color_hex(),
                mood_entries,
                share_percent,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{analyze, distribution};
    use crate::correlation::empty_correlation_map;
    use crate::model::MoodEntry;
    use crate::taxonomy::CoreEmotion;
    use uuid::Uuid;

    #[test]
    fn distribution_covers_every_core_even_when_empty() {
        let analysis = analyze(&[], &[], &[]);
        assert_eq!(analysis.distribution.len(), CoreEmotion::ALL.len());
        assert!(analysis
            .distribution
            .iter()
            .all(|share| share.share_percent == 0.0));
        assert!(analysis.insights.is_empty());
    }

    #[test]
    fn distribution_total_does_not_overflow_on_saturated_buckets() {
        let mut buckets = empty_correlation_map();
        for bucket in buckets.values_mut() {
            bucket.total_entries = u32::MAX;
        }
        let shares = distribution(&buckets);
        assert_eq!(shares.len(), CoreEmotion::ALL.len());
        for share in &shares {
            assert_eq!(share.mood_entries, u32::MAX);
            assert!((share.share_percent - 12.5).abs() < 1e-9);
        }
    }

    #[test]
    fn distribution_shares_sum_to_one_hundred() {
        let moods = vec![
            MoodEntry::new(Uuid::new_v4(), "joy", 6.0),
            MoodEntry::new(Uuid::new_v4(), "joy", 4.0),
            MoodEntry::new(Uuid::new_v4(), "fear", 9.0),
            MoodEntry::new(Uuid::new_v4(), "anger", 2.0),
        ];
        let analysis = analyze(&moods, &[], &[]);
        let total: f64 = analysis
            .distribution
            .iter()
            .map(|share| share.share_percent)
            .sum();
        assert!((total - 100.0).abs() < 1e-9);

        let joy = &analysis.distribution[0];
        assert_eq!(joy.core, CoreEmotion::Joy);
        assert_eq!(joy.mood_entries, 2);
        assert_eq!(joy.share_percent, 50.0);
        assert_eq!(joy.color, "#FFD700");
    }
}
