//! Insight generation over correlation buckets.
//!
//! # Responsibility
//! - Turn correlation buckets into short, ordered natural-language findings.
//!
//! # Invariants
//! - Rules run in fixed order; a rule whose precondition fails emits nothing.
//! - Empty input yields an empty list, never placeholder text.
//! - Ties between core emotions resolve to the earlier one in
//!   `CoreEmotion::ALL`; ties between distortions resolve alphabetically.

use crate::correlation::{CorrelationBucket, CorrelationMap};
use crate::insight::distortion::format_distortion_label;
use crate::taxonomy::CoreEmotion;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Category of a generated insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Core emotion with the most mood entries.
    MostFrequent,
    /// Journal entries referencing the most frequent emotion.
    JournalLink,
    /// Core emotion with the largest positive rating change.
    MostImproved,
    /// Emotion journaled about without any thought record.
    NeedsAttention,
    /// Most frequent cognitive distortion.
    DistortionSummary,
}

/// One natural-language finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

impl Insight {
    fn new(kind: InsightKind, text: String) -> Self {
        Self { kind, text }
    }
}

impl Display for Insight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Generates insights in rule order.
pub fn generate_insights(buckets: &CorrelationMap) -> Vec<Insight> {
    let mut insights = Vec::new();

    if let Some((core, bucket)) = most_frequent(buckets) {
        insights.push(Insight::new(
            InsightKind::MostFrequent,
            format!(
                "{core} is your most frequently logged emotion, appearing in {} mood {}.",
                bucket.total_entries,
                plural(bucket.total_entries as usize, "entry", "entries")
            ),
        ));

        let journal_count = bucket.journal_entries.len();
        if journal_count > 0 {
            insights.push(Insight::new(
                InsightKind::JournalLink,
                format!(
                    "{journal_count} journal {} {} {core}.",
                    plural(journal_count, "entry", "entries"),
                    plural(journal_count, "references", "reference")
                ),
            ));
        }
    }

    insights.extend(most_improved(buckets));
    insights.extend(needs_attention(buckets));
    insights.extend(distortion_summary(buckets));
    insights
}

/// Generates insight sentences only.
pub fn insight_texts(buckets: &CorrelationMap) -> Vec<String> {
    generate_insights(buckets)
        .into_iter()
        .map(|insight| insight.text)
        .collect()
}

fn most_frequent(buckets: &CorrelationMap) -> Option<(CoreEmotion, &CorrelationBucket)> {
    let mut top: Option<(CoreEmotion, &CorrelationBucket)> = None;
    for (core, bucket) in buckets {
        if bucket.total_entries == 0 {
            continue;
        }
        if top.map_or(true, |(_, best)| bucket.total_entries > best.total_entries) {
            top = Some((*core, bucket));
        }
    }
    top
}

fn most_improved(buckets: &CorrelationMap) -> Option<Insight> {
    let mut top: Option<(CoreEmotion, f64)> = None;
    for (core, bucket) in buckets {
        if bucket.thought_records.is_empty() {
            continue;
        }
        let improvement = bucket.average_improvement;
        if top.map_or(true, |(_, best)| improvement > best) {
            top = Some((*core, improvement));
        }
    }
    let (core, improvement) = top.filter(|(_, improvement)| *improvement > 0.0)?;
    Some(Insight::new(
        InsightKind::MostImproved,
        format!(
            "Thought records for {core} show the most improvement, with an average rating change of {improvement:.1} points."
        ),
    ))
}

fn needs_attention(buckets: &CorrelationMap) -> Option<Insight> {
    let (core, _) = buckets.iter().find(|(_, bucket)| {
        bucket.total_entries > 0
            && !bucket.journal_entries.is_empty()
            && bucket.thought_records.is_empty()
    })?;
    Some(Insight::new(
        InsightKind::NeedsAttention,
        format!(
            "You often log and journal about {core} but have no thought records for it yet. Try completing a thought record the next time {} comes up.",
            core.as_str()
        ),
    ))
}

fn distortion_summary(buckets: &CorrelationMap) -> Option<Insight> {
    let mut tally: BTreeMap<String, usize> = BTreeMap::new();
    for record in buckets.values().flat_map(|bucket| &bucket.thought_records) {
        for raw in &record.cognitive_distortions {
            let label = format_distortion_label(raw);
            if !label.is_empty() {
                *tally.entry(label).or_default() += 1;
            }
        }
    }

    let mut top: Option<(&String, usize)> = None;
    for (label, count) in &tally {
        if top.map_or(true, |(_, best)| *count > best) {
            top = Some((label, *count));
        }
    }
    let (label, count) = top?;
    Some(Insight::new(
        InsightKind::DistortionSummary,
        format!(
            "Your most common cognitive distortion is {label}, noted {count} {}.",
            plural(count, "time", "times")
        ),
    ))
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
