//! Input records consumed by the correlation engine.
//!
//! # Responsibility
//! - Define the read-only shapes of mood entries, journal entries and thought
//!   records as fetched by the caller.
//! - Absorb malformed field values at decode time.
//!
//! # Invariants
//! - `id` is the only required field of every record.
//! - Missing or malformed optional fields decode to empty values and
//!   contribute nothing to aggregation.

use crate::model::lenient;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier of an input record.
pub type RecordId = Uuid;

/// Upper bound of the mood intensity scale.
pub const MAX_INTENSITY: f64 = 10.0;

/// A user-logged emotional state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: RecordId,
    /// Unix epoch milliseconds.
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub recorded_at: Option<i64>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub core_emotion: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub primary_emotion: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub tertiary_emotion: Option<String>,
    /// Expected on a `0..=10` scale.
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub intensity: Option<f64>,
}

impl MoodEntry {
    /// Creates an entry with only a core label set.
    pub fn new(id: RecordId, core_emotion: impl Into<String>, intensity: f64) -> Self {
        Self {
            id,
            recorded_at: None,
            core_emotion: Some(core_emotion.into()),
            primary_emotion: None,
            tertiary_emotion: None,
            intensity: Some(intensity),
        }
    }

    /// Populated labels in core -> primary -> tertiary order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        [
            self.core_emotion.as_deref(),
            self.primary_emotion.as_deref(),
            self.tertiary_emotion.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Intensity clamped to the scale; missing or non-finite values count as 0.
    pub fn effective_intensity(&self) -> f64 {
        self.intensity
            .filter(|value| value.is_finite())
            .map(|value| value.clamp(0.0, MAX_INTENSITY))
            .unwrap_or(0.0)
    }
}

/// A free-text reflection with optional emotion tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: RecordId,
    /// Unix epoch milliseconds.
    #[serde(default, deserialize_with = "lenient::optional_timestamp")]
    pub created_at: Option<i64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
    /// Tags picked by the user.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub user_tags: Vec<String>,
    /// Tags suggested by an upstream language model.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub ai_tags: Vec<String>,
    /// Generic tag field written by older clients.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub tags: Vec<String>,
}

impl JournalEntry {
    pub fn new(id: RecordId, content: impl Into<String>) -> Self {
        Self {
            id,
            created_at: None,
            content: content.into(),
            user_tags: Vec::new(),
            ai_tags: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// User-curated tags: `user_tags` followed by `tags`.
    pub fn curated_tags(&self) -> impl Iterator<Item = &str> {
        self.user_tags
            .iter()
            .chain(self.tags.iter())
            .map(String::as_str)
    }
}

/// A structured cognitive-behavioral exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtRecord {
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::optional_record_id")]
    pub mood_entry_id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub automatic_thought: String,
    /// Emotion labels written on the record itself.
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub emotions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub cognitive_distortions: Vec<String>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub belief_before: Option<f64>,
    #[serde(default, deserialize_with = "lenient::optional_number")]
    pub belief_after: Option<f64>,
}

impl ThoughtRecord {
    pub fn new(id: RecordId, automatic_thought: impl Into<String>) -> Self {
        Self {
            id,
            mood_entry_id: None,
            automatic_thought: automatic_thought.into(),
            emotions: Vec::new(),
            cognitive_distortions: Vec::new(),
            belief_before: None,
            belief_after: None,
        }
    }

    /// Rating change as `after - before`; `None` unless both ratings are set.
    ///
    /// A drop in belief intensity is negative.
    pub fn rating_delta(&self) -> Option<f64> {
        match (self.belief_before, self.belief_after) {
            (Some(before), Some(after)) if before.is_finite() && after.is_finite() => {
                Some(after - before)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MoodEntry, ThoughtRecord};
    use uuid::Uuid;

    #[test]
    fn labels_skip_missing_fields_in_order() {
        let mut entry = MoodEntry::new(Uuid::new_v4(), "joy", 5.0);
        entry.tertiary_emotion = Some("bliss".to_string());
        assert_eq!(entry.labels().collect::<Vec<_>>(), vec!["joy", "bliss"]);
    }

    #[test]
    fn effective_intensity_clamps_and_defaults() {
        let mut entry = MoodEntry::new(Uuid::new_v4(), "fear", 14.0);
        assert_eq!(entry.effective_intensity(), 10.0);
        entry.intensity = Some(-3.0);
        assert_eq!(entry.effective_intensity(), 0.0);
        entry.intensity = Some(f64::NAN);
        assert_eq!(entry.effective_intensity(), 0.0);
        entry.intensity = None;
        assert_eq!(entry.effective_intensity(), 0.0);
    }

    #[test]
    fn rating_delta_requires_both_ratings() {
        let mut record = ThoughtRecord::new(Uuid::new_v4(), "I will fail");
        record.belief_before = Some(7.0);
        assert_eq!(record.rating_delta(), None);
        record.belief_after = Some(3.0);
        assert_eq!(record.rating_delta(), Some(-4.0));
    }
}
