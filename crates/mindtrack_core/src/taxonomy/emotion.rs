//! Emotion level types.
//!
//! # Responsibility
//! - Define the closed set of core emotions and its stable wire ids.
//! - Provide copyable handles for secondary/tertiary labels that always know
//!   their parent.
//!
//! # Invariants
//! - `CoreEmotion::ALL` order is the tie-break order for every ranking in core.
//! - A `SecondaryEmotion` always carries exactly one parent core emotion, and a
//!   `TertiaryEmotion` exactly one parent secondary emotion.

use crate::resolve::normalize::{normalize_label, title_case};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Top-level category of the three-tier emotion taxonomy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum CoreEmotion {
    Joy,
    Sadness,
    Fear,
    Anger,
    Disgust,
    Love,
    Surprise,
    Trust,
}

impl CoreEmotion {
    /// Every core emotion in canonical order.
    pub const ALL: [CoreEmotion; 8] = [
        CoreEmotion::Joy,
        CoreEmotion::Sadness,
        CoreEmotion::Fear,
        CoreEmotion::Anger,
        CoreEmotion::Disgust,
        CoreEmotion::Love,
        CoreEmotion::Surprise,
        CoreEmotion::Trust,
    ];

    /// Stable lowercase id, also the normalized label that matches exactly.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Sadness => "sadness",
            Self::Fear => "fear",
            Self::Anger => "anger",
            Self::Disgust => "disgust",
            Self::Love => "love",
            Self::Surprise => "surprise",
            Self::Trust => "trust",
        }
    }

    /// Human-readable name used in insight sentences.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Joy => "Joy",
            Self::Sadness => "Sadness",
            Self::Fear => "Fear",
            Self::Anger => "Anger",
            Self::Disgust => "Disgust",
            Self::Love => "Love",
            Self::Surprise => "Surprise",
            Self::Trust => "Trust",
        }
    }

    /// Chart color for this emotion as `#RRGGBB`.
    pub fn color_hex(self) -> &'static str {
        match self {
            Self::Joy => "#FFD700",
            Self::Sadness => "#4682B4",
            Self::Fear => "#800080",
            Self::Anger => "#DC143C",
            Self::Disgust => "#6B8E23",
            Self::Love => "#FF69B4",
            Self::Surprise => "#FF8C00",
            Self::Trust => "#2E8B57",
        }
    }

    /// Short user-facing description.
    pub fn description(self) -> &'static str {
        match self {
            Self::Joy => "Feelings of happiness, contentment and pleasure.",
            Self::Sadness => "Feelings of loss, disappointment and sorrow.",
            Self::Fear => "Feelings of threat, worry and nervousness.",
            Self::Anger => "Feelings of irritation, frustration and rage.",
            Self::Disgust => "Feelings of aversion, revulsion and disdain.",
            Self::Love => "Feelings of affection, warmth and longing.",
            Self::Surprise => "Feelings of amazement, confusion and realization.",
            Self::Trust => "Feelings of safety, acceptance and confidence.",
        }
    }
}

impl Display for CoreEmotion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Parses a core emotion name, ignoring case and surrounding whitespace.
///
/// Only exact names are accepted; fuzzy input goes through the resolver.
pub fn parse_core_emotion(value: &str) -> Option<CoreEmotion> {
    let normalized = normalize_label(value);
    CoreEmotion::ALL
        .into_iter()
        .find(|core| core.as_str() == normalized)
}

/// Second-tier label that rolls up to exactly one core emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct SecondaryEmotion {
    name: &'static str,
    core: CoreEmotion,
}

impl SecondaryEmotion {
    pub(crate) fn new(name: &'static str, core: CoreEmotion) -> Self {
        Self { name, core }
    }

    /// Normalized lowercase label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn core(&self) -> CoreEmotion {
        self.core
    }

    pub fn display_name(&self) -> String {
        title_case(self.name)
    }
}

/// Third-tier label that rolls up to exactly one secondary emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TertiaryEmotion {
    name: &'static str,
    secondary: SecondaryEmotion,
}

impl TertiaryEmotion {
    pub(crate) fn new(name: &'static str, secondary: SecondaryEmotion) -> Self {
        Self { name, secondary }
    }

    /// Normalized lowercase label.
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn secondary(&self) -> SecondaryEmotion {
        self.secondary
    }

    pub fn core(&self) -> CoreEmotion {
        self.secondary.core
    }

    pub fn display_name(&self) -> String {
        title_case(self.name)
    }
}

/// Fully populated hierarchy for one label, used by display callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionPath {
    pub core: CoreEmotion,
    pub secondary: SecondaryEmotion,
    pub tertiary: TertiaryEmotion,
}

#[cfg(test)]
mod tests {
    use super::{parse_core_emotion, CoreEmotion};
    use std::collections::BTreeSet;

    #[test]
    fn parse_accepts_case_and_whitespace_variants() {
        assert_eq!(parse_core_emotion(" JOY "), Some(CoreEmotion::Joy));
        assert_eq!(parse_core_emotion("surprise"), Some(CoreEmotion::Surprise));
        assert_eq!(parse_core_emotion("joyful"), None);
        assert_eq!(parse_core_emotion(""), None);
    }

    #[test]
    fn ids_and_colors_are_unique() {
        let ids = CoreEmotion::ALL
            .iter()
            .map(|core| core.as_str())
            .collect::<BTreeSet<_>>();
        let colors = CoreEmotion::ALL
            .iter()
            .map(|core| core.color_hex())
            .collect::<BTreeSet<_>>();
        assert_eq!(ids.len(), CoreEmotion::ALL.len());
        assert_eq!(colors.len(), CoreEmotion::ALL.len());
    }

    #[test]
    fn canonical_order_matches_ord() {
        let mut sorted = CoreEmotion::ALL;
        sorted.sort();
        assert_eq!(sorted, CoreEmotion::ALL);
    }
}
