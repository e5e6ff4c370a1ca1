//! Ordered label-resolution strategies.
//!
//! # Responsibility
//! - Model each resolution step as a standalone, individually testable unit.
//! - Fix the precision-first order in which steps run.
//!
//! # Invariants
//! - Every strategy expects a normalized, non-empty label.
//! - Strategies are pure; they only read the immutable taxonomy tables.
//! - `Strategy::CHAIN` runs cheap exact steps before fuzzy ones; sentiment
//!   defaults run after every taxonomy-backed step.

use crate::resolve::config::ResolverConfig;
use crate::resolve::similarity::similarity;
use crate::taxonomy::tables::{DIRECT_MAPPINGS, NEGATIVE_SENTIMENT_WORDS, POSITIVE_SENTIMENT_WORDS};
use crate::taxonomy::{CoreEmotion, Taxonomy};
use serde::Serialize;

/// Minimum label length for "known term contains label" matching.
pub const MIN_CONTAINED_LABEL_CHARS: usize = 3;
/// Minimum stem length kept after suffix stripping.
pub const MIN_STEM_CHARS: usize = 3;

/// One step of the core-emotion resolution chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Label equals a core emotion id.
    ExactCore,
    /// Label equals a synonym variant.
    ExactVariant,
    /// Label contains a variant, or a variant contains the label.
    Substring,
    /// Label matches a secondary or tertiary name; mapped up to its core.
    HierarchyLookup,
    /// Best approximate similarity across all variants above the threshold.
    Similarity,
    /// Curated free-text words outside the tree.
    DirectMapping,
    /// Generic positive/negative words default to Joy/Sadness.
    Sentiment,
    /// Strip `-ing`/`-ed` and retry the exact, substring and hierarchy steps.
    StemRetry,
}

impl Strategy {
    /// Resolution order; the first strategy that matches wins.
    pub const CHAIN: [Strategy; 8] = [
        Strategy::ExactCore,
        Strategy::ExactVariant,
        Strategy::Substring,
        Strategy::HierarchyLookup,
        Strategy::Similarity,
        Strategy::DirectMapping,
        Strategy::Sentiment,
        Strategy::StemRetry,
    ];

    const STEM_CHAIN: [Strategy; 4] = [
        Strategy::ExactCore,
        Strategy::ExactVariant,
        Strategy::Substring,
        Strategy::HierarchyLookup,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExactCore => "exact_core",
            Self::ExactVariant => "exact_variant",
            Self::Substring => "substring",
            Self::HierarchyLookup => "hierarchy_lookup",
            Self::Similarity => "similarity",
            Self::DirectMapping => "direct_mapping",
            Self::Sentiment => "sentiment",
            Self::StemRetry => "stem_retry",
        }
    }

    /// Runs this single step against a normalized label.
    pub fn apply(
        self,
        taxonomy: &Taxonomy,
        label: &str,
        config: &ResolverConfig,
    ) -> Option<CoreEmotion> {
        if label.is_empty() {
            return None;
        }
        match self {
            Self::ExactCore => CoreEmotion::ALL
                .into_iter()
                .find(|core| core.as_str() == label),
            Self::ExactVariant => taxonomy.core_for_variant(label),
            Self::Substring => longest_contained(label, variant_pairs(taxonomy))
                .or_else(|| first_containing(label, variant_pairs(taxonomy))),
            Self::HierarchyLookup => hierarchy_lookup(taxonomy, label),
            Self::Similarity => best_similarity(taxonomy, label, config),
            Self::DirectMapping => direct_mapping(label),
            Self::Sentiment => sentiment_default(label),
            Self::StemRetry => stem_retry(taxonomy, label, config),
        }
    }
}

/// Picks the value of the longest candidate term contained in `label`.
///
/// Ties keep the earliest candidate.
pub(crate) fn longest_contained<T>(
    label: &str,
    candidates: impl IntoIterator<Item = (&'static str, T)>,
) -> Option<T> {
    let mut best: Option<(usize, T)> = None;
    for (term, value) in candidates {
        if !label.contains(term) {
            continue;
        }
        let len = term.chars().count();
        if best.as_ref().map_or(true, |(best_len, _)| len > *best_len) {
            best = Some((len, value));
        }
    }
    best.map(|(_, value)| value)
}

/// Picks the value of the first candidate term that contains `label`.
pub(crate) fn first_containing<T>(
    label: &str,
    candidates: impl IntoIterator<Item = (&'static str, T)>,
) -> Option<T> {
    if label.chars().count() < MIN_CONTAINED_LABEL_CHARS {
        return None;
    }
    candidates
        .into_iter()
        .find(|(term, _)| term.contains(label))
        .map(|(_, value)| value)
}

fn variant_pairs(
    taxonomy: &Taxonomy,
) -> impl Iterator<Item = (&'static str, CoreEmotion)> + '_ {
    CoreEmotion::ALL.into_iter().flat_map(move |core| {
        taxonomy
            .variants_of(core)
            .iter()
            .map(move |variant| (*variant, core))
    })
}

fn node_pairs(taxonomy: &Taxonomy) -> impl Iterator<Item = (&'static str, CoreEmotion)> + '_ {
    let secondaries = taxonomy
        .secondaries()
        .iter()
        .map(|secondary| (secondary.name(), secondary.core()));
    let tertiaries = taxonomy
        .tertiaries()
        .iter()
        .map(|tertiary| (tertiary.name(), tertiary.core()));
    secondaries.chain(tertiaries)
}

fn hierarchy_lookup(taxonomy: &Taxonomy, label: &str) -> Option<CoreEmotion> {
    if let Some(secondary) = taxonomy.secondary_by_name(label) {
        return Some(secondary.core());
    }
    if let Some(tertiary) = taxonomy.tertiary_by_name(label) {
        return Some(tertiary.core());
    }
    longest_contained(label, node_pairs(taxonomy))
        .or_else(|| first_containing(label, node_pairs(taxonomy)))
}

fn best_similarity(
    taxonomy: &Taxonomy,
    label: &str,
    config: &ResolverConfig,
) -> Option<CoreEmotion> {
    let mut best: Option<(f64, CoreEmotion)> = None;
    for core in CoreEmotion::ALL {
        let score = taxonomy
            .variants_of(core)
            .iter()
            .map(|variant| similarity(label, variant))
            .fold(0.0, f64::max);
        if best.map_or(true, |(best_score, _)| score > best_score) {
            best = Some((score, core));
        }
    }
    best.filter(|(score, _)| *score > config.similarity_threshold())
        .map(|(_, core)| core)
}

fn direct_mapping(label: &str) -> Option<CoreEmotion> {
    let label_chars = label.chars().count();
    DIRECT_MAPPINGS
        .iter()
        .find(|&&(word, _)| {
            label.contains(word)
                || (label_chars >= MIN_CONTAINED_LABEL_CHARS && word.contains(label))
        })
        .map(|&(_, core)| core)
}

fn sentiment_default(label: &str) -> Option<CoreEmotion> {
    let has_any = |words: &[&str]| {
        label
            .split(|ch: char| !ch.is_alphanumeric())
            .any(|token| words.iter().any(|word| *word == token))
    };
    if has_any(POSITIVE_SENTIMENT_WORDS) {
        Some(CoreEmotion::Joy)
    } else if has_any(NEGATIVE_SENTIMENT_WORDS) {
        Some(CoreEmotion::Sadness)
    } else {
        None
    }
}

fn stem_retry(taxonomy: &Taxonomy, label: &str, config: &ResolverConfig) -> Option<CoreEmotion> {
    let stem = label
        .strip_suffix("ing")
        .or_else(|| label.strip_suffix("ed"))?
        .trim_end();
    if stem.chars().count() < MIN_STEM_CHARS {
        return None;
    }
    Strategy::STEM_CHAIN
        .into_iter()
        .find_map(|strategy| strategy.apply(taxonomy, stem, config))
}
