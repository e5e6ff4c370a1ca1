//! Emotion-taxonomy analysis engine for MindTrack.
//!
//! Resolves free-form emotion labels onto a fixed three-level taxonomy,
//! correlates mood entries, journal entries and thought records per core
//! emotion, and derives plain-language insights. Every entry point is a pure
//! function of its inputs; the crate owns no storage.

pub mod analysis;
pub mod correlation;
pub mod insight;
pub mod logging;
pub mod model;
pub mod resolve;
pub mod taxonomy;

pub use analysis::{analyze, EmotionAnalysis, EmotionShare};
pub use correlation::{
    correlate, correlate_with_report, empty_correlation_map, CorrelationBucket, CorrelationMap,
    CorrelationReport, Correlator,
};
pub use insight::{format_distortion_label, generate_insights, insight_texts, Insight, InsightKind};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::{JournalEntry, MoodEntry, RecordId, ThoughtRecord, MAX_INTENSITY};
pub use resolve::{
    normalize_label, resolve_core_emotion, resolve_emotion_path, resolve_secondary_emotion,
    resolve_tertiary_emotion, similarity, EmotionResolver, Resolution, ResolverConfig,
    ResolverConfigError, Strategy, DEFAULT_SIMILARITY_THRESHOLD,
};
pub use taxonomy::{
    parse_core_emotion, CoreEmotion, EmotionPath, SecondaryEmotion, TertiaryEmotion, Taxonomy,
    TaxonomyError,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
