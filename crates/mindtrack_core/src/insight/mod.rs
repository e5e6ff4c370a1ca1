//! Natural-language insights derived from correlation buckets.

pub mod distortion;
pub mod generator;

pub use distortion::format_distortion_label;
pub use generator::{generate_insights, insight_texts, Insight, InsightKind};
