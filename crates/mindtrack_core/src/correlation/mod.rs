//! Cross-entity correlation through the emotion taxonomy.
//!
//! # Responsibility
//! - Aggregate mood, journal and thought records per core emotion.
//!
//! # Invariants
//! - Buckets are rebuilt on every call and never shared across calls.

pub mod bucket;
pub mod correlator;

pub use bucket::{empty_correlation_map, CorrelationBucket, CorrelationMap};
pub use correlator::{correlate, correlate_with_report, CorrelationReport, Correlator};
