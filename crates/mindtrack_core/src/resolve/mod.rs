//! Label resolution onto the emotion taxonomy.
//!
//! # Responsibility
//! - Normalize raw labels from users, forms and language models.
//! - Score approximate matches and run the ordered strategy chain.
//!
//! # Invariants
//! - "No match" is `None`, never an error.

pub mod config;
pub mod normalize;
pub mod resolver;
pub mod similarity;
pub mod strategy;

pub use config::{ResolverConfig, ResolverConfigError, DEFAULT_SIMILARITY_THRESHOLD};
pub use normalize::normalize_label;
pub use resolver::{
    resolve_core_emotion, resolve_emotion_path, resolve_secondary_emotion,
    resolve_tertiary_emotion, EmotionResolver, Resolution,
};
pub use similarity::similarity;
pub use strategy::Strategy;
