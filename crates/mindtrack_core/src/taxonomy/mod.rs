//! Three-level emotion taxonomy.
//!
//! # Responsibility
//! - Hold the immutable Core -> Secondary -> Tertiary tree, synonym variants,
//!   direct-mapping words and display metadata.
//! - Expose read-only lookups shared by resolver and correlator.
//!
//! # Invariants
//! - Tables are defined once and never mutated at runtime.
//! - The tree is strict: no node has two parents, no cycles.

pub mod emotion;
pub mod index;
pub(crate) mod tables;

pub use emotion::{parse_core_emotion, CoreEmotion, EmotionPath, SecondaryEmotion, TertiaryEmotion};
pub use index::{Taxonomy, TaxonomyError};
