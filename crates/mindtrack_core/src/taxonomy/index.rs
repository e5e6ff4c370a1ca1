//! Validated lookup index over the emotion table.
//!
//! # Responsibility
//! - Build reverse lookups (variant/secondary/tertiary -> parent) once.
//! - Enforce the strict-tree shape of the taxonomy at build time.
//! - Scan free text for known taxonomy terms.
//!
//! # Invariants
//! - Every variant belongs to exactly one core emotion.
//! - Secondary and tertiary names are unique across the whole tree.
//! - No secondary/tertiary name equals a variant of a different core emotion.
//! - The built-in index is immutable after construction.

use crate::taxonomy::emotion::{CoreEmotion, SecondaryEmotion, TertiaryEmotion};
use crate::taxonomy::tables::{CoreEntry, EMOTION_TABLE};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

static BUILTIN_TAXONOMY: Lazy<Taxonomy> = Lazy::new(|| {
    Taxonomy::from_table(EMOTION_TABLE).expect("built-in emotion table is a strict tree")
});
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").expect("valid word regex"));

/// Taxonomy build error for malformed tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A core emotion appears more than once in the table.
    DuplicateCore(CoreEmotion),
    /// A core emotion has no table entry.
    MissingCore(CoreEmotion),
    /// A label is empty or not in normalized form.
    InvalidLabel(String),
    /// A variant is listed under two core emotions.
    DuplicateVariant {
        label: String,
        first: CoreEmotion,
        second: CoreEmotion,
    },
    /// A secondary or tertiary name appears twice in the tree.
    DuplicateNode(String),
    /// A tree node shadows another core emotion's variant.
    ConflictingNode {
        label: String,
        node_core: CoreEmotion,
        variant_core: CoreEmotion,
    },
    /// A secondary emotion has no tertiary labels.
    EmptySecondary(String),
}

impl Display for TaxonomyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateCore(core) => write!(f, "core emotion listed twice: {core}"),
            Self::MissingCore(core) => write!(f, "core emotion missing from table: {core}"),
            Self::InvalidLabel(label) => write!(f, "label is not normalized: `{label}`"),
            Self::DuplicateVariant {
                label,
                first,
                second,
            } => write!(
                f,
                "variant `{label}` listed under both {first} and {second}"
            ),
            Self::DuplicateNode(label) => write!(f, "tree node listed twice: `{label}`"),
            Self::ConflictingNode {
                label,
                node_core,
                variant_core,
            } => write!(
                f,
                "tree node `{label}` under {node_core} shadows a {variant_core} variant"
            ),
            Self::EmptySecondary(label) => {
                write!(f, "secondary emotion `{label}` has no tertiary labels")
            }
        }
    }
}

impl Error for TaxonomyError {}

/// Read-only taxonomy index.
#[derive(Debug)]
pub struct Taxonomy {
    variants: BTreeMap<CoreEmotion, Vec<&'static str>>,
    variant_index: BTreeMap<&'static str, CoreEmotion>,
    secondaries: Vec<SecondaryEmotion>,
    secondary_index: BTreeMap<&'static str, SecondaryEmotion>,
    tertiaries: Vec<TertiaryEmotion>,
    tertiary_index: BTreeMap<&'static str, TertiaryEmotion>,
}

impl Taxonomy {
    /// Returns the process-wide built-in taxonomy.
    pub fn builtin() -> &'static Taxonomy {
        &BUILTIN_TAXONOMY
    }

    pub(crate) fn from_table(table: &'static [CoreEntry]) -> Result<Self, TaxonomyError> {
        let mut variants: BTreeMap<CoreEmotion, Vec<&'static str>> = BTreeMap::new();
        let mut variant_index = BTreeMap::new();

        for entry in table {
            if variants.contains_key(&entry.core) {
                return Err(TaxonomyError::DuplicateCore(entry.core));
            }
            let mut list = vec![entry.core.as_str()];
            list.extend(entry.variants.iter().copied());
            for label in &list {
                ensure_normalized(label)?;
                if let Some(first) = variant_index.insert(*label, entry.core) {
                    return Err(TaxonomyError::DuplicateVariant {
                        label: label.to_string(),
                        first,
                        second: entry.core,
                    });
                }
            }
            variants.insert(entry.core, list);
        }

        let mut index = Self {
            variants,
            variant_index,
            secondaries: Vec::new(),
            secondary_index: BTreeMap::new(),
            tertiaries: Vec::new(),
            tertiary_index: BTreeMap::new(),
        };

        let mut node_names = BTreeSet::new();
        for entry in table {
            for secondary_entry in entry.secondaries {
                index.check_node(secondary_entry.name, entry.core, &mut node_names)?;
                if secondary_entry.tertiaries.is_empty() {
                    return Err(TaxonomyError::EmptySecondary(
                        secondary_entry.name.to_string(),
                    ));
                }
                let secondary = SecondaryEmotion::new(secondary_entry.name, entry.core);
                index.secondaries.push(secondary);
                index.secondary_index.insert(secondary.name(), secondary);

                for &name in secondary_entry.tertiaries {
                    index.check_node(name, entry.core, &mut node_names)?;
                    let tertiary = TertiaryEmotion::new(name, secondary);
                    index.tertiaries.push(tertiary);
                    index.tertiary_index.insert(tertiary.name(), tertiary);
                }
            }
        }

        if let Some(missing) = CoreEmotion::ALL
            .into_iter()
            .find(|core| !index.variants.contains_key(core))
        {
            return Err(TaxonomyError::MissingCore(missing));
        }

        debug!(
            "event=taxonomy_build module=taxonomy status=ok variants={} secondaries={} tertiaries={}",
            index.variant_index.len(),
            index.secondaries.len(),
            index.tertiaries.len()
        );
        Ok(index)
    }

    fn check_node(
        &self,
        label: &'static str,
        core: CoreEmotion,
        seen: &mut BTreeSet<&'static str>,
    ) -> Result<(), TaxonomyError> {
        ensure_normalized(label)?;
        if !seen.insert(label) {
            return Err(TaxonomyError::DuplicateNode(label.to_string()));
        }
        match self.variant_index.get(label) {
            Some(variant_core) if *variant_core != core => Err(TaxonomyError::ConflictingNode {
                label: label.to_string(),
                node_core: core,
                variant_core: *variant_core,
            }),
            _ => Ok(()),
        }
    }

    /// Variants of one core emotion, the core id first, in table order.
    pub fn variants_of(&self, core: CoreEmotion) -> &[&'static str] {
        self.variants.get(&core).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Exact variant lookup on a normalized label.
    pub fn core_for_variant(&self, label: &str) -> Option<CoreEmotion> {
        self.variant_index.get(label).copied()
    }

    pub fn secondary_by_name(&self, label: &str) -> Option<SecondaryEmotion> {
        self.secondary_index.get(label).copied()
    }

    pub fn tertiary_by_name(&self, label: &str) -> Option<TertiaryEmotion> {
        self.tertiary_index.get(label).copied()
    }

    /// All secondary emotions in tree order.
    pub fn secondaries(&self) -> &[SecondaryEmotion] {
        &self.secondaries
    }

    /// All tertiary emotions in tree order.
    pub fn tertiaries(&self) -> &[TertiaryEmotion] {
        &self.tertiaries
    }

    pub fn secondaries_of(&self, core: CoreEmotion) -> impl Iterator<Item = SecondaryEmotion> + '_ {
        self.secondaries
            .iter()
            .copied()
            .filter(move |secondary| secondary.core() == core)
    }

    pub fn tertiaries_of(
        &self,
        secondary: SecondaryEmotion,
    ) -> impl Iterator<Item = TertiaryEmotion> + '_ {
        self.tertiaries
            .iter()
            .copied()
            .filter(move |tertiary| tertiary.secondary() == secondary)
    }

    /// Returns whether `word` names any node or variant of the taxonomy.
    pub fn is_known_term(&self, word: &str) -> bool {
        self.variant_index.contains_key(word)
            || self.secondary_index.contains_key(word)
            || self.tertiary_index.contains_key(word)
    }

    /// Collects taxonomy terms found as whole words in `text`.
    ///
    /// Terms are returned once each, in order of first appearance.
    pub fn terms_in(&self, text: &str) -> Vec<&'static str> {
        let lowered = text.to_lowercase();
        let mut seen = BTreeSet::new();
        let mut terms = Vec::new();
        for word in WORD_RE.find_iter(&lowered) {
            let Some(term) = self.static_term(word.as_str()) else {
                continue;
            };
            if seen.insert(term) {
                terms.push(term);
            }
        }
        terms
    }

    fn static_term(&self, word: &str) -> Option<&'static str> {
        self.variant_index
            .get_key_value(word)
            .map(|(term, _)| *term)
            .or_else(|| self.secondary_index.get(word).map(|node| node.name()))
            .or_else(|| self.tertiary_index.get(word).map(|node| node.name()))
    }
}

fn ensure_normalized(label: &str) -> Result<(), TaxonomyError> {
    let valid = !label.is_empty()
        && label.trim() == label
        && !label.contains("  ")
        && label.to_lowercase() == label;
    if valid {
        Ok(())
    } else {
        Err(TaxonomyError::InvalidLabel(label.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::{Taxonomy, TaxonomyError};
    use crate::taxonomy::emotion::CoreEmotion;
    use crate::taxonomy::tables::{CoreEntry, SecondaryEntry};

    static ALL_EMPTY: [CoreEntry; 8] = [
        CoreEntry {
            core: CoreEmotion::Joy,
            variants: &[],
            secondaries: &[],
        },
        CoreEntry {
            core: CoreEmotion::Sadness,
            variants: &[],
            secondaries: &[],
        },
        CoreEntry {
            core: CoreEmotion::Fear,
            variants: &[],
            secondaries: &[],
        },
        CoreEntry {
            core: CoreEmotion::Anger,
            variants: &[],
            secondaries: &[],
        },
        CoreEntry {
            core: CoreEmotion::Disgust,
            variants: &[],
            secondaries: &[],
        },
        CoreEntry {
            core: CoreEmotion::Love,
            variants: &[],
            secondaries: &[],
        },
        CoreEntry {
            core: CoreEmotion::Surprise,
            variants: &[],
            secondaries: &[],
        },
        CoreEntry {
            core: CoreEmotion::Trust,
            variants: &[],
            secondaries: &[],
        },
    ];

    #[test]
    fn minimal_table_builds() {
        let taxonomy = Taxonomy::from_table(&ALL_EMPTY).expect("minimal table");
        assert_eq!(taxonomy.variants_of(CoreEmotion::Fear), &["fear"]);
        assert!(taxonomy.secondaries().is_empty());
    }

    #[test]
    fn rejects_missing_core() {
        static TABLE: [CoreEntry; 1] = [CoreEntry {
            core: CoreEmotion::Joy,
            variants: &["happy"],
            secondaries: &[],
        }];
        let err = Taxonomy::from_table(&TABLE).expect_err("missing cores must fail");
        assert_eq!(err, TaxonomyError::MissingCore(CoreEmotion::Sadness));
    }

    #[test]
    fn rejects_variant_shared_by_two_cores() {
        static TABLE: [CoreEntry; 2] = [
            CoreEntry {
                core: CoreEmotion::Joy,
                variants: &["upbeat"],
                secondaries: &[],
            },
            CoreEntry {
                core: CoreEmotion::Trust,
                variants: &["upbeat"],
                secondaries: &[],
            },
        ];
        let err = Taxonomy::from_table(&TABLE).expect_err("shared variant must fail");
        assert!(matches!(err, TaxonomyError::DuplicateVariant { .. }));
    }

    #[test]
    fn rejects_duplicate_tree_node() {
        static TABLE: [CoreEntry; 2] = [
            CoreEntry {
                core: CoreEmotion::Joy,
                variants: &[],
                secondaries: &[SecondaryEntry {
                    name: "zest",
                    tertiaries: &["thrill"],
                }],
            },
            CoreEntry {
                core: CoreEmotion::Surprise,
                variants: &[],
                secondaries: &[SecondaryEntry {
                    name: "amazement",
                    tertiaries: &["thrill"],
                }],
            },
        ];
        let err = Taxonomy::from_table(&TABLE).expect_err("duplicate node must fail");
        assert_eq!(err, TaxonomyError::DuplicateNode("thrill".to_string()));
    }

    #[test]
    fn rejects_node_shadowing_other_core_variant() {
        static TABLE: [CoreEntry; 2] = [
            CoreEntry {
                core: CoreEmotion::Fear,
                variants: &["shocked"],
                secondaries: &[],
            },
            CoreEntry {
                core: CoreEmotion::Surprise,
                variants: &[],
                secondaries: &[SecondaryEntry {
                    name: "shocked",
                    tertiaries: &["stunned"],
                }],
            },
        ];
        let err = Taxonomy::from_table(&TABLE).expect_err("shadowing node must fail");
        assert!(matches!(err, TaxonomyError::ConflictingNode { .. }));
    }

    #[test]
    fn rejects_unnormalized_label() {
        static TABLE: [CoreEntry; 1] = [CoreEntry {
            core: CoreEmotion::Joy,
            variants: &["Happy "],
            secondaries: &[],
        }];
        let err = Taxonomy::from_table(&TABLE).expect_err("unnormalized label must fail");
        assert_eq!(err, TaxonomyError::InvalidLabel("Happy ".to_string()));
    }

    #[test]
    fn builtin_table_is_a_strict_tree() {
        let taxonomy = Taxonomy::builtin();
        for secondary in taxonomy.secondaries() {
            assert!(taxonomy.tertiaries_of(*secondary).count() > 0);
        }
        for core in CoreEmotion::ALL {
            assert_eq!(taxonomy.variants_of(core)[0], core.as_str());
            assert!(taxonomy.secondaries_of(core).count() > 0);
        }
    }

    #[test]
    fn terms_in_finds_whole_words_once() {
        let taxonomy = Taxonomy::builtin();
        let terms = taxonomy.terms_in("Anxious again. Still ANXIOUS, but some hope; scaredy-cat");
        assert_eq!(terms, vec!["anxious", "hope"]);
    }
}
