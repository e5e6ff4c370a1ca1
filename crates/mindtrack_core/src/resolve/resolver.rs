//! Taxonomy resolver.
//!
//! # Responsibility
//! - Map arbitrary emotion labels onto the fixed taxonomy.
//! - Fill the whole Core -> Secondary -> Tertiary path for display callers.
//!
//! # Invariants
//! - Resolution never fails; an unmatched label yields `None`.
//! - Input is normalized first, so case and surrounding whitespace never
//!   change the result.
//! - When only a parent level is identifiable, the first child in table order
//!   stands in for the missing level.
//! - A label that names a core emotion or one of its variants only ever
//!   resolves to secondary and tertiary nodes of that core.

use crate::resolve::config::ResolverConfig;
use crate::resolve::normalize::normalize_label;
use crate::resolve::strategy::{first_containing, longest_contained, Strategy};
use crate::taxonomy::{CoreEmotion, EmotionPath, SecondaryEmotion, Taxonomy, TertiaryEmotion};
use log::trace;
use once_cell::sync::Lazy;
use serde::Serialize;

static DEFAULT_RESOLVER: Lazy<EmotionResolver> = Lazy::new(EmotionResolver::default);

/// Winning core emotion plus the strategy that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Resolution {
    pub core: CoreEmotion,
    pub strategy: Strategy,
}

/// Label resolver over the built-in taxonomy.
#[derive(Debug, Clone)]
pub struct EmotionResolver {
    taxonomy: &'static Taxonomy,
    config: ResolverConfig,
}

impl Default for EmotionResolver {
    fn default() -> Self {
        Self::new(ResolverConfig::default())
    }
}

impl EmotionResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            taxonomy: Taxonomy::builtin(),
            config,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn taxonomy(&self) -> &'static Taxonomy {
        self.taxonomy
    }

    /// Resolves a label to its core emotion.
    pub fn resolve_core(&self, label: &str) -> Option<CoreEmotion> {
        self.resolve_core_traced(label)
            .map(|resolution| resolution.core)
    }

    /// Resolves a label and reports which strategy matched.
    pub fn resolve_core_traced(&self, label: &str) -> Option<Resolution> {
        let normalized = normalize_label(label);
        self.core_for(&normalized)
    }

    /// Resolves a label to a secondary emotion.
    ///
    /// Falls back to the first secondary of the resolved core emotion.
    pub fn resolve_secondary(&self, label: &str) -> Option<SecondaryEmotion> {
        let normalized = normalize_label(label);
        self.secondary_for(&normalized)
    }

    /// Resolves a label to a tertiary emotion.
    ///
    /// Falls back to the first tertiary of the resolved secondary emotion.
    pub fn resolve_tertiary(&self, label: &str) -> Option<TertiaryEmotion> {
        let normalized = normalize_label(label);
        self.tertiary_for(&normalized)
    }

    /// Resolves a fully populated hierarchy anchored on `resolve_core`.
    pub fn resolve_path(&self, label: &str) -> Option<EmotionPath> {
        let normalized = normalize_label(label);
        let core = self.core_for(&normalized)?.core;
        let tertiary = match self
            .tertiary_for(&normalized)
            .filter(|tertiary| tertiary.core() == core)
        {
            Some(tertiary) => tertiary,
            None => {
                let secondary = self
                    .secondary_for(&normalized)
                    .filter(|secondary| secondary.core() == core)
                    .or_else(|| self.taxonomy.secondaries_of(core).next())?;
                self.taxonomy.tertiaries_of(secondary).next()?
            }
        };
        Some(EmotionPath {
            core,
            secondary: tertiary.secondary(),
            tertiary,
        })
    }

    fn core_for(&self, normalized: &str) -> Option<Resolution> {
        if normalized.is_empty() {
            return None;
        }
        let resolution = Strategy::CHAIN.into_iter().find_map(|strategy| {
            strategy
                .apply(self.taxonomy, normalized, &self.config)
                .map(|core| Resolution { core, strategy })
        });
        match resolution {
            Some(found) => trace!(
                "event=label_resolve module=resolve status=ok strategy={} core={}",
                found.strategy.as_str(),
                found.core.as_str()
            ),
            None => trace!(
                "event=label_resolve module=resolve status=unmatched label_chars={}",
                normalized.chars().count()
            ),
        }
        resolution
    }

    /// Core emotion named outright by a core id or synonym variant.
    ///
    /// Node substring matches stay inside this core: `hopeless` is a Sadness
    /// variant and must not land under Joy's `hope`.
    fn exact_core(&self, normalized: &str) -> Option<CoreEmotion> {
        [Strategy::ExactCore, Strategy::ExactVariant]
            .into_iter()
            .find_map(|strategy| strategy.apply(self.taxonomy, normalized, &self.config))
    }

    fn secondary_for(&self, normalized: &str) -> Option<SecondaryEmotion> {
        if normalized.is_empty() {
            return None;
        }
        let taxonomy = self.taxonomy;
        if let Some(secondary) = taxonomy.secondary_by_name(normalized) {
            return Some(secondary);
        }
        if let Some(tertiary) = taxonomy.tertiary_by_name(normalized) {
            return Some(tertiary.secondary());
        }

        let anchor = self.exact_core(normalized);
        let nodes = || {
            let secondaries = taxonomy
                .secondaries()
                .iter()
                .map(|secondary| (secondary.name(), *secondary));
            let tertiaries = taxonomy
                .tertiaries()
                .iter()
                .map(|tertiary| (tertiary.name(), tertiary.secondary()));
            secondaries
                .chain(tertiaries)
                .filter(move |(_, secondary)| {
                    anchor.map_or(true, |core| secondary.core() == core)
                })
        };
        longest_contained(normalized, nodes())
            .or_else(|| first_containing(normalized, nodes()))
            .or_else(|| {
                let core = self.core_for(normalized)?.core;
                taxonomy.secondaries_of(core).next()
            })
    }

    fn tertiary_for(&self, normalized: &str) -> Option<TertiaryEmotion> {
        if normalized.is_empty() {
            return None;
        }
        let taxonomy = self.taxonomy;
        if let Some(tertiary) = taxonomy.tertiary_by_name(normalized) {
            return Some(tertiary);
        }

        let anchor = self.exact_core(normalized);
        let nodes = || {
            taxonomy
                .tertiaries()
                .iter()
                .map(|tertiary| (tertiary.name(), *tertiary))
                .filter(move |(_, tertiary)| {
                    anchor.map_or(true, |core| tertiary.core() == core)
                })
        };
        longest_contained(normalized, nodes())
            .or_else(|| first_containing(normalized, nodes()))
            .or_else(|| {
                let secondary = self.secondary_for(normalized)?;
                taxonomy.tertiaries_of(secondary).next()
            })
    }
}

/// Resolves a label to a core emotion with the default resolver.
pub fn resolve_core_emotion(label: &str) -> Option<CoreEmotion> {
    DEFAULT_RESOLVER.resolve_core(label)
}

/// Resolves a label to a secondary emotion with the default resolver.
pub fn resolve_secondary_emotion(label: &str) -> Option<SecondaryEmotion> {
    DEFAULT_RESOLVER.resolve_secondary(label)
}

/// Resolves a label to a tertiary emotion with the default resolver.
pub fn resolve_tertiary_emotion(label: &str) -> Option<TertiaryEmotion> {
    DEFAULT_RESOLVER.resolve_tertiary(label)
}

/// Resolves a fully populated hierarchy with the default resolver.
pub fn resolve_emotion_path(label: &str) -> Option<EmotionPath> {
    DEFAULT_RESOLVER.resolve_path(label)
}

#[cfg(test)]
mod tests {
    use super::EmotionResolver;
    use crate::resolve::strategy::Strategy;
    use crate::taxonomy::CoreEmotion;

    #[test]
    fn traced_resolution_reports_first_matching_strategy() {
        let resolver = EmotionResolver::default();
        let cases = [
            ("Joy", CoreEmotion::Joy, Strategy::ExactCore),
            ("scared", CoreEmotion::Fear, Strategy::ExactVariant),
            ("Joyful", CoreEmotion::Joy, Strategy::Substring),
            ("grief", CoreEmotion::Sadness, Strategy::HierarchyLookup),
            ("ok", CoreEmotion::Joy, Strategy::Sentiment),
        ];
        for (label, core, strategy) in cases {
            let resolution = resolver
                .resolve_core_traced(label)
                .unwrap_or_else(|| panic!("`{label}` should resolve"));
            assert_eq!(resolution.core, core, "{label}");
            assert_eq!(resolution.strategy, strategy, "{label}");
        }
    }

    #[test]
    fn blank_label_is_unmatched() {
        let resolver = EmotionResolver::default();
        assert_eq!(resolver.resolve_core("   "), None);
        assert_eq!(resolver.resolve_secondary(""), None);
        assert_eq!(resolver.resolve_tertiary("\t"), None);
        assert_eq!(resolver.resolve_path(""), None);
    }
}
