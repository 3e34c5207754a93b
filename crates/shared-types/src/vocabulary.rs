//! Bidirectional status vocabularies
//!
//! A status key renders differently in each source: the SSP uses prose
//! ("Partially implemented") while the OpenControl YAML uses canonical
//! keywords ("partial"). Each vocabulary is a static table ordered by
//! detection precedence.

use crate::source::Source;
use std::fmt::Debug;
use std::hash::Hash;

/// The text for one status key in each source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SrcMapping {
    pub ssp: &'static str,
    pub yaml: &'static str,
}

impl SrcMapping {
    pub const fn new(ssp: &'static str, yaml: &'static str) -> Self {
        Self { ssp, yaml }
    }

    /// Text for the given source
    pub fn text(&self, source: Source) -> &'static str {
        match source {
            Source::Ssp => self.ssp,
            Source::Yaml => self.yaml,
        }
    }

    /// Document prose may carry surrounding boilerplate, so this is a containment check
    pub fn is_doc_mapping_a_substr_of(&self, value: &str) -> bool {
        value.contains(self.ssp)
    }

    /// YAML keywords are canonical, so this is an exact match
    pub fn is_yaml_mapping_equal_to(&self, value: &str) -> bool {
        value == self.yaml
    }
}

/// A closed set of status keys with a text mapping per source
pub trait StatusKey: Copy + Ord + Eq + Hash + Debug + 'static {
    /// Every defined key, in detection precedence order
    const ALL: &'static [Self];

    /// Row label of the section holding these checkboxes in a summary table
    const FIELD: &'static str;

    fn mapping(self) -> SrcMapping;

    fn text(self, source: Source) -> &'static str {
        self.mapping().text(source)
    }

    /// Classify checkbox label text. The first key (in `ALL` order) whose
    /// document phrase occurs in `text` wins.
    fn detect_from_doc(text: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.mapping().is_doc_mapping_a_substr_of(text))
    }

    /// Resolve a YAML keyword
    fn from_yaml(value: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.mapping().is_yaml_mapping_equal_to(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImplementationKey, OriginKey};
    use std::collections::HashSet;

    fn assert_vocabulary_is_bijective<K: StatusKey>() {
        for source in [Source::Ssp, Source::Yaml] {
            let texts: Vec<&str> = K::ALL.iter().map(|k| k.text(source)).collect();
            assert!(
                texts.iter().all(|t| !t.is_empty()),
                "{source} has empty text"
            );
            let unique: HashSet<&str> = texts.iter().copied().collect();
            assert_eq!(unique.len(), texts.len(), "{source} texts are not distinct");
        }
    }

    fn assert_each_phrase_detects_itself<K: StatusKey>() {
        for key in K::ALL {
            assert_eq!(K::detect_from_doc(key.text(Source::Ssp)), Some(*key));
            assert_eq!(K::from_yaml(key.text(Source::Yaml)), Some(*key));
        }
    }

    #[test]
    fn test_origin_vocabulary_is_bijective() {
        assert_vocabulary_is_bijective::<OriginKey>();
        assert_each_phrase_detects_itself::<OriginKey>();
    }

    #[test]
    fn test_implementation_vocabulary_is_bijective() {
        assert_vocabulary_is_bijective::<ImplementationKey>();
        assert_each_phrase_detects_itself::<ImplementationKey>();
    }

    #[test]
    fn test_doc_mapping_is_substring_match() {
        let mapping = SrcMapping::new("Planned", "planned");
        assert!(mapping.is_doc_mapping_a_substr_of("\u{2610} Planned"));
        assert!(!mapping.is_doc_mapping_a_substr_of("planned"));
    }

    #[test]
    fn test_yaml_mapping_is_exact_match() {
        let mapping = SrcMapping::new("Planned", "planned");
        assert!(mapping.is_yaml_mapping_equal_to("planned"));
        assert!(!mapping.is_yaml_mapping_equal_to(" planned"));
        assert!(!mapping.is_yaml_mapping_equal_to("Planned"));
    }

    #[test]
    fn test_detect_first_match_wins() {
        // A label mentioning two phrases resolves to the earlier key
        let label =
            "Shared (Service Provider and Customer Responsibility) Service Provider Corporate";
        assert_eq!(
            OriginKey::detect_from_doc(label),
            Some(OriginKey::ServiceProviderCorporate)
        );
    }

    #[test]
    fn test_detect_unknown_label() {
        assert_eq!(
            ImplementationKey::detect_from_doc("Alternative implementation"),
            None
        );
        assert_eq!(OriginKey::from_yaml("Shared"), None);
    }
}
