// src/core/tables.rs
use crate::core::types::CharClass;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::info;

// The fixed character mappings, carried over verbatim from the original
// application data. They are a golden fixture: both 'ᱦ' and 'ᱷ' map to "ह",
// 'ᱲ' maps to the nukta pair "ड\u{93c}", and 'ᱚ'/'ᱳ' both romanize to "o".

const LATIN: &[(char, &str)] = &[
    ('ᱚ', "o"), ('ᱟ', "ā"), ('ᱤ', "i"), ('ᱩ', "u"), ('ᱮ', "e"), ('ᱳ', "o"),
    ('ᱶ', "ṅ"), ('ᱠ', "k"), ('ᱜ', "g"), ('ᱝ', "ṃ"), ('ᱪ', "c"), ('ᱡ', "j"),
    ('ᱧ', "ñ"), ('ᱴ', "ṭ"), ('ᱰ', "ḍ"), ('ᱬ', "ṇ"), ('ᱛ', "t"), ('ᱫ', "d"),
    ('ᱱ', "n"), ('ᱯ', "p"), ('ᱵ', "b"), ('ᱢ', "m"), ('ᱭ', "y"), ('ᱞ', "l"),
    ('ᱨ', "r"), ('ᱣ', "w"), ('ᱥ', "s"), ('ᱦ', "ẖ"), ('ᱲ', "ṛ"), ('ᱷ', "h"),
    ('᱐', "0"), ('᱑', "1"), ('᱒', "2"), ('᱓', "3"), ('᱔', "4"), ('᱕', "5"),
    ('᱖', "6"), ('᱗', "7"), ('᱘', "8"), ('᱙', "9"),
];

const VOWELS_FULL: &[(char, &str)] = &[
    ('ᱚ', "ओ"), ('ᱟ', "आ"), ('ᱤ', "इ"), ('ᱩ', "उ"), ('ᱮ', "ए"), ('ᱳ', "ओ"),
];

const VOWELS_MATRA: &[(char, &str)] = &[
    ('ᱚ', "ो"), ('ᱟ', "ा"), ('ᱤ', "ि"), ('ᱩ', "\u{941}"), ('ᱮ', "\u{947}"), ('ᱳ', "ो"),
];

const CONSONANTS: &[(char, &str)] = &[
    ('ᱶ', "ङ"), ('ᱠ', "क"), ('ᱜ', "ग"), ('ᱝ', "\u{902}"), ('ᱪ', "च"), ('ᱡ', "ज"),
    ('ᱧ', "ञ"), ('ᱴ', "ट"), ('ᱰ', "ड"), ('ᱬ', "ण"), ('ᱛ', "त"), ('ᱫ', "द"),
    ('ᱱ', "न"), ('ᱯ', "प"), ('ᱵ', "ब"), ('ᱢ', "म"), ('ᱭ', "य"), ('ᱞ', "ल"),
    ('ᱨ', "र"), ('ᱣ', "व"), ('ᱥ', "स"), ('ᱦ', "ह"), ('ᱲ', "ड\u{93c}"), ('ᱷ', "ह"),
];

const DIGITS: &[(char, &str)] = &[
    ('᱐', "०"), ('᱑', "१"), ('᱒', "२"), ('᱓', "३"), ('᱔', "४"),
    ('᱕', "५"), ('᱖', "६"), ('᱗', "७"), ('᱘', "८"), ('᱙', "९"),
];

/// The five read-only lookup tables, built once for the process lifetime.
pub struct MappingTables {
    latin: HashMap<char, &'static str>,
    vowels_full: HashMap<char, &'static str>,
    vowels_matra: HashMap<char, &'static str>,
    consonants: HashMap<char, &'static str>,
    digits: HashMap<char, &'static str>,
}

static TABLES: Lazy<MappingTables> = Lazy::new(MappingTables::build);

/// The process-wide table singleton. No mutation API exists; any number of
/// threads may read it concurrently.
pub fn shared() -> &'static MappingTables {
    &TABLES
}

impl MappingTables {
    fn build() -> Self {
        let tables = Self {
            latin: LATIN.iter().copied().collect(),
            vowels_full: VOWELS_FULL.iter().copied().collect(),
            vowels_matra: VOWELS_MATRA.iter().copied().collect(),
            consonants: CONSONANTS.iter().copied().collect(),
            digits: DIGITS.iter().copied().collect(),
        };
        tables.validate();
        info!(
            latin = tables.latin.len(),
            consonants = tables.consonants.len(),
            vowels = tables.vowels_full.len(),
            digits = tables.digits.len(),
            "mapping tables built"
        );
        tables
    }

    /// The tables are literals, so a violation here is a programming error:
    /// fail loudly at first use rather than mis-transliterate quietly.
    fn validate(&self) {
        assert_eq!(
            self.vowels_full.len(),
            self.vowels_matra.len(),
            "full-vowel and matra tables must have identical key sets"
        );
        for key in self.vowels_full.keys() {
            assert!(
                self.vowels_matra.contains_key(key),
                "vowel '{key}' has no matra form"
            );
        }
        for key in self.consonants.keys() {
            assert!(
                !self.vowels_full.contains_key(key) && !self.digits.contains_key(key),
                "'{key}' is classified as more than one category"
            );
        }
        for key in self.vowels_full.keys() {
            assert!(
                !self.digits.contains_key(key),
                "'{key}' is classified as more than one category"
            );
        }
        let all_values = self
            .latin
            .values()
            .chain(self.vowels_full.values())
            .chain(self.vowels_matra.values())
            .chain(self.consonants.values())
            .chain(self.digits.values());
        for value in all_values {
            assert!(!value.is_empty(), "mapping values must be non-empty");
        }
    }

    /// Classifies one character for the Devanagari pass. Disjointness of the
    /// categories (checked in `validate`) makes the probe order irrelevant.
    pub fn classify(&self, c: char) -> CharClass {
        if let Some(&dev) = self.consonants.get(&c) {
            CharClass::Consonant(dev)
        } else if let Some(&full) = self.vowels_full.get(&c) {
            CharClass::Vowel {
                full,
                matra: self.vowels_matra[&c],
            }
        } else if let Some(&dev) = self.digits.get(&c) {
            CharClass::Digit(dev)
        } else {
            CharClass::Opaque(c)
        }
    }

    /// Flat Latin lookup; `None` means the character is opaque.
    pub fn latin(&self, c: char) -> Option<&'static str> {
        self.latin.get(&c).copied()
    }

    pub(crate) fn consonant_entries(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.consonants.iter().map(|(&c, &v)| (c, v))
    }

    pub(crate) fn vowel_entries(
        &self,
    ) -> impl Iterator<Item = (char, &'static str, &'static str)> + '_ {
        self.vowels_full
            .iter()
            .map(|(&c, &full)| (c, full, self.vowels_matra[&c]))
    }

    pub(crate) fn latin_entries(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.latin.iter().map(|(&c, &v)| (c, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::CharClass;

    #[test]
    fn categories_are_disjoint_and_matras_paired() {
        // validate() panics on violation; force construction.
        let tables = shared();
        assert_eq!(tables.vowels_full.len(), 6);
        assert_eq!(tables.vowels_matra.len(), 6);
        assert_eq!(tables.consonants.len(), 24);
        assert_eq!(tables.digits.len(), 10);
        assert_eq!(tables.latin.len(), 40);
    }

    #[test]
    fn classification_is_tagged_once() {
        let tables = shared();
        assert_eq!(tables.classify('ᱛ'), CharClass::Consonant("त"));
        assert_eq!(
            tables.classify('ᱟ'),
            CharClass::Vowel { full: "आ", matra: "ा" }
        );
        assert_eq!(tables.classify('᱑'), CharClass::Digit("१"));
        assert_eq!(tables.classify('-'), CharClass::Opaque('-'));
        assert_eq!(tables.classify('x'), CharClass::Opaque('x'));
    }

    #[test]
    fn golden_duplicates_are_preserved() {
        // Apparent duplicates in the source data are intentional and pinned.
        let tables = shared();
        assert_eq!(tables.classify('ᱦ'), CharClass::Consonant("ह"));
        assert_eq!(tables.classify('ᱷ'), CharClass::Consonant("ह"));
        assert_eq!(tables.classify('ᱲ'), CharClass::Consonant("ड\u{93c}"));
        assert_eq!(tables.latin('ᱚ'), Some("o"));
        assert_eq!(tables.latin('ᱳ'), Some("o"));
        assert_eq!(tables.latin('ᱦ'), Some("ẖ"));
    }

    #[test]
    fn latin_digits_are_ascii() {
        let tables = shared();
        assert_eq!(tables.latin('᱐'), Some("0"));
        assert_eq!(tables.latin('᱙'), Some("9"));
    }
}
