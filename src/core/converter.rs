// src/core/converter.rs
use crate::core::tables::{self, MappingTables};
use crate::core::tokenizer::tokenize;
use crate::core::types::CharClass;

/// Per-word lookback state for the Devanagari pass.
///
/// Devanagari writes a vowel that follows a consonant as a dependent sign
/// (matra) attached to that consonant, and as a free-standing letter
/// everywhere else. One symbol of lookback is all the mapping needs: Ol Chiki
/// has no consonant clusters requiring conjunct logic here, so each consonant
/// maps to a self-contained consonant-plus-inherent-vowel unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VowelContext {
    AfterConsonant,
    #[default]
    AfterOther,
}

impl VowelContext {
    /// The transition table: only a consonant enters `AfterConsonant`;
    /// vowels, digits and opaque characters all reset to `AfterOther`.
    pub fn advance(self, class: &CharClass) -> Self {
        match class {
            CharClass::Consonant(_) => VowelContext::AfterConsonant,
            CharClass::Vowel { .. } | CharClass::Digit(_) | CharClass::Opaque(_) => {
                VowelContext::AfterOther
            }
        }
    }
}

/// The two transliteration passes over tokenized input. Stateless between
/// calls; the only state anywhere is the word-local `VowelContext`.
pub struct ScriptConverter {
    tables: &'static MappingTables,
}

impl ScriptConverter {
    pub fn new() -> Self {
        Self {
            tables: tables::shared(),
        }
    }

    /// Flat substitution, one character at a time. Unmapped characters pass
    /// through verbatim.
    pub fn to_latin(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .map(|word| self.word_to_latin(word))
            .collect()
    }

    /// The stateful pass: same length/order contract as `to_latin`, with the
    /// consonant-vowel rule applied independently per word.
    pub fn to_devanagari(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .map(|word| self.word_to_devanagari(word))
            .collect()
    }

    fn word_to_latin(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len());
        for c in word.chars() {
            match self.tables.latin(c) {
                Some(mapped) => out.push_str(mapped),
                None => out.push(c),
            }
        }
        out
    }

    fn word_to_devanagari(&self, word: &str) -> String {
        let mut out = String::with_capacity(word.len() * 2);
        // State is word-local: every word starts in AfterOther.
        let mut ctx = VowelContext::AfterOther;
        for c in word.chars() {
            let class = self.tables.classify(c);
            match class {
                CharClass::Consonant(dev) => out.push_str(dev),
                CharClass::Vowel { full, matra } => out.push_str(match ctx {
                    VowelContext::AfterConsonant => matra,
                    VowelContext::AfterOther => full,
                }),
                CharClass::Digit(dev) => out.push_str(dev),
                CharClass::Opaque(ch) => out.push(ch),
            }
            ctx = ctx.advance(&class);
        }
        out
    }
}

impl Default for ScriptConverter {
    fn default() -> Self {
        Self::new()
    }
}
