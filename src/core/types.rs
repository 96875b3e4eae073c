// src/core/types.rs
use crate::error::TranslitError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The target script of a transliteration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Devanagari,
}

impl FromStr for Script {
    type Err = TranslitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin" => Ok(Script::Latin),
            "devanagari" | "deva" => Ok(Script::Devanagari),
            other => Err(TranslitError::InvalidInput(format!(
                "unknown script '{other}', expected 'latin' or 'devanagari'"
            ))),
        }
    }
}

/// A single Ol Chiki character classified against the fixed mapping tables.
///
/// Classification happens exactly once per character; both transliteration
/// passes dispatch on the tag instead of probing each table separately.
/// The categories are mutually exclusive (checked when the tables are built).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Consonant(&'static str),
    /// A vowel carries both of its Devanagari renderings; which one is
    /// emitted depends on the per-word lookback state.
    Vowel {
        full: &'static str,
        matra: &'static str,
    },
    Digit(&'static str),
    /// Not in any table: passed through unchanged.
    Opaque(char),
}
