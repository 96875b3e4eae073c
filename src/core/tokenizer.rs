// src/core/tokenizer.rs

/// Splits input into whitespace-delimited words: leading/trailing whitespace
/// dropped, runs of whitespace collapsed. Empty and all-whitespace input
/// yield an empty sequence. Total over all strings.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}
