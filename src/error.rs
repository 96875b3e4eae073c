use thiserror::Error;

/// Boundary errors. The transliteration core itself is total over all
/// string inputs; these only arise where untyped bytes enter (the C API)
/// or leave (the plain-text export) the process.
#[derive(Debug, Error)]
pub enum TranslitError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("export failed: {0}")]
    Io(#[from] std::io::Error),
}
