pub mod c_api;
pub mod core;
pub mod error;
pub mod export;

pub use crate::core::engine::TransliterationEngine;
pub use crate::core::types::Script;
pub use crate::error::TranslitError;
