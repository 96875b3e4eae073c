pub mod converter;
pub mod engine;
pub mod tables;
pub mod tokenizer;
pub mod types;
