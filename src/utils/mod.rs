//! Helpers for identifier allocation and URL processing.
//!
//! - [`alias`] - Custom alias sanitization and validation
//! - [`reserved_words`] - Identifiers that can never be assigned
//! - [`code_generator`] - Random short code generation
//! - [`url_normalizer`] - Target URL normalization

pub mod alias;
pub mod code_generator;
pub mod reserved_words;
pub mod url_normalizer;
