//! Error types for rule compilation and scanning.
//!
//! - `CompileError` is returned when a rule set cannot be turned into a lexer
//! - `LexError` is returned when no rule matches at some buffer offset
//! - `ErrorTip` carries an optional human-readable suggestion for diagnostics

pub mod errors;
