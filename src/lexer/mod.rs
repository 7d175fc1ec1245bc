//! Rule-driven lexical analysis.
//!
//! This module turns an ordered list of `(pattern, kind)` rules into a
//! reusable lexer and scans text buffers with it:
//!
//! - Compiling the rules into one prioritised regex alternation
//! - Scanning a buffer token by token with an explicit cursor
//! - Optional whitespace skipping between tokens
//! - Lazy token streams and eager tokenization, both stopping at the first
//!   offset no rule matches

pub mod config;
pub mod lexer;
pub mod tokens;
