use std::fmt::Display;

use thiserror::Error;

/// Raised while building a [`Lexer`](crate::lexer::lexer::Lexer) from its rules.
///
/// Construction is all-or-nothing: when this is returned no lexer exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("a lexer needs at least one rule")]
    EmptyRuleSet,
    #[error("invalid pattern for rule {index} ({pattern:?}): {message}")]
    InvalidPattern {
        index: usize,
        pattern: String,
        message: String,
    },
    #[error("rule patterns could not be combined: {message}")]
    CombinedPattern { message: String },
}

impl CompileError {
    pub fn get_error_name(&self) -> &str {
        match self {
            CompileError::EmptyRuleSet => "EmptyRuleSet",
            CompileError::InvalidPattern { .. } => "InvalidPattern",
            CompileError::CombinedPattern { .. } => "CombinedPattern",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            CompileError::EmptyRuleSet => ErrorTip::Suggestion(String::from(
                "Provide at least one (pattern, kind) rule",
            )),
            CompileError::InvalidPattern { index, pattern, .. } => ErrorTip::Suggestion(format!(
                "Rule {} has an invalid pattern: `{}`",
                index, pattern
            )),
            CompileError::CombinedPattern { .. } => ErrorTip::Suggestion(String::from(
                "Every rule compiles alone but the joined pattern is too large, try fewer or simpler rules",
            )),
        }
    }
}

/// No rule matched at `position` (a byte offset into the scanned buffer).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("no rule matches at position {position}")]
pub struct LexError {
    pub position: usize,
}

impl LexError {
    pub fn new(position: usize) -> Self {
        LexError { position }
    }

    pub fn get_position(&self) -> usize {
        self.position
    }

    pub fn get_error_name(&self) -> &str {
        "LexerError"
    }

    pub fn get_tip(&self) -> ErrorTip {
        ErrorTip::None
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
