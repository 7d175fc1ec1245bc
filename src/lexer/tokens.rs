use std::fmt::Display;

use crate::Span;

/// A recognised lexeme: the kind of the rule that matched, the exact text it
/// matched and the byte offset where the match started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<K> {
    pub kind: K,
    pub value: String,
    pub position: usize,
}

impl<K> Token<K> {
    /// Byte offset one past the last byte of the token.
    pub fn end(&self) -> usize {
        self.position + self.value.len()
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.position,
            end: self.end(),
        }
    }
}

impl<K: Display> Display for Token<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}) at {}", self.kind, self.value, self.position)
    }
}

/// Token kinds of the small arithmetic language used by the demo binary.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Number,
    Identifier,

    Plus,
    Minus,
    Multiply,
    Divide,

    OpenParen,
    CloseParen,

    Equals,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::OpenParen => "LP",
            TokenKind::CloseParen => "RP",
            TokenKind::Equals => "EQUALS",
        };

        write!(f, "{}", name)
    }
}

/// Rule table for arithmetic expressions, most specific first.
pub const ARITHMETIC_RULES: &[(&str, TokenKind)] = &[
    (r"\d+", TokenKind::Number),
    (r"[a-zA-Z_]\w*", TokenKind::Identifier),
    (r"\+", TokenKind::Plus),
    (r"-", TokenKind::Minus),
    (r"\*", TokenKind::Multiply),
    (r"/", TokenKind::Divide),
    (r"\(", TokenKind::OpenParen),
    (r"\)", TokenKind::CloseParen),
    (r"=", TokenKind::Equals),
];
