/// Construction-time options for a [`Lexer`](super::lexer::Lexer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Skip runs of whitespace (anything the regex `\s` class accepts)
    /// before every match attempt. When off, whitespace has to be covered by
    /// a rule or it is reported as a lex error.
    pub skip_whitespace: bool,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_whitespace(mut self, skip_whitespace: bool) -> Self {
        self.skip_whitespace = skip_whitespace;
        self
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        LexerConfig {
            skip_whitespace: true,
        }
    }
}
