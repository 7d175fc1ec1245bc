use std::{fmt::Debug, iter::FusedIterator};

use lazy_static::lazy_static;
use regex::{CaptureLocations, Regex};
use tracing::{debug, trace};

use crate::{
    errors::errors::{CompileError, LexError},
    MK_TOKEN,
};

use super::{config::LexerConfig, tokens::Token};

lazy_static! {
    /// Whitespace skipping jumps to the next match of this, independent of the rules.
    static ref NON_WHITESPACE: Regex = Regex::new(r"\S").expect("static pattern is valid");
}

const ALTERNATIVE_PREFIX: &str = "relex_alt_";

/// A single `(pattern, kind)` pair. Several rules may share a kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule<K> {
    pub pattern: String,
    pub kind: K,
}

impl<K> Rule<K> {
    pub fn new(pattern: impl Into<String>, kind: K) -> Self {
        Rule {
            pattern: pattern.into(),
            kind,
        }
    }
}

impl<P: Into<String>, K> From<(P, K)> for Rule<K> {
    fn from((pattern, kind): (P, K)) -> Self {
        Rule::new(pattern, kind)
    }
}

/// Capture group of one rule inside the combined pattern, in rule order.
#[derive(Debug, Clone)]
struct Alternative<K> {
    group: usize,
    kind: K,
}

/// A compiled rule set.
///
/// All rules are joined into one alternation `(?P<relex_alt_1>p1)|...|(?P<relex_alt_N>pN)`.
/// The regex engine resolves alternations leftmost-first, so when several
/// rules match at the same offset the earliest listed one wins even if a
/// later one would match more text. Order keywords before identifiers.
///
/// A `Lexer` is immutable once built. `regex::Regex` is safe for concurrent
/// read-only use, so the lexer is `Send + Sync` whenever `K` is and one
/// instance can feed scanners on many threads.
#[derive(Debug, Clone)]
pub struct Lexer<K> {
    rules: Vec<Rule<K>>,
    regex: Regex,
    alternatives: Vec<Alternative<K>>,
    config: LexerConfig,
}

impl<K: Clone> Lexer<K> {
    /// Compiles `rules` with the default configuration (whitespace is skipped).
    pub fn new<I, P>(rules: I) -> Result<Lexer<K>, CompileError>
    where
        I: IntoIterator<Item = (P, K)>,
        P: Into<String>,
    {
        Lexer::with_config(rules, LexerConfig::default())
    }

    pub fn with_config<I, P>(rules: I, config: LexerConfig) -> Result<Lexer<K>, CompileError>
    where
        I: IntoIterator<Item = (P, K)>,
        P: Into<String>,
    {
        let rules: Vec<Rule<K>> = rules.into_iter().map(Into::into).collect();

        if rules.is_empty() {
            return Err(CompileError::EmptyRuleSet);
        }

        let mut parts = Vec::with_capacity(rules.len());

        for (index, rule) in rules.iter().enumerate() {
            // Checked alone so the error can point at the offending rule.
            if let Err(err) = Regex::new(&rule.pattern) {
                return Err(CompileError::InvalidPattern {
                    index,
                    pattern: rule.pattern.clone(),
                    message: err.to_string(),
                });
            }

            parts.push(format!(
                "(?P<{}{}>{})",
                ALTERNATIVE_PREFIX,
                index + 1,
                rule.pattern
            ));
        }

        let regex = Regex::new(&parts.join("|")).map_err(|err| CompileError::CombinedPattern {
            message: err.to_string(),
        })?;

        let alternatives = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| -> Result<Alternative<K>, CompileError> {
                let name = format!("{}{}", ALTERNATIVE_PREFIX, index + 1);
                let group = regex
                    .capture_names()
                    .position(|group_name| group_name == Some(name.as_str()))
                    .ok_or_else(|| CompileError::CombinedPattern {
                        message: format!("missing capture group {}", name),
                    })?;

                Ok(Alternative {
                    group,
                    kind: rule.kind.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            rules = rules.len(),
            skip_whitespace = config.skip_whitespace,
            "compiled rule set"
        );

        Ok(Lexer {
            rules,
            regex,
            alternatives,
            config,
        })
    }
}

impl<K> Lexer<K> {
    pub fn rules(&self) -> &[Rule<K>] {
        &self.rules
    }

    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Binds `source` to a fresh scanner with its cursor at 0.
    pub fn input<'a>(&'a self, source: &'a str) -> Scanner<'a, K> {
        Scanner {
            lexer: self,
            source,
            cursor: 0,
            state: ScanState::Ready,
            locations: self.regex.capture_locations(),
        }
    }

    /// Lazy token stream over `source`.
    pub fn tokens<'a>(&'a self, source: &'a str) -> Tokens<'a, K> {
        self.input(source).tokens()
    }

    /// Matches the alternation starting exactly at `start`.
    ///
    /// The search runs over the whole buffer so `\b` and `^` see the text
    /// before `start`, and any match that begins later is rejected.
    fn match_at(
        &self,
        source: &str,
        start: usize,
        locations: &mut CaptureLocations,
    ) -> Option<(&K, usize)> {
        let found = self.regex.captures_read_at(locations, source, start)?;

        if found.start() != start {
            return None;
        }

        let end = found.end();

        self.alternatives
            .iter()
            .find(|alternative| locations.get(alternative.group).is_some())
            .map(|alternative| (&alternative.kind, end))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    Ready,
    /// End of input was reached. Stays here for good.
    Exhausted,
    /// No rule matched. Every later call reports the same error.
    Failed(LexError),
}

/// Cursor over one input buffer.
///
/// Holds no locks; a scanner belongs to a single caller. Rules whose pattern
/// can match the empty string produce zero-length tokens without moving the
/// cursor, so a stream built on such a rule may never end. Keeping those
/// rules from matching empty text is up to the caller.
#[derive(Debug, Clone)]
pub struct Scanner<'a, K> {
    lexer: &'a Lexer<K>,
    source: &'a str,
    cursor: usize,
    state: ScanState,
    locations: CaptureLocations,
}

impl<'a, K> Scanner<'a, K> {
    /// Rebinds the scanner to `source`, resetting the cursor and clearing
    /// any end-of-input or error state.
    pub fn input(&mut self, source: &'a str) {
        self.source = source;
        self.cursor = 0;
        self.state = ScanState::Ready;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn lexer(&self) -> &'a Lexer<K> {
        self.lexer
    }

    pub fn tokens(self) -> Tokens<'a, K> {
        Tokens {
            scanner: self,
            finished: false,
        }
    }
}

impl<'a, K: Clone + Debug> Scanner<'a, K> {
    /// Returns the next token, `Ok(None)` at end of input, or the position
    /// where no rule matched.
    pub fn next_token(&mut self) -> Result<Option<Token<K>>, LexError> {
        match self.state {
            ScanState::Exhausted => return Ok(None),
            ScanState::Failed(error) => return Err(error),
            ScanState::Ready => {}
        }

        if self.cursor >= self.source.len() {
            self.state = ScanState::Exhausted;
            return Ok(None);
        }

        if self.lexer.config.skip_whitespace {
            match NON_WHITESPACE.find_at(self.source, self.cursor) {
                Some(found) => self.cursor = found.start(),
                None => {
                    self.state = ScanState::Exhausted;
                    return Ok(None);
                }
            }
        }

        let start = self.cursor;

        match self.lexer.match_at(self.source, start, &mut self.locations) {
            Some((kind, end)) => {
                let token = MK_TOKEN!(kind.clone(), self.source[start..end].to_string(), start);
                trace!(kind = ?token.kind, value = %token.value, position = start, "token");

                self.cursor = end;
                Ok(Some(token))
            }
            None => {
                let error = LexError::new(start);
                debug!(position = start, "no rule matches");

                self.state = ScanState::Failed(error);
                Err(error)
            }
        }
    }
}

impl<'a, K: Clone + Debug> IntoIterator for Scanner<'a, K> {
    type Item = Result<Token<K>, LexError>;
    type IntoIter = Tokens<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens()
    }
}

/// Forward-only token stream over one scanner.
///
/// Ends at end of input. On a lex error it yields that error once and then
/// ends; scanning the buffer again needs a new scanner.
#[derive(Debug, Clone)]
pub struct Tokens<'a, K> {
    scanner: Scanner<'a, K>,
    finished: bool,
}

impl<'a, K> Tokens<'a, K> {
    pub fn scanner(&self) -> &Scanner<'a, K> {
        &self.scanner
    }
}

impl<'a, K: Clone + Debug> Iterator for Tokens<'a, K> {
    type Item = Result<Token<K>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.scanner.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(error) => {
                self.finished = true;
                Some(Err(error))
            }
        }
    }
}

impl<'a, K: Clone + Debug> FusedIterator for Tokens<'a, K> {}

/// Scans all of `source` up front.
///
/// Every token is held in memory at once; prefer [`Lexer::tokens`] for very
/// large buffers or when only a prefix is needed.
pub fn tokenize<K: Clone + Debug>(
    lexer: &Lexer<K>,
    source: &str,
) -> Result<Vec<Token<K>>, LexError> {
    lexer.tokens(source).collect()
}
