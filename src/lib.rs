#![allow(clippy::module_inception)]

use crate::errors::errors::{ErrorTip, LexError};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

/// Half-open byte range `[start, end)` in a scanned buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Maps a byte offset to `(1-based line number, line text, byte column)`.
///
/// Returns `None` when `position` is past the end of `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line.to_string(), position - start));
        }

        start = end;
    }

    None
}


/// Renders a caret diagnostic for `error` against the buffer it came from.
///
/// ```text
/// Error: LexerError
/// -> input
///   |
/// 1 | 12 @ 3
///   | ---^
/// ```
pub fn render_error(error: &LexError, source: &str, name: &str) -> String {
    let mut out = Vec::new();

    if let ErrorTip::None = error.get_tip() {
        out.push(format!("Error: {}", error.get_error_name()));
    } else {
        out.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    out.push(format!("-> {}", name));

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position())
    else {
        return out.join("\n");
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    out.push(format!("{:>padding$}", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    out.push(format!("{} | {}", line_string, line_text_removed.trim_end()));

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;
    out.push(format!("{:>padding$} {:->arrows$}", "|", "^"));

    out.join("\n")
}

pub fn display_error(error: &LexError, source: &str, name: &str) {
    println!("{}", render_error(error, source, name));
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();

    (&string[start..], start)
}
