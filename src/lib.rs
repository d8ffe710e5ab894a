#![allow(clippy::module_inception)]

//! Syntax highlighting lexer for UWSCR code samples.
//!
//! The documentation host registers the lexer under the `uwscr` alias (see
//! [`registry::registry::LexerRegistry`]) and asks it for a sequence of
//! classified spans, which it styles per [`lexer::tokens::TokenKind`].

use serde::Serialize;

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod registry;

pub use errors::errors::{Error, ErrorImpl, ErrorTip};
pub use lexer::{
    lexer::{tokenize, tokenize_with, Lexer, LexerOptions},
    rules::{Dialect, RuleSet, State},
    tokens::{Token, TokenKind},
};
pub use registry::registry::{LanguageDefinition, LexerRegistry};

/// Byte range into the tokenized source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
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

/// Maps byte offsets to 1-based line and column numbers (columns count
/// characters), scanning the source once for non-decreasing offsets.
#[derive(Debug, Clone)]
pub struct LineTracker<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    column: usize,
}

impl<'a> LineTracker<'a> {
    pub fn new(source: &'a str) -> Self {
        LineTracker {
            source,
            offset: 0,
            line: 1,
            column: 1,
        }
    }

    /// Line and column of `position`, which must lie on a character boundary.
    pub fn locate(&mut self, position: usize) -> (usize, usize) {
        if position < self.offset {
            *self = LineTracker::new(self.source);
        }

        let skipped = self.source.get(self.offset..position).unwrap_or("");
        for c in skipped.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += skipped.len();

        (self.line, self.column)
    }
}
