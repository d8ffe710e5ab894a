use std::collections::VecDeque;

use lazy_static::lazy_static;
use log::{debug, trace};
use regex::Match;

use crate::{Span, MK_TOKEN};

use super::{
    rules::{Action, Dialect, RuleSet, State, Transition},
    tokens::{Token, TokenKind},
};

lazy_static! {
    pub static ref DEFAULT_RULES: RuleSet =
        RuleSet::new(Dialect::Current).expect("built-in UWSCR patterns compile");
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Emit skipped characters as `TokenKind::Error` instead of dropping them.
    pub emit_unmatched: bool,
}

/// Where a rule's next match was last seen.
///
/// The cursor only moves forward, so a leftmost match found at `At(n)` stays
/// the leftmost match for every cursor position up to `n`, and `Never(from)`
/// holds for every cursor position past `from`.
#[derive(Debug, Clone, Copy)]
enum Lookahead {
    Unknown,
    At(usize),
    Never(usize),
}

/// Lazy tokenizer over one source text.
///
/// Owns its state stack for the lifetime of the scan; nothing is shared
/// between two lexers, so running the same input twice yields the same
/// tokens.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    rules: &'a RuleSet,
    options: LexerOptions,
    pos: usize,
    stack: Vec<State>,
    pending: VecDeque<Token>,
    lookahead: Vec<Lookahead>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, rules: &'a RuleSet, options: LexerOptions) -> Lexer<'a> {
        Lexer {
            source,
            rules,
            options,
            pos: 0,
            stack: vec![State::Root],
            pending: VecDeque::new(),
            lookahead: vec![Lookahead::Unknown; rules.len()],
        }
    }

    /// Active state, the top of the stack.
    pub fn state(&self) -> State {
        self.stack.last().copied().unwrap_or(State::Root)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    fn push(&mut self, kind: TokenKind, start: usize, end: usize) {
        self.pending.push_back(MK_TOKEN!(
            kind,
            self.source[start..end].to_string(),
            Span { start, end }
        ));
    }

    /// Non-empty match of rule `index` starting exactly at the cursor.
    fn match_here(&mut self, index: usize) -> Option<Match<'a>> {
        match self.lookahead[index] {
            Lookahead::Never(from) if from <= self.pos => return None,
            Lookahead::At(start) if start > self.pos => return None,
            _ => {}
        }

        let rules = self.rules;
        let regex = &rules.rule(index).regex;
        match regex.find_at(self.source, self.pos) {
            None => {
                self.lookahead[index] = Lookahead::Never(self.pos);
                None
            }
            Some(found) => {
                self.lookahead[index] = Lookahead::At(found.start());
                if found.start() == self.pos && found.end() > found.start() {
                    Some(found)
                } else {
                    None
                }
            }
        }
    }

    fn apply(&mut self, index: usize, found: Match<'a>) {
        let rules = self.rules;
        let rule = rules.rule(index);
        let (start, end) = (found.start(), found.end());

        match rule.action {
            Action::Emit(kind) => self.push(kind, start, end),
            Action::Symbol => {
                let kind = rules.classify(found.as_str());
                self.push(kind, start, end);
            }
            Action::ByGroups(kinds) => {
                if let Some(captures) = rule.regex.captures_at(self.source, start) {
                    for (group, kind) in kinds.iter().enumerate() {
                        if let Some(matched) = captures.get(group + 1) {
                            if !matched.is_empty() {
                                self.push(*kind, matched.start(), matched.end());
                            }
                        }
                    }
                }
            }
        }

        self.advance_n(end - start);

        match rule.transition {
            Transition::None => {}
            Transition::Push(state) => {
                debug!("push {} at {}", state, start);
                self.stack.push(state);
            }
            Transition::Pop => {
                if self.stack.len() > 1 {
                    let state = self.stack.pop();
                    debug!("pop {:?} at {}", state, start);
                }
            }
        }
    }

    /// Skips one character that no rule of the active state accepts.
    fn skip(&mut self) {
        let Some(ch) = self.at() else {
            return;
        };
        let start = self.pos;
        trace!("no rule of {} matched {:?} at {}", self.state(), ch, start);

        self.advance_n(ch.len_utf8());
        if self.options.emit_unmatched {
            self.push(TokenKind::Error, start, self.pos);
        }
    }

    fn step(&mut self) {
        let rules = self.rules;
        for &index in rules.rules_for(self.state()) {
            if let Some(found) = self.match_here(index) {
                self.apply(index, found);
                return;
            }
        }

        self.skip();
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Some(token);
            }
            if self.at_eof() {
                return None;
            }
            self.step();
        }
    }
}

/// Tokenizes `source` with the built-in UWSCR rules and default options.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source, &DEFAULT_RULES, LexerOptions::default())
}

/// Tokenizes `source` with an explicit rule set and options.
pub fn tokenize_with<'a>(source: &'a str, rules: &'a RuleSet, options: LexerOptions) -> Lexer<'a> {
    Lexer::new(source, rules, options)
}
