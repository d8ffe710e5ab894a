use std::{collections::HashMap, fmt::Display};

use log::debug;
use regex::Regex;

use crate::{errors::errors::{Error, ErrorImpl}, RULE};

use super::tokens::{reserved_lookup, TokenKind};

/// Revision of the UWSCR documentation the rule table follows.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Dialect {
    /// UWSCR 1.1 documentation. Adds exception handling, `case`/`default`,
    /// `def_dll` and `struct` keywords.
    #[default]
    Current,
    /// 2022 documentation. `_` is an operator and all-caps words are numbers.
    Legacy,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum State {
    Root,
    String,
    Whitespace,
    Comment,
    TextBlock,
    TbComment,
    Number,
}

impl State {
    pub const ALL: [State; 7] = [
        State::Root,
        State::String,
        State::Whitespace,
        State::Comment,
        State::TextBlock,
        State::TbComment,
        State::Number,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            State::Root => "root",
            State::String => "string",
            State::Whitespace => "whitespace",
            State::Comment => "comment",
            State::TextBlock => "textblock",
            State::TbComment => "tbcomment",
            State::Number => "number",
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a matching rule emits.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Action {
    /// One token covering the whole match.
    Emit(TokenKind),
    /// One token per capture group, in group order. Empty groups emit nothing.
    ByGroups(&'static [TokenKind]),
    /// An identifier, classified through the dialect's keyword table.
    Symbol,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    None,
    Push(State),
    Pop,
}

#[derive(Debug, Clone)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub action: Action,
    pub transition: Transition,
}

/// One line of a state's declaration: either a rule of its own or the rules
/// of another state spliced in at that point.
#[derive(Debug, Clone)]
pub enum Entry {
    Include(State),
    Rule(RuleSpec),
}

#[derive(Debug, Clone)]
pub struct Rule {
    pub regex: Regex,
    pub action: Action,
    pub transition: Transition,
}

const CALL_URL_GROUPS: &[TokenKind] = &[
    TokenKind::Keyword,
    TokenKind::Whitespace,
    TokenKind::Keyword,
    TokenKind::Punctuation,
    TokenKind::Literal,
    TokenKind::Punctuation,
];

const TEXTBLOCK_GROUPS: &[TokenKind] = &[TokenKind::Keyword, TokenKind::Whitespace, TokenKind::Name];

/// Declared rule list of `state`, before includes are resolved.
pub fn declare(state: State, dialect: Dialect) -> Vec<Entry> {
    match state {
        State::Root => vec![
            Entry::Include(State::Comment),
            Entry::Include(State::Whitespace),
            Entry::Include(State::String),
            Entry::Include(State::Number),
            RULE!(r"\btextblock\b\r?(?:\n|\z)", Action::Emit(TokenKind::Keyword), Transition::Push(State::TbComment)),
            RULE!(r"\b(textblock|textblockex)\b(\s+)(\w+\r?(?:\n|\z))", Action::ByGroups(TEXTBLOCK_GROUPS), Transition::Push(State::TextBlock)),
            RULE!(r"(call)(\s+)(url)(\[)([^\]]+)(\])", Action::ByGroups(CALL_URL_GROUPS)),
            match dialect {
                Dialect::Current => RULE!(r"[,=.:?><|+\-*/!#]", Action::Emit(TokenKind::Operator)),
                Dialect::Legacy => RULE!(r"[,=.:?><|_+\-*/!#]", Action::Emit(TokenKind::Operator)),
            },
            RULE!(r"[()\[\]{}@;]", Action::Emit(TokenKind::Punctuation)),
            RULE!(r"\b[a-zA-Z_][a-zA-Z_0-9]*\b", Action::Symbol),
        ],
        State::String => vec![
            RULE!(r#""[^"]*""#, Action::Emit(TokenKind::String)),
            RULE!(r"'[^']*'", Action::Emit(TokenKind::String)),
        ],
        State::Whitespace => vec![
            RULE!(r" ", Action::Emit(TokenKind::Whitespace)),
            RULE!("\u{3000}", Action::Emit(TokenKind::Whitespace)),
        ],
        State::Comment => match dialect {
            Dialect::Current => vec![
                RULE!(r"//-", Action::Emit(TokenKind::Comment)),
                RULE!(r"//.*(?:\n|\z)", Action::Emit(TokenKind::Comment)),
            ],
            Dialect::Legacy => vec![
                RULE!(r"//.*(?:\n|\z)", Action::Emit(TokenKind::Comment)),
            ],
        },
        State::TextBlock => vec![
            RULE!(r"\bendtextblock\b", Action::Emit(TokenKind::Keyword), Transition::Pop),
            RULE!(r".+(?:\n|\z)", Action::Emit(TokenKind::String)),
        ],
        State::TbComment => vec![
            RULE!(r"\bendtextblock\b", Action::Emit(TokenKind::Comment), Transition::Pop),
            RULE!(r".+(?:\n|\z)", Action::Emit(TokenKind::Comment)),
        ],
        State::Number => match dialect {
            Dialect::Current => vec![
                RULE!(r"\b[0-9]+\b", Action::Emit(TokenKind::Number)),
                RULE!(r"\$\b[0-9a-fA-F]+\b", Action::Emit(TokenKind::Number)),
                RULE!(r"\bNaN+\b", Action::Emit(TokenKind::Number)),
            ],
            Dialect::Legacy => vec![
                RULE!(r"\b[0-9]+\b", Action::Emit(TokenKind::Number)),
                RULE!(r"\b\$[0-9a-fA-F]+\b", Action::Emit(TokenKind::Number)),
                RULE!(r"\b[A-Z0-9_]+\b", Action::Emit(TokenKind::Number)),
                RULE!(r"\bNaN+\b", Action::Emit(TokenKind::Number)),
            ],
        },
    }
}

/// Compiled rule table for one dialect.
///
/// Every pattern is compiled once. A state's effective rule list holds
/// indices into `rules`, so a rule spliced into several states by an
/// include is the same rule everywhere it appears.
#[derive(Debug, Clone)]
pub struct RuleSet {
    dialect: Dialect,
    rules: Vec<Rule>,
    states: HashMap<State, Vec<usize>>,
    keywords: &'static HashMap<&'static str, TokenKind>,
}

impl RuleSet {
    pub fn new(dialect: Dialect) -> Result<RuleSet, Error> {
        let mut rules = Vec::new();
        let mut own: HashMap<State, Vec<usize>> = HashMap::new();

        for state in State::ALL {
            let mut indices = vec![];
            for entry in declare(state, dialect) {
                if let Entry::Rule(declared) = entry {
                    indices.push(rules.len());
                    rules.push(compile(declared)?);
                }
            }
            own.insert(state, indices);
        }

        // Included states contribute their own rules only.
        let mut states = HashMap::new();
        for state in State::ALL {
            let mut indices = vec![];
            let mut own_rules = own[&state].iter();
            for entry in declare(state, dialect) {
                match entry {
                    Entry::Include(included) => indices.extend_from_slice(&own[&included]),
                    Entry::Rule(_) => indices.extend(own_rules.next()),
                }
            }
            states.insert(state, indices);
        }

        debug!("compiled {} rules for {:?} dialect", rules.len(), dialect);

        Ok(RuleSet {
            dialect,
            rules,
            states,
            keywords: reserved_lookup(dialect),
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rule(&self, index: usize) -> &Rule {
        &self.rules[index]
    }

    /// Effective rule indices of `state`, in priority order.
    pub fn rules_for(&self, state: State) -> &[usize] {
        self.states.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Classifies an identifier as a keyword, declaration keyword or plain name.
    pub fn classify(&self, word: &str) -> TokenKind {
        self.keywords.get(word).copied().unwrap_or(TokenKind::Name)
    }
}

fn compile(declared: RuleSpec) -> Result<Rule, Error> {
    let regex = Regex::new(declared.pattern).map_err(|err| {
        Error::new(ErrorImpl::InvalidPattern {
            pattern: declared.pattern.to_string(),
            reason: err.to_string(),
        })
    })?;

    Ok(Rule {
        regex,
        action: declared.action,
        transition: declared.transition,
    })
}
