use lazy_static::lazy_static;
use serde::{Serialize, Serializer};
use std::{collections::HashMap, fmt::Display};

use crate::Span;

use super::rules::Dialect;

/// Control-flow and expression keywords shared by every dialect.
pub const KEYWORDS: &[&str] = &[
    "print", "for", "in", "next", "endfor",
    "async", "await",
    "if", "then", "else", "elseif", "endif",
    "var", "ref", "args", "prms",
    "while", "wend", "repeat", "until",
    "break", "continue",
];

/// Exception handling keywords, added in the 1.1 documentation.
pub const EXCEPTION_KEYWORDS: &[&str] = &["try", "except", "finally", "endtry"];

/// Declaration keywords and their end markers shared by every dialect.
pub const DECLARATION_KEYWORDS: &[&str] = &[
    "dim", "public", "const",
    "function", "procedure", "fend",
    "hashtbl", "hash", "endhash", "enum", "endenum",
    "select", "selend", "with", "endwith",
    "module", "endmodule", "class", "endclass",
];

/// Declaration keywords added in the 1.1 documentation.
pub const EXTENDED_DECLARATION_KEYWORDS: &[&str] = &[
    "case", "default", "def_dll", "struct", "endstruct",
];

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = build_lookup(Dialect::Current);
    pub static ref LEGACY_RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = build_lookup(Dialect::Legacy);
}

fn build_lookup(dialect: Dialect) -> HashMap<&'static str, TokenKind> {
    let mut map = HashMap::new();
    for word in KEYWORDS {
        map.insert(*word, TokenKind::Keyword);
    }
    for word in DECLARATION_KEYWORDS {
        map.insert(*word, TokenKind::KeywordDeclaration);
    }
    if dialect == Dialect::Current {
        for word in EXCEPTION_KEYWORDS {
            map.insert(*word, TokenKind::Keyword);
        }
        for word in EXTENDED_DECLARATION_KEYWORDS {
            map.insert(*word, TokenKind::KeywordDeclaration);
        }
    }
    map
}

/// Keyword lookup table in force for `dialect`.
pub fn reserved_lookup(dialect: Dialect) -> &'static HashMap<&'static str, TokenKind> {
    match dialect {
        Dialect::Current => &RESERVED_LOOKUP,
        Dialect::Legacy => &LEGACY_RESERVED_LOOKUP,
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Keyword,
    KeywordDeclaration,
    Name,
    Whitespace,
    Comment,
    String,
    Number,
    Punctuation,
    Operator,
    Literal,

    // Only produced with `LexerOptions::emit_unmatched`
    Error,
}

impl TokenKind {
    /// Dotted category name handed to the rendering host.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::KeywordDeclaration => "Keyword.Declaration",
            TokenKind::Name => "Name",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::Comment => "Comment",
            TokenKind::String => "String",
            TokenKind::Number => "Number",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Operator => "Operator",
            TokenKind::Literal => "Literal",
            TokenKind::Error => "Error",
        }
    }

    /// Short CSS class conventionally attached to spans of this category.
    pub fn css_class(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "k",
            TokenKind::KeywordDeclaration => "kd",
            TokenKind::Name => "n",
            TokenKind::Whitespace => "w",
            TokenKind::Comment => "c",
            TokenKind::String => "s",
            TokenKind::Number => "m",
            TokenKind::Punctuation => "p",
            TokenKind::Operator => "o",
            TokenKind::Literal => "l",
            TokenKind::Error => "err",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}
