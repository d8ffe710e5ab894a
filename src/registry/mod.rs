//! Language registration for the documentation host.
//!
//! The host owns a `LexerRegistry` and routes code blocks to a lexer by the
//! language tag on the block (`uwscr`) or by file name (`*.uws`).

pub mod registry;
