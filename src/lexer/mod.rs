//! Lexical analysis for UWSCR code samples.
//!
//! This module contains the table-driven tokenizer that classifies source
//! text into highlighting categories. It handles:
//!
//! - Rule tables per lexer state, with shared rule-sets composed into `root`
//! - A state stack for `textblock` regions (string or comment bodies)
//! - Keyword, declaration keyword and identifier classification
//! - Skipping of input no rule accepts, so a scan always terminates

pub mod lexer;
pub mod rules;
pub mod tokens;
