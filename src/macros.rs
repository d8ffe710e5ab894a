//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the tokenizer:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `RULE!` - Declares one entry of a lexer state's rule table
//!
//! These macros keep the rule tables in `lexer::rules` readable as data.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), Span { start: 0, end: 2 });
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Declares a rule table entry.
///
/// The optional third argument is the state transition taken after the rule
/// matches; without it the active state is left unchanged.
///
/// # Example
///
/// ```ignore
/// RULE!(r"\bendtextblock\b", Action::Emit(TokenKind::Keyword), Transition::Pop)
/// ```
#[macro_export]
macro_rules! RULE {
    ($pattern:expr, $action:expr) => {
        Entry::Rule(RuleSpec {
            pattern: $pattern,
            action: $action,
            transition: Transition::None,
        })
    };
    ($pattern:expr, $action:expr, $transition:expr) => {
        Entry::Rule(RuleSpec {
            pattern: $pattern,
            action: $action,
            transition: $transition,
        })
    };
}
