//! Error types for the highlighter.
//!
//! Tokenization itself never fails; unmatched input is skipped. Errors come
//! from building rule tables, looking up languages in the registry, and the
//! command line front end:
//!
//! - Error structures wrapping a specific error variant
//! - Error names and helpful suggestions for reporting

pub mod errors;

#[cfg(test)]
mod tests;
