use std::fmt::Display;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
}

impl Error {
    pub fn new(error_impl: ErrorImpl) -> Self {
        Error {
            internal_error: error_impl,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { .. } => "InvalidPattern",
            ErrorImpl::UnknownLanguage { .. } => "UnknownLanguage",
            ErrorImpl::DuplicateAlias { .. } => "DuplicateAlias",
            ErrorImpl::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidPattern { pattern, reason } => ErrorTip::Suggestion(format!(
                "Pattern `{}` does not compile: {}",
                pattern, reason
            )),
            ErrorImpl::UnknownLanguage { name } => ErrorTip::Suggestion(format!(
                "No lexer is registered under `{}`, is the alias spelled correctly?",
                name
            )),
            ErrorImpl::DuplicateAlias { alias } => {
                ErrorTip::Suggestion(format!("Alias `{}` is already registered", alias))
            }
            ErrorImpl::Io { .. } => ErrorTip::None,
        }
    }
}

impl From<ErrorImpl> for Error {
    fn from(error_impl: ErrorImpl) -> Self {
        Error::new(error_impl)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("invalid pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("unknown language {name:?}")]
    UnknownLanguage { name: String },
    #[error("alias {alias:?} already registered")]
    DuplicateAlias { alias: String },
    #[error("cannot read {path:?}: {reason}")]
    Io { path: String, reason: String },
}
