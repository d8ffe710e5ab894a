//! Unit tests for error handling.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnknownLanguage {
        name: "vbscript".to_string(),
    });

    assert_eq!(error.get_error_name(), "UnknownLanguage");
}

#[test]
fn test_error_display() {
    let error = Error::new(ErrorImpl::DuplicateAlias {
        alias: "uwscr".to_string(),
    });

    assert_eq!(error.to_string(), "alias \"uwscr\" already registered");
}

#[test]
fn test_invalid_pattern_error() {
    let error = Error::new(ErrorImpl::InvalidPattern {
        pattern: "(".to_string(),
        reason: "unclosed group".to_string(),
    });

    assert_eq!(error.get_error_name(), "InvalidPattern");
    assert!(error.to_string().contains("unclosed group"));
}

#[test]
fn test_error_from_impl() {
    let error: Error = ErrorImpl::UnknownLanguage {
        name: "vbs".to_string(),
    }
    .into();

    assert_eq!(error.get_error_name(), "UnknownLanguage");
    assert_eq!(
        error.kind(),
        &ErrorImpl::UnknownLanguage {
            name: "vbs".to_string()
        }
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(ErrorImpl::Io {
        path: "missing.uws".to_string(),
        reason: "not found".to_string(),
    });

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(ErrorImpl::UnknownLanguage {
        name: "uws".to_string(),
    });

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert!(tip.contains("`uws`")),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
