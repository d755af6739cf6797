//! Error types for SHML translation
//!
//! Both errors are fatal to a single `process` call: the translator surfaces
//! the first one it encounters and no partial output is produced.

use std::fmt;

/// Reasons tag declaration extraction can fail.
///
/// Produced by the tag tokenizer; the translator wraps the failing reason
/// together with the offending declaration into [`ProcessError::MalformedTag`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagError {
    /// The declaration does not begin with the tag-open marker `<`.
    MissingOpenMarker,
    /// No tag name immediately follows the tag-open marker.
    MissingTagName,
    /// The declaration never reaches a closing `>`.
    MissingCloseMarker,
}

impl std::error::Error for TagError {}

impl fmt::Display for TagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagError::MissingOpenMarker => write!(f, "declaration does not start with '<'"),
            TagError::MissingTagName => write!(f, "no tag name found after '<'"),
            TagError::MissingCloseMarker => write!(f, "no closing '>' found in declaration"),
        }
    }
}

/// Errors that can occur while translating SHML source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessError {
    /// A line meant to open a new element contains a close tag (`</`) or a
    /// self-closing marker (`/>`). Shorthand input never writes either.
    /// `context` holds the first few remaining source lines for diagnostics.
    DisallowedSyntax { context: String },

    /// Tag name, attribute, or trailing text extraction failed against an
    /// opening-tag declaration. `line` is the (accumulated) declaration.
    MalformedTag { line: String, reason: TagError },
}

impl std::error::Error for ProcessError {}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::DisallowedSyntax { context } => write!(
                f,
                "close tags are never written in shorthand input (offending lines are:)\n{}",
                context
            ),
            ProcessError::MalformedTag { line, reason } => write!(
                f,
                "the input is probably not valid shorthand; detected while parsing '{}': {}",
                line, reason
            ),
        }
    }
}
