//! Line classification for SHML sources
//!
//! The translator sees every source line as exactly one of four kinds:
//! blank, comment (suppressed by the state machine in `comments`), a new
//! element declaration, or plain body text. This module exposes that lexical
//! view directly, both for the translator itself and as a debugging surface
//! through the CLI `lines` subcommand.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shml::comments::{filter_line, CommentState};

/// The classification of one source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineKind {
    /// Empty or whitespace-only line.
    Blank,
    /// Line suppressed by the comment state machine.
    Comment,
    /// Line that declares a new shorthand element.
    Element,
    /// Body text belonging to the enclosing element.
    Text,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineKind::Blank => "BLANK_LINE",
            LineKind::Comment => "COMMENT_LINE",
            LineKind::Element => "ELEMENT_LINE",
            LineKind::Text => "TEXT_LINE",
        };
        write!(f, "{}", name)
    }
}

impl LineKind {
    /// Format the kind as grammar notation: `<kind-name>`.
    pub fn to_grammar_string(&self) -> String {
        let name = match self {
            LineKind::Blank => "blank-line",
            LineKind::Comment => "comment-line",
            LineKind::Element => "element-line",
            LineKind::Text => "text-line",
        };
        format!("<{}>", name)
    }
}

/// One classified source line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineRecord {
    pub kind: LineKind,
    pub text: String,
}

/// True when a trimmed line declares a new shorthand element.
///
/// An element line starts with the tag-open marker, and its next character
/// is neither `!` (markup comment) nor `%` (template escape). Exactly these
/// two characters are excluded; the set is part of the dialect and is not to
/// be widened or narrowed.
pub fn is_element_line(trimmed: &str) -> bool {
    let mut chars = trimmed.chars();
    if chars.next() != Some('<') {
        return false;
    }
    !matches!(chars.next(), Some('!') | Some('%'))
}

/// Classify every line of a source document.
///
/// Threads the comment state through the lines in order, so block comment
/// membership is resolved exactly the way the translator resolves it. Blank
/// lines never touch the comment state.
pub fn classify_lines(source: &str) -> Vec<LineRecord> {
    let mut state = CommentState::new();

    source
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            let kind = if trimmed.is_empty() {
                LineKind::Blank
            } else {
                let (skip, next_state) = filter_line(state, trimmed);
                state = next_state;
                if skip {
                    LineKind::Comment
                } else if is_element_line(trimmed) {
                    LineKind::Element
                } else {
                    LineKind::Text
                }
            };
            LineRecord {
                kind,
                text: line.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<LineKind> {
        classify_lines(source).into_iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_element_line_detection() {
        assert!(is_element_line("<div>"));
        assert!(is_element_line("<span>hello"));
        assert!(is_element_line("<input name=\"x\""));
        assert!(!is_element_line("plain text"));
        assert!(!is_element_line("<!DOCTYPE html>"));
        assert!(!is_element_line("<!-- comment -->"));
        assert!(!is_element_line("<% template %>"));
    }

    #[test]
    fn test_bare_open_marker_counts_as_element() {
        // Extraction will reject it later; classification is purely lexical.
        assert!(is_element_line("<"));
    }

    #[test]
    fn test_line_kind_display() {
        assert_eq!(format!("{}", LineKind::Blank), "BLANK_LINE");
        assert_eq!(format!("{}", LineKind::Comment), "COMMENT_LINE");
        assert_eq!(format!("{}", LineKind::Element), "ELEMENT_LINE");
        assert_eq!(format!("{}", LineKind::Text), "TEXT_LINE");
    }

    #[test]
    fn test_line_kind_to_grammar_string() {
        assert_eq!(LineKind::Blank.to_grammar_string(), "<blank-line>");
        assert_eq!(LineKind::Comment.to_grammar_string(), "<comment-line>");
        assert_eq!(LineKind::Element.to_grammar_string(), "<element-line>");
        assert_eq!(LineKind::Text.to_grammar_string(), "<text-line>");
    }

    #[test]
    fn test_classify_simple_document() {
        let source = "<div>\n    <span>hello\n    body text\n";
        assert_eq!(
            kinds(source),
            vec![
                LineKind::Element,
                LineKind::Element,
                LineKind::Text,
                LineKind::Blank,
            ]
        );
    }

    #[test]
    fn test_classify_threads_comment_state() {
        let source = "<div>\n<!-- open\nhidden <span>\n-->\n<span>after";
        assert_eq!(
            kinds(source),
            vec![
                LineKind::Element,
                LineKind::Comment,
                LineKind::Comment,
                LineKind::Comment,
                LineKind::Element,
            ]
        );
    }

    #[test]
    fn test_classify_line_comment() {
        let source = "// note\ntext";
        assert_eq!(kinds(source), vec![LineKind::Comment, LineKind::Text]);
    }

    #[test]
    fn test_records_keep_original_text() {
        let records = classify_lines("    <div>");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].text, "    <div>");
        assert_eq!(records[0].kind, LineKind::Element);
    }

    #[test]
    fn test_records_serialize_to_json() {
        let records = classify_lines("<div>\n");
        let json = serde_json::to_string(&records).unwrap();
        assert!(json.contains("\"Element\""));
        assert!(json.contains("\"Blank\""));

        let back: Vec<LineRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, records);
    }
}
