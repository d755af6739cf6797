//! Processing API for SHML sources
//!
//! This module provides the public entry point for turning SHML text into
//! fully closed markup. A [`Processor`] owns the one tunable the translation
//! has (the output indent unit) and drives the recursive translator over
//! every top-level element of a document.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use shml::shml::processor::Processor;
//!
//! // Autodetect the document's indent unit
//! let html = Processor::new().process("<div>\n    <span>hello")?;
//!
//! // Or fix the output indent width up front
//! let html = Processor::with_indent_unit(2).process_with_fixed_indent(source)?;
//! ```

use crate::shml::error::ProcessError;
use crate::shml::indentation::{detect_indent_unit, DEFAULT_INDENT_UNIT};
use crate::shml::translator::Translator;

/// Translates SHML source text into fully closed markup.
///
/// A `Processor` carries no per-document state; every `process` call builds
/// its own translation cursor and comment state, so one instance may be
/// shared and reused freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Processor {
    indent_unit: usize,
}

impl Processor {
    /// A processor with the default indent unit of 4.
    pub fn new() -> Self {
        Processor {
            indent_unit: DEFAULT_INDENT_UNIT,
        }
    }

    /// A processor with a pre-configured indent unit, for callers that skip
    /// autodetection via [`Processor::process_with_fixed_indent`].
    pub fn with_indent_unit(indent_unit: usize) -> Self {
        Processor { indent_unit }
    }

    /// The configured indent unit.
    pub fn indent_unit(&self) -> usize {
        self.indent_unit
    }

    /// Translate SHML text, autodetecting the indent unit.
    ///
    /// The unit is taken from the first indent difference between non-blank
    /// lines of `source`; it only affects how deep the synthesized output
    /// indentation is, never how the input structure is parsed.
    pub fn process(&self, source: &str) -> Result<String, ProcessError> {
        let source_lines: Vec<&str> = source.split('\n').collect();
        let indent_unit = detect_indent_unit(&source_lines);
        translate(&source_lines, indent_unit)
    }

    /// Translate SHML text using the configured indent unit as-is.
    pub fn process_with_fixed_indent(&self, source: &str) -> Result<String, ProcessError> {
        let source_lines: Vec<&str> = source.split('\n').collect();
        translate(&source_lines, self.indent_unit)
    }
}

impl Default for Processor {
    fn default() -> Self {
        Processor::new()
    }
}

/// Driver loop over a whole document.
///
/// One `element_scope` call consumes exactly one top-level element and
/// everything nested inside it, so the loop runs until the cursor is
/// exhausted, separating consecutive top-level elements with one blank
/// fragment. The fragments are joined with newlines into the final text.
fn translate(source_lines: &[&str], indent_unit: usize) -> Result<String, ProcessError> {
    let mut translator = Translator::new(source_lines, indent_unit);
    let mut fragments: Vec<String> = Vec::new();

    while !translator.is_exhausted() {
        fragments.push(String::new());
        let scope = translator.element_scope(0)?;
        fragments.extend(scope);
    }

    Ok(fragments.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_indent_unit() {
        assert_eq!(Processor::new().indent_unit(), 4);
        assert_eq!(Processor::default().indent_unit(), 4);
        assert_eq!(Processor::with_indent_unit(2).indent_unit(), 2);
    }

    #[test]
    fn test_process_basic_document() {
        let output = Processor::new().process("<div>\n    <span>hello").unwrap();
        assert_eq!(
            output,
            "\n<div>\n\n    <span>\n        hello\n    </span>\n</div>"
        );
    }

    #[test]
    fn test_process_autodetects_indent() {
        // Two-space input produces two-space output indentation.
        let output = Processor::new().process("<div>\n  <span>hello").unwrap();
        assert_eq!(
            output,
            "\n<div>\n\n  <span>\n    hello\n  </span>\n</div>"
        );
    }

    #[test]
    fn test_process_with_fixed_indent_skips_detection() {
        // Same two-space input, but the default unit of 4 is kept.
        let output = Processor::new()
            .process_with_fixed_indent("<div>\n  <span>hello")
            .unwrap();
        assert_eq!(
            output,
            "\n<div>\n\n    <span>\n        hello\n    </span>\n</div>"
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Processor::new().process("").unwrap(), "");
    }

    #[test]
    fn test_blank_only_input() {
        assert_eq!(Processor::new().process("\n   \n\n").unwrap(), "");
    }

    #[test]
    fn test_multiple_top_level_elements() {
        let output = Processor::new().process("<div>\n<span>").unwrap();
        assert_eq!(output, "\n<div>\n</div>\n\n<span>\n</span>");
    }

    #[test]
    fn test_errors_propagate() {
        assert!(Processor::new().process("<div/>").is_err());
        assert!(Processor::new().process("<>").is_err());
    }
}
