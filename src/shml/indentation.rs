//! Indentation detection for SHML sources
//!
//! SHML nesting is purely positional, so the translator only ever compares
//! source indentation columns relative to each other. The detected unit is
//! used for one thing: as the multiplier when synthesizing output
//! indentation. A document indented by two spaces per level and one indented
//! by eight translate to the same structure.

/// Output indent width used when the document gives no indentation signal.
pub const DEFAULT_INDENT_UNIT: usize = 4;

/// Number of leading whitespace characters on a line.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Detect the indent unit of a document.
///
/// Records the indentation column of the first non-blank line, then scans for
/// the first later non-blank line whose column is strictly larger and returns
/// the difference. A document with no indentation variation (flat,
/// single-level, or empty) yields [`DEFAULT_INDENT_UNIT`].
pub fn detect_indent_unit(lines: &[&str]) -> usize {
    let mut first_indent = None;

    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let indent = indent_width(line);

        match first_indent {
            // first non-blank line
            None => first_indent = Some(indent),
            // first strictly deeper line settles the unit
            Some(first) if indent > first => return indent - first,
            Some(_) => {}
        }
    }

    DEFAULT_INDENT_UNIT
}
