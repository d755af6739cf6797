//! Recursive translator for SHML scopes
//!
//! The translator walks the source line array through an explicit cursor.
//! One call to [`Translator::element_scope`] consumes exactly one element at
//! the given output depth together with everything nested inside it: the
//! opening line becomes a synthesized open tag, deeper element lines recurse
//! into child scopes, body text is copied through, and the matching close tag
//! is emitted as soon as a line at or above the opening line's indentation
//! appears (or the input ends).
//!
//! The cursor only moves forward, and only this type moves it. A scope
//! returns without consuming the line that ended it: that line belongs to an
//! ancestor scope, which re-examines it. Because only element lines open and
//! close scopes, body text can never break the nesting; element lines are the
//! only ones that have to be indented correctly.

use crate::shml::comments::{filter_line, CommentState};
use crate::shml::error::{ProcessError, TagError};
use crate::shml::indentation::indent_width;
use crate::shml::lines::is_element_line;
use crate::shml::tag::parse_tag_declaration;

/// Marks a close tag; never written in shorthand input.
pub const CLOSE_TAG_MARKER: &str = "</";
/// Marks a self-closing tag; never written in shorthand input.
pub const SELF_CLOSING_MARKER: &str = "/>";

/// How many remaining lines a disallowed-syntax error carries as context.
const ERROR_CONTEXT_LINES: usize = 10;

/// Cursor-driven translation state for one document.
pub struct Translator<'a> {
    lines: &'a [&'a str],
    pos: usize,
    comments: CommentState,
    indent_unit: usize,
}

impl<'a> Translator<'a> {
    pub fn new(lines: &'a [&'a str], indent_unit: usize) -> Self {
        Translator {
            lines,
            pos: 0,
            comments: CommentState::new(),
            indent_unit,
        }
    }

    /// True once every source line has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.pos >= self.lines.len()
    }

    /// Translate one element scope at the given output depth.
    ///
    /// Emits the opening tag when the scope's element line is found, recurses
    /// for deeper element lines, copies body text through, and closes the
    /// scope on the first line at or above the opening indentation. That
    /// closing line is left unconsumed for the caller. Blank and comment
    /// lines are discarded wherever they appear and never end a scope.
    pub fn element_scope(&mut self, depth: usize) -> Result<Vec<String>, ProcessError> {
        let mut output = Vec::new();
        let mut searching = true;
        let mut base_indent = 0usize;
        let mut tag_name = String::new();

        loop {
            let Some(&line) = self.lines.get(self.pos) else {
                // Input ended inside an open scope: flush the final close tag.
                if !searching {
                    output.push(self.close_tag(depth, &tag_name));
                }
                break;
            };

            let trimmed = line.trim();

            if trimmed.is_empty() {
                self.pos += 1;
                continue;
            }

            let (skip, next_state) = filter_line(self.comments, trimmed);
            self.comments = next_state;
            if skip {
                self.pos += 1;
                continue;
            }

            let is_new_element = is_element_line(trimmed);
            let line_indent = indent_width(line);

            if is_new_element
                && (trimmed.contains(CLOSE_TAG_MARKER) || trimmed.contains(SELF_CLOSING_MARKER))
            {
                return Err(ProcessError::DisallowedSyntax {
                    context: self.remaining_context(),
                });
            }

            if searching && is_new_element {
                let declaration = self.accumulate_declaration(trimmed)?;
                let parts = parse_tag_declaration(&declaration).map_err(|reason| {
                    ProcessError::MalformedTag {
                        line: declaration.clone(),
                        reason,
                    }
                })?;

                base_indent = line_indent;
                searching = false;
                tag_name = parts.name;

                if parts.attributes.is_empty() {
                    output.push(format!("{}<{}>", self.indent(depth), tag_name));
                } else {
                    output.push(format!(
                        "{}<{} {}>",
                        self.indent(depth),
                        tag_name,
                        parts.attributes
                    ));
                }
                if !parts.trailing.is_empty() {
                    output.push(format!("{}{}", self.indent(depth + 1), parts.trailing));
                }

                self.pos += 1;
            } else if !searching && line_indent <= base_indent {
                // The line closes this scope and belongs to an ancestor.
                output.push(self.close_tag(depth, &tag_name));
                return Ok(output);
            } else if is_new_element {
                // Deeper element: a child scope consumes its own lines.
                output.push(String::new());
                let child = self.element_scope(depth + 1)?;
                output.extend(child);
            } else {
                // Body text of the open element, copied through verbatim.
                output.push(line.to_string());
                self.pos += 1;
            }
        }

        Ok(output)
    }

    /// Gather one logical tag declaration starting at the cursor.
    ///
    /// A declaration missing its `>` continues on the following lines; each
    /// continuation is trimmed and space-joined until the line carrying `>`
    /// is appended. The cursor is left on the last physical line of the
    /// declaration (the caller consumes it).
    fn accumulate_declaration(&mut self, first_trimmed: &str) -> Result<String, ProcessError> {
        let mut declaration = first_trimmed.to_string();
        if declaration.contains('>') {
            return Ok(declaration);
        }

        loop {
            self.pos += 1;
            let Some(&line) = self.lines.get(self.pos) else {
                return Err(ProcessError::MalformedTag {
                    line: declaration,
                    reason: TagError::MissingCloseMarker,
                });
            };
            declaration.push(' ');
            declaration.push_str(line.trim());
            if line.contains('>') {
                return Ok(declaration);
            }
        }
    }

    fn remaining_context(&self) -> String {
        let end = (self.pos + ERROR_CONTEXT_LINES).min(self.lines.len());
        self.lines[self.pos..end].join("\n")
    }

    fn indent(&self, depth: usize) -> String {
        " ".repeat(depth * self.indent_unit)
    }

    fn close_tag(&self, depth: usize, tag_name: &str) -> String {
        format!("{}</{}>", self.indent(depth), tag_name)
    }
}
