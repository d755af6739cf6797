//! Comment suppression state machine
//!
//! SHML documents may carry markup-style (`<!-- -->`) and script-style
//! (`/* */`) block comments plus script-style line comments (`//`). The
//! translator drops every line that falls inside one before any element
//! recognition happens.
//!
//! Depth is tracked per line by counting markers, not by a character-level
//! push/pop parser. This tolerates several markers on one line at the cost of
//! only supporting comments that open at the start of a line and close at the
//! end of one. That is a documented limitation of the dialect, not a defect.
//!
//! The classifier is a pure function over a small copyable state value, so
//! callers thread the state explicitly and there is no hidden cross-call
//! coupling.

/// Opens a markup-style block comment.
pub const MARKUP_COMMENT_OPEN: &str = "<!--";
/// Closes a markup-style block comment.
pub const MARKUP_COMMENT_CLOSE: &str = "-->";
/// Opens a script-style block comment.
pub const SCRIPT_COMMENT_OPEN: &str = "/*";
/// Closes a script-style block comment.
pub const SCRIPT_COMMENT_CLOSE: &str = "*/";
/// Marks a script-style single-line comment.
pub const SCRIPT_LINE_COMMENT: &str = "//";

/// Nesting depths of the two block comment kinds.
///
/// At most one counter is positive at a time: entering one kind is exclusive
/// until it drains back to zero, and the other kind's markers are ignored
/// meanwhile. Counters never go negative; close markers with no matching open
/// saturate at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentState {
    pub markup_depth: usize,
    pub script_depth: usize,
}

impl CommentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while either block comment kind is open.
    pub fn in_comment(&self) -> bool {
        self.markup_depth > 0 || self.script_depth > 0
    }
}

/// Classify one already-trimmed line against the comment state.
///
/// Returns whether the line must be dropped, together with the updated
/// state. A block comment can only begin at the start of a line; a marker
/// appearing mid-line without the block already open does not start one.
/// Line comments (`//`) drop exactly one line and leave the state untouched.
pub fn filter_line(mut state: CommentState, trimmed: &str) -> (bool, CommentState) {
    // Markup-style rules run only while no script-style block is open.
    if state.script_depth == 0 {
        if state.markup_depth > 0 || trimmed.starts_with(MARKUP_COMMENT_OPEN) {
            state.markup_depth += count_markers(trimmed, MARKUP_COMMENT_OPEN);
        }
        // Closes are checked on the same line as opens, so a comment that
        // opens and closes on one line still nets out to depth zero.
        if state.markup_depth > 0 {
            state.markup_depth = state
                .markup_depth
                .saturating_sub(count_markers(trimmed, MARKUP_COMMENT_CLOSE));
            return (true, state);
        }
    }

    // Script-style rules, symmetric with the above.
    if state.markup_depth == 0 {
        if state.script_depth > 0 || trimmed.starts_with(SCRIPT_COMMENT_OPEN) {
            state.script_depth += count_markers(trimmed, SCRIPT_COMMENT_OPEN);
        }
        if state.script_depth > 0 {
            state.script_depth = state
                .script_depth
                .saturating_sub(count_markers(trimmed, SCRIPT_COMMENT_CLOSE));
            return (true, state);
        }
    }

    if trimmed.starts_with(SCRIPT_LINE_COMMENT) {
        return (true, state);
    }

    (false, state)
}

fn count_markers(line: &str, marker: &str) -> usize {
    line.matches(marker).count()
}
