//! Main module for shml library functionality
//!
//! The translation runs as a small line-oriented pipeline:
//!
//! 1. The source is split into lines and the output indent unit is detected
//!    (`indentation`), unless the caller fixed it up front.
//! 2. Each line is classified against the comment state machine (`comments`)
//!    and the element test (`lines`); comment and blank lines are dropped.
//! 3. The recursive translator (`translator`) walks the line array through an
//!    explicit cursor, turning each indentation scope into an open tag, its
//!    translated children, and a matching close tag.
//! 4. The processor (`processor`) drives the translator over all top-level
//!    elements and joins the accumulated fragments into the final text.

pub mod comments;
pub mod error;
pub mod indentation;
pub mod lines;
pub mod processor;
pub mod tag;
pub mod testing;
pub mod translator;

pub use error::{ProcessError, TagError};
pub use processor::Processor;
