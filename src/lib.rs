//! # shml
//!
//! A translator for the SHML shorthand markup format.
//!
//! SHML is written like HTML minus the close tags: a line that opens a tag
//! owns every following line indented further than it, and the tag is closed
//! as soon as a line at equal or lesser indentation appears. This crate turns
//! such shorthand into fully closed markup:
//!
//! ```text
//! <div id="intro">
//!     <span>hello
//! ```
//!
//! becomes
//!
//! ```text
//! <div id="intro">
//!     <span>
//!         hello
//!     </span>
//! </div>
//! ```
//!
//! The entry point is [`shml::processor::Processor`].

pub mod shml;
