//! Diagnostic system for tally error reporting.
//!
//! Every failure a phase can report becomes a [`Diagnostic`]:
//! - an error code for searchability
//! - a message (what went wrong)
//! - a label (where it went wrong)
//! - notes and suggestions (how to fix it)
//!
//! Rendering is handled by the emitters in [`emitter`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
