//! Debugging aid for the Gemini chat request format
//!
//! Prints a reference `generateContent` payload with file references next to
//! the payload our chat session logic would build, so the two can be diffed
//! by eye.

pub mod error;
pub mod gemini;
pub mod notes;
pub mod report;
pub mod session;

pub use error::{Error, Result};
