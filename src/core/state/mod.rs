//! Session state management
//!
//! State owned by the preview controller: the open fonts and the current
//! selection. Font data itself lives in the font_source module.

pub mod session;

pub use session::{FontDocument, FontSet, Selection};
