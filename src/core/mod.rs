//! Core functionality
//!
//! This module contains the non-geometric plumbing:
//! - Error handling helpers
//! - Settings and user configuration
//! - Session state (open fonts, current selection)

pub mod config_file;
pub mod errors;
pub mod settings;
pub mod state;

// Re-export commonly used items
pub use errors::{TweenContext, TweenResult};
pub use settings::TweenSettings;
pub use state::{FontDocument, FontSet, Selection};
