//! Font source data structures
//!
//! This module contains the read-only model of the fonts being previewed
//! (extracted from norad), as opposed to any state the controller owns.

pub mod data;
pub mod metrics;

// Explicit re-exports for public API
pub use data::{
    ComponentData, ContourData, FontData, GlyphData, OutlineData, PointData, PointTypeData,
};
pub use metrics::FontInfo;
