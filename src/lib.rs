//! Tween
//!
//! Live two-font glyph interpolation preview: given two open fonts and a
//! glyph name, interpolate the glyph's outlines at an adjustable percentage
//! and push the result to a host display surface.
pub mod core;
pub mod data;
pub mod font_source;
pub mod geometry;
pub mod interpolation;
pub mod logging;
pub mod preview;
