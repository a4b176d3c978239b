//! Outline geometry
//!
//! Conversion from the UFO point model to kurbo paths for display.

pub mod paths;

pub use paths::{contour_to_bezpath, outline_to_bezpaths};
