//! UFO data handling
//!
//! File I/O and conversion between norad types and the internal model.

pub mod conversions;
pub mod ufo;
