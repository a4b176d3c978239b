//! The interpolation core
//!
//! Structural compatibility checking, component decomposition, and the
//! linear interpolation engine. Everything here is pure computation over
//! the font_source data model; no host state is touched.

pub mod compatibility;
pub mod decompose;
pub mod engine;

pub use compatibility::{check_compatibility, CompatibilityReport};
pub use decompose::decompose_components;
pub use engine::{instance_name, interpolate_glyphs};
