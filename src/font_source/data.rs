//! Font and glyph data structures
//!
//! Glyph outlines keep the UFO point model (typed points, off-curve runs)
//! rather than rendered curves, so structural comparison between two fonts
//! stays exact. Everything here is plain data, cheap to clone, and never
//! mutated by the interpolation pipeline.

use kurbo::{Affine, Point};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Glyph data for one font, keyed by glyph name
#[derive(Clone, Default)]
pub struct FontData {
    pub glyphs: HashMap<String, GlyphData>,
    /// Where the font was loaded from, if it came from disk
    pub path: Option<PathBuf>,
}

impl FontData {
    /// Look up a glyph by name
    pub fn glyph(&self, name: &str) -> Option<&GlyphData> {
        self.glyphs.get(name)
    }

    /// Whether the font contains a glyph with this name
    pub fn contains_glyph(&self, name: &str) -> bool {
        self.glyphs.contains_key(name)
    }

    /// Insert a glyph under its own name, replacing any existing glyph
    pub fn insert_glyph(&mut self, glyph: GlyphData) {
        self.glyphs.insert(glyph.name.clone(), glyph);
    }
}

/// A single glyph: advances, outline, and component references
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphData {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub unicodes: Vec<char>,
    pub outline: Option<OutlineData>,
    pub components: Vec<ComponentData>,
}

impl GlyphData {
    /// Whether this glyph references other glyphs as components
    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    /// The glyph's contours, empty when it has no outline
    pub fn contours(&self) -> &[ContourData] {
        self.outline
            .as_ref()
            .map(|outline| outline.contours.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of points across all contours
    pub fn point_count(&self) -> usize {
        self.contours().iter().map(|c| c.points.len()).sum()
    }
}

/// All contours of a glyph
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OutlineData {
    pub contours: Vec<ContourData>,
}

/// One closed point path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContourData {
    pub points: Vec<PointData>,
}

/// A point in a glyph's outline
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointData {
    pub x: f64,
    pub y: f64,
    pub typ: PointTypeData,
    pub smooth: bool,
}

impl PointData {
    pub fn new(x: f64, y: f64, typ: PointTypeData) -> Self {
        Self {
            x,
            y,
            typ,
            smooth: false,
        }
    }

    /// The point's coordinates as a kurbo point
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// The same point moved through an affine transform
    pub fn transformed(&self, transform: Affine) -> Self {
        let moved = transform * self.position();
        Self {
            x: moved.x,
            y: moved.y,
            ..*self
        }
    }
}

/// UFO point types
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointTypeData {
    Move,
    #[default]
    Line,
    OffCurve,
    Curve,
    QCurve,
}

impl fmt::Display for PointTypeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointTypeData::Move => "move",
            PointTypeData::Line => "line",
            PointTypeData::OffCurve => "offcurve",
            PointTypeData::Curve => "curve",
            PointTypeData::QCurve => "qcurve",
        };
        write!(f, "{}", name)
    }
}

/// A reference to another glyph, placed via an affine transform
#[derive(Clone, Debug, PartialEq)]
pub struct ComponentData {
    /// Name of the referenced glyph
    pub base: String,
    /// Placement transform in UFO affine order
    pub transform: Affine,
}
