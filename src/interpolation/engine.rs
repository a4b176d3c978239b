//! Linear glyph interpolation
//!
//! Given two structurally compatible glyphs, produce a new glyph whose
//! points are the pairwise affine combination `A + t*(B-A)`, with the
//! advances interpolated the same way. The factor is unrestricted; values
//! outside [0, 1] extrapolate.

use crate::font_source::{ContourData, GlyphData, OutlineData, PointData};
use kurbo::Point;

/// Interpolate two compatible glyphs at factor `t`
///
/// Callers must check compatibility first; mismatched topology is a logic
/// error at this layer. Point type and smooth flag carry over from the
/// first glyph (types are equal on both sides by precondition). The result
/// is a fresh outline-only glyph with no codepoints of its own.
pub fn interpolate_glyphs(a: &GlyphData, b: &GlyphData, t: f64) -> GlyphData {
    debug_assert!(
        super::check_compatibility(a, b).compatible,
        "interpolate_glyphs called on incompatible glyphs"
    );

    let contours: Vec<ContourData> = a
        .contours()
        .iter()
        .zip(b.contours())
        .map(|(ca, cb)| ContourData {
            points: ca
                .points
                .iter()
                .zip(&cb.points)
                .map(|(pa, pb)| lerp_point(pa, pb, t))
                .collect(),
        })
        .collect();

    GlyphData {
        name: a.name.clone(),
        width: lerp(a.width, b.width, t),
        height: lerp(a.height, b.height, t),
        unicodes: Vec::new(),
        outline: if contours.is_empty() {
            None
        } else {
            Some(OutlineData { contours })
        },
        components: Vec::new(),
    }
}

/// Derived name for a generated instance: `<glyph>.<percent>`
pub fn instance_name(glyph_name: &str, t: f64) -> String {
    format!("{}.{}", glyph_name, (t * 100.0).round() as i64)
}

fn lerp_point(a: &PointData, b: &PointData, t: f64) -> PointData {
    let pos = Point::new(a.x, a.y).lerp(Point::new(b.x, b.y), t);
    PointData {
        x: pos.x,
        y: pos.y,
        typ: a.typ,
        smooth: a.smooth,
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}
