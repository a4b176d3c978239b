//! Structural compatibility checking
//!
//! Interpolation is only defined when two glyphs share contour and point
//! topology. The check is pure and never fails: any mismatch produces a
//! negative report with a reason, stated in first-glyph vs second-glyph
//! order. Component references are compared too, since the check may run
//! before decomposition.

use crate::font_source::GlyphData;

/// Verdict of a compatibility check
#[derive(Clone, Debug, PartialEq)]
pub struct CompatibilityReport {
    pub compatible: bool,
    /// Why the glyphs do not interpolate, when they don't
    pub reason: Option<String>,
}

impl CompatibilityReport {
    fn ok() -> Self {
        Self {
            compatible: true,
            reason: None,
        }
    }

    fn mismatch(reason: String) -> Self {
        Self {
            compatible: false,
            reason: Some(reason),
        }
    }
}

/// Check whether two glyphs are structurally compatible for interpolation
///
/// Compatible iff both have the same number of contours, each corresponding
/// contour pair has the same number of points with matching point-type
/// sequences, and component references line up by count and base name.
pub fn check_compatibility(a: &GlyphData, b: &GlyphData) -> CompatibilityReport {
    let contours_a = a.contours();
    let contours_b = b.contours();

    if contours_a.len() != contours_b.len() {
        return CompatibilityReport::mismatch(format!(
            "contour count differs: {} vs {}",
            contours_a.len(),
            contours_b.len()
        ));
    }

    for (idx, (ca, cb)) in contours_a.iter().zip(contours_b).enumerate() {
        if ca.points.len() != cb.points.len() {
            return CompatibilityReport::mismatch(format!(
                "contour {}: point count differs: {} vs {}",
                idx,
                ca.points.len(),
                cb.points.len()
            ));
        }

        for (pidx, (pa, pb)) in ca.points.iter().zip(&cb.points).enumerate() {
            if pa.typ != pb.typ {
                return CompatibilityReport::mismatch(format!(
                    "contour {}, point {}: point type differs: {} vs {}",
                    idx, pidx, pa.typ, pb.typ
                ));
            }
        }
    }

    if a.components.len() != b.components.len() {
        return CompatibilityReport::mismatch(format!(
            "component count differs: {} vs {}",
            a.components.len(),
            b.components.len()
        ));
    }

    for (idx, (comp_a, comp_b)) in a.components.iter().zip(&b.components).enumerate() {
        if comp_a.base != comp_b.base {
            return CompatibilityReport::mismatch(format!(
                "component {}: base glyph differs: {} vs {}",
                idx, comp_a.base, comp_b.base
            ));
        }
    }

    CompatibilityReport::ok()
}
