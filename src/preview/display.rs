//! Display surface contract and preview frames
//!
//! The host's drawing view implements `DisplaySurface`; the controller
//! hands it ready-to-render frames. The alignment transform applied here is
//! presentation-only; the engine's output glyph is never modified.

use crate::font_source::{FontInfo, GlyphData};
use crate::geometry::outline_to_bezpaths;
use crate::preview::controller::StatusReport;
use kurbo::{Affine, BezPath, Point};

/// One rendered preview, ready for the host to draw
#[derive(Clone, Debug, Default)]
pub struct PreviewFrame {
    /// Name of the source glyph this frame previews
    pub glyph_name: String,
    /// Interpolated advance width, in source units
    pub width: f64,
    /// Outline paths with the display transform already applied
    pub paths: Vec<BezPath>,
}

impl PreviewFrame {
    /// Build a frame from an interpolated glyph and a display transform
    pub fn new(glyph: &GlyphData, transform: Affine) -> Self {
        let paths = glyph
            .outline
            .as_ref()
            .map(outline_to_bezpaths)
            .unwrap_or_default()
            .into_iter()
            .map(|path| transform * path)
            .collect();

        Self {
            glyph_name: glyph.name.clone(),
            width: glyph.width,
            paths,
        }
    }
}

/// Alignment transform for the preview display
///
/// Scales the frame to the target UPM using the first font's units-per-em,
/// anchored at half of the second font's glyph width. Kept from the host
/// panel this engine replaces; it only affects what the surface draws.
pub fn preview_transform(left_info: &FontInfo, right_glyph_width: f64, preview_upm: f64) -> Affine {
    let upm = if left_info.units_per_em > 0.0 {
        left_info.units_per_em
    } else {
        preview_upm
    };
    let scale = preview_upm / upm;
    Affine::scale_about(scale, Point::new(right_glyph_width / 2.0, 0.0))
}

/// Where preview output lands
///
/// Implemented by the host's drawing view. Calls arrive synchronously from
/// the controller, report first, then the frame; each call fully replaces
/// the previous content.
pub trait DisplaySurface {
    /// Replace the displayed glyph; `None` clears the preview
    fn show(&mut self, frame: Option<PreviewFrame>);

    /// Update the one-line status text
    fn report(&mut self, status: &StatusReport);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_transform_scales_to_target_upm() {
        let info = FontInfo {
            units_per_em: 2000.0,
            ..Default::default()
        };
        let transform = preview_transform(&info, 0.0, 1000.0);
        // Anchored at the origin, so a plain 0.5x scale
        assert_eq!(transform * Point::new(200.0, 200.0), Point::new(100.0, 100.0));
    }

    #[test]
    fn test_preview_transform_anchor_is_fixed() {
        let info = FontInfo {
            units_per_em: 2000.0,
            ..Default::default()
        };
        let transform = preview_transform(&info, 600.0, 1000.0);
        // The anchor point (half the right glyph's width) must not move
        assert_eq!(transform * Point::new(300.0, 0.0), Point::new(300.0, 0.0));
    }

    #[test]
    fn test_preview_transform_guards_zero_upm() {
        let info = FontInfo::default();
        let transform = preview_transform(&info, 0.0, 1000.0);
        assert_eq!(transform * Point::new(10.0, 10.0), Point::new(10.0, 10.0));
    }
}
