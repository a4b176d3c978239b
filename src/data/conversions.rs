//! norad conversion utilities
//!
//! Pure data transformation between the norad UFO types and our internal
//! model. The internal model is what the interpolation pipeline sees; norad
//! types only appear at the document boundary.

use crate::font_source::{
    ComponentData, ContourData, FontData, FontInfo, GlyphData, OutlineData, PointData,
    PointTypeData,
};
use kurbo::Affine;
use norad::Font;
use std::collections::HashMap;
use std::path::PathBuf;

impl GlyphData {
    /// Convert from a norad glyph
    pub fn from_norad_glyph(norad_glyph: &norad::Glyph) -> Self {
        let outline = if norad_glyph.contours.is_empty() {
            None
        } else {
            Some(OutlineData::from_norad_contours(&norad_glyph.contours))
        };

        let components = norad_glyph
            .components
            .iter()
            .map(ComponentData::from_norad_component)
            .collect();

        Self {
            name: norad_glyph.name().to_string(),
            width: norad_glyph.width,
            height: norad_glyph.height,
            unicodes: norad_glyph.codepoints.iter().collect(),
            outline,
            components,
        }
    }

    /// Convert back to a norad glyph
    pub fn to_norad_glyph(&self) -> norad::Glyph {
        let mut glyph = norad::Glyph::new(&self.name);
        glyph.width = self.width;
        glyph.height = self.height;

        for &codepoint in &self.unicodes {
            glyph.codepoints.insert(codepoint);
        }

        if let Some(outline) = &self.outline {
            glyph.contours = outline.to_norad_contours();
        }

        glyph.components = self
            .components
            .iter()
            .map(ComponentData::to_norad_component)
            .collect();

        glyph
    }
}

impl ComponentData {
    /// Convert from a norad component
    ///
    /// The UFO affine field order matches kurbo's coefficient order, so the
    /// transform maps across directly.
    pub fn from_norad_component(norad_component: &norad::Component) -> Self {
        let t = &norad_component.transform;
        Self {
            base: norad_component.base.to_string(),
            transform: Affine::new([
                t.x_scale, t.xy_scale, t.yx_scale, t.y_scale, t.x_offset, t.y_offset,
            ]),
        }
    }

    /// Convert back to a norad component
    pub fn to_norad_component(&self) -> norad::Component {
        let base_name: norad::Name = self
            .base
            .parse()
            .unwrap_or_else(|_| "space".parse().expect("'space' is a valid glyph name"));

        let [x_scale, xy_scale, yx_scale, y_scale, x_offset, y_offset] =
            self.transform.as_coeffs();
        let transform = norad::AffineTransform {
            x_scale,
            xy_scale,
            yx_scale,
            y_scale,
            x_offset,
            y_offset,
        };

        norad::Component::new(base_name, transform, None)
    }
}

impl OutlineData {
    pub fn from_norad_contours(norad_contours: &[norad::Contour]) -> Self {
        let contours = norad_contours
            .iter()
            .map(ContourData::from_norad_contour)
            .collect();

        Self { contours }
    }

    pub fn to_norad_contours(&self) -> Vec<norad::Contour> {
        self.contours
            .iter()
            .map(ContourData::to_norad_contour)
            .collect()
    }
}

impl ContourData {
    pub fn from_norad_contour(norad_contour: &norad::Contour) -> Self {
        let points = norad_contour
            .points
            .iter()
            .map(PointData::from_norad_point)
            .collect();

        Self { points }
    }

    pub fn to_norad_contour(&self) -> norad::Contour {
        let points = self.points.iter().map(PointData::to_norad_point).collect();

        norad::Contour::new(points, None)
    }
}

impl PointData {
    pub fn from_norad_point(norad_point: &norad::ContourPoint) -> Self {
        Self {
            x: norad_point.x,
            y: norad_point.y,
            typ: PointTypeData::from_norad_point_type(&norad_point.typ),
            smooth: norad_point.smooth,
        }
    }

    pub fn to_norad_point(&self) -> norad::ContourPoint {
        norad::ContourPoint::new(
            self.x,
            self.y,
            self.typ.to_norad_point_type(),
            self.smooth,
            None, // name
            None, // identifier
        )
    }
}

impl PointTypeData {
    pub fn from_norad_point_type(norad_type: &norad::PointType) -> Self {
        match norad_type {
            norad::PointType::Move => PointTypeData::Move,
            norad::PointType::Line => PointTypeData::Line,
            norad::PointType::OffCurve => PointTypeData::OffCurve,
            norad::PointType::Curve => PointTypeData::Curve,
            norad::PointType::QCurve => PointTypeData::QCurve,
        }
    }

    pub fn to_norad_point_type(&self) -> norad::PointType {
        match self {
            PointTypeData::Move => norad::PointType::Move,
            PointTypeData::Line => norad::PointType::Line,
            PointTypeData::OffCurve => norad::PointType::OffCurve,
            PointTypeData::Curve => norad::PointType::Curve,
            PointTypeData::QCurve => norad::PointType::QCurve,
        }
    }
}

impl FontData {
    /// Extract glyph data from a norad Font
    pub fn from_norad_font(font: &Font, path: Option<PathBuf>) -> Self {
        let mut glyphs = HashMap::new();

        let layer = font.default_layer();
        for glyph in layer.iter() {
            let glyph_data = GlyphData::from_norad_glyph(glyph);
            glyphs.insert(glyph.name().to_string(), glyph_data);
        }

        Self { glyphs, path }
    }

    /// Convert back to a complete norad Font
    pub fn to_norad_font(&self, info: &FontInfo) -> Font {
        let mut font = Font::new();
        font.font_info = info.to_norad_font_info();

        let layer = font.default_layer_mut();
        for glyph_data in self.glyphs.values() {
            layer.insert_glyph(glyph_data.to_norad_glyph());
        }

        font
    }
}
