//! Font information and metrics
//!
//! Names and measurement data extracted from a font's info, used for the
//! dropdown labels and the preview scaling heuristic.

use norad::Font;

/// Font information
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FontInfo {
    pub family_name: String,
    pub style_name: String,
    pub units_per_em: f64,
    pub ascender: Option<f64>,
    pub descender: Option<f64>,
    pub x_height: Option<f64>,
    pub cap_height: Option<f64>,
}

impl FontInfo {
    /// Extract font info from norad Font
    pub fn from_norad_font(font: &Font) -> Self {
        let units_per_em = font
            .font_info
            .units_per_em
            .map(|v| v.to_string().parse().unwrap_or(1000.0))
            .unwrap_or(1000.0);

        Self {
            family_name: Self::extract_string_field(
                &font.font_info,
                |info| &info.family_name,
                "Untitled",
            ),
            style_name: Self::extract_string_field(
                &font.font_info,
                |info| &info.style_name,
                "Regular",
            ),
            units_per_em,
            ascender: font.font_info.ascender,
            descender: font.font_info.descender,
            x_height: font.font_info.x_height,
            cap_height: font.font_info.cap_height,
        }
    }

    /// Helper to extract string fields with defaults
    fn extract_string_field<F>(font_info: &norad::FontInfo, getter: F, default: &str) -> String
    where
        F: Fn(&norad::FontInfo) -> &Option<String>,
    {
        getter(font_info)
            .as_ref()
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Get a display name combining family and style names
    pub fn display_name(&self) -> String {
        let parts: Vec<&str> = [&self.family_name, &self.style_name]
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| s.as_str())
            .collect();

        if parts.is_empty() {
            "Untitled Font".to_string()
        } else {
            parts.join(" ")
        }
    }

    /// Convert back to norad FontInfo
    pub fn to_norad_font_info(&self) -> norad::FontInfo {
        let mut info = norad::FontInfo::default();

        if !self.family_name.is_empty() {
            info.family_name = Some(self.family_name.clone());
        }
        if !self.style_name.is_empty() {
            info.style_name = Some(self.style_name.clone());
        }

        if let Some(units_per_em) =
            norad::fontinfo::NonNegativeIntegerOrFloat::new(self.units_per_em)
        {
            info.units_per_em = Some(units_per_em);
        }
        info.ascender = self.ascender;
        info.descender = self.descender;
        info.x_height = self.x_height;
        info.cap_height = self.cap_height;
        info
    }
}
