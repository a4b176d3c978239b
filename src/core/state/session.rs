//! Open fonts and the current selection
//!
//! The host editor owns its font documents; the controller keeps shared
//! read-only handles to them plus the pair/glyph/percent the user picked.

use crate::core::errors::{validate_ufo_path, TweenContext, TweenResult};
use crate::font_source::{FontData, FontInfo};
use std::collections::BTreeSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// A read-only font document as exposed by the host editor
#[derive(Clone, Default)]
pub struct FontDocument {
    /// Glyph data extracted from the font source
    pub data: FontData,
    /// Names and metrics
    pub info: FontInfo,
}

impl FontDocument {
    /// Load a font document from a UFO file path
    pub fn load(path: PathBuf) -> TweenResult<Self> {
        validate_ufo_path(&path)?;

        let font = crate::data::ufo::load_ufo_from_path(&path).with_file_context("load", &path)?;

        let data = FontData::from_norad_font(&font, Some(path));
        let info = FontInfo::from_norad_font(&font);

        debug!(
            "Loaded UFO font \"{}\" with {} glyphs",
            info.display_name(),
            data.glyphs.len()
        );
        Ok(Self { data, info })
    }

    /// Get a display name for this font
    pub fn display_name(&self) -> String {
        self.info.display_name()
    }
}

/// The ordered list of fonts currently open in the host
#[derive(Clone, Default)]
pub struct FontSet {
    pub fonts: Vec<Arc<FontDocument>>,
}

impl FontSet {
    pub fn new(fonts: Vec<Arc<FontDocument>>) -> Self {
        Self { fonts }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Arc<FontDocument>> {
        self.fonts.get(index)
    }

    /// Dropdown labels for the open fonts
    ///
    /// When every font has a style name, the style name alone is enough
    /// unless family names are set and differ, in which case both are
    /// shown. When only family names are set and differ, those are used.
    /// Otherwise fall back to the per-font display name.
    pub fn display_names(&self) -> Vec<String> {
        let style_names_set = self.fonts.iter().all(|f| !f.info.style_name.is_empty());
        let family_names_set = self.fonts.iter().all(|f| !f.info.family_name.is_empty());
        let family_names_differ = self
            .fonts
            .iter()
            .map(|f| f.info.family_name.as_str())
            .collect::<BTreeSet<_>>()
            .len()
            > 1;

        if style_names_set {
            if family_names_set && family_names_differ {
                self.fonts
                    .iter()
                    .map(|f| format!("{} {}", f.info.family_name, f.info.style_name))
                    .collect()
            } else {
                self.fonts
                    .iter()
                    .map(|f| f.info.style_name.clone())
                    .collect()
            }
        } else if family_names_set && family_names_differ {
            self.fonts
                .iter()
                .map(|f| f.info.family_name.clone())
                .collect()
        } else {
            self.fonts.iter().map(|f| f.display_name()).collect()
        }
    }
}

/// The user's current pair/glyph/percent selection
#[derive(Clone, Debug, PartialEq)]
pub struct Selection {
    /// Index of the first font in the set
    pub left: usize,
    /// Index of the second font in the set
    pub right: usize,
    /// Currently selected glyph, if any
    pub glyph_name: Option<String>,
    /// Interpolation value in percent
    pub percent: f64,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            left: 0,
            right: 1,
            glyph_name: None,
            percent: 50.0,
        }
    }
}

impl Selection {
    /// The interpolation factor the engine takes
    pub fn factor(&self) -> f64 {
        self.percent / 100.0
    }
}
