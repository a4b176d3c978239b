//! Selection/reaction controller
//!
//! Reacts to host editor events (fonts opened or closed, glyph switched,
//! pair dropdown changed, slider edited) by recomputing the compatibility
//! report and the interpolated preview, then pushing both to the display
//! surface. One synchronous computation per event; each refresh fully
//! supersedes the previous one, so there is nothing to queue or cancel.

use crate::core::errors::TweenResult;
use crate::core::settings::TweenSettings;
use crate::core::state::{FontDocument, FontSet, Selection};
use crate::font_source::{FontData, GlyphData};
use crate::interpolation::{
    check_compatibility, decompose_components, instance_name, interpolate_glyphs,
};
use crate::preview::display::{preview_transform, DisplaySurface, PreviewFrame};
use anyhow::bail;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Host editor notifications the controller subscribes to
///
/// The host invokes `PreviewController::handle_event` synchronously from
/// its own event loop; this enum is the whole subscription contract.
#[derive(Clone)]
pub enum HostEvent {
    /// The set of open fonts changed (opened, closed, reordered)
    FontsChanged(Vec<Arc<FontDocument>>),
    /// A different font pair was picked in the dropdowns
    PairSelected { left: usize, right: usize },
    /// The host switched the current glyph; `None` clears the selection
    GlyphSwitched(Option<String>),
    /// The interpolation slider or stepper moved (value in percent)
    PercentChanged(f64),
}

/// User-visible outcome of one refresh
#[derive(Clone, Debug, PartialEq)]
pub enum StatusReport {
    /// Fewer than two fonts are open
    NoFonts,
    /// No glyph is selected
    NoGlyph,
    /// The selected glyph is absent from one of the two fonts
    MissingGlyph { glyph: String, font: String },
    /// The two outlines do not share topology (or decomposition failed)
    Incompatible { glyph: String, reason: String },
    /// Interpolation succeeded
    Compatible,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusReport::NoFonts => write!(f, "Open some fonts"),
            StatusReport::NoGlyph => write!(f, "Select a glyph"),
            StatusReport::MissingGlyph { glyph, font } => {
                write!(f, "/{} is missing from {}", glyph, font)
            }
            StatusReport::Incompatible { glyph, reason } => {
                write!(
                    f,
                    "*** /{} is not compatible for interpolation: {} ***",
                    glyph, reason
                )
            }
            StatusReport::Compatible => write!(f, "Compatible"),
        }
    }
}

/// Maintains the current font pair, glyph, and percent, and recomputes the
/// preview whenever any of them changes
pub struct PreviewController {
    fonts: FontSet,
    selection: Selection,
    settings: TweenSettings,
}

impl PreviewController {
    pub fn new(settings: TweenSettings) -> Self {
        let selection = Selection {
            percent: settings.default_percent,
            ..Default::default()
        };
        Self {
            fonts: FontSet::default(),
            selection,
            settings,
        }
    }

    pub fn fonts(&self) -> &FontSet {
        &self.fonts
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Single subscription entry point; the host calls this synchronously
    /// on every relevant document or widget change.
    pub fn handle_event(&mut self, event: HostEvent, surface: &mut dyn DisplaySurface) {
        match event {
            HostEvent::FontsChanged(fonts) => {
                self.fonts = FontSet::new(fonts);
                if self.selection.left >= self.fonts.len()
                    || self.selection.right >= self.fonts.len()
                {
                    // Pair fell out of range; reset to the first two slots
                    self.selection.left = 0;
                    self.selection.right = 1;
                }
                debug!("Font set changed, {} fonts open", self.fonts.len());
            }
            HostEvent::PairSelected { left, right } => {
                if left < self.fonts.len() && right < self.fonts.len() {
                    self.selection.left = left;
                    self.selection.right = right;
                } else {
                    warn!(
                        "Ignoring pair selection ({}, {}) with {} fonts open",
                        left,
                        right,
                        self.fonts.len()
                    );
                }
            }
            HostEvent::GlyphSwitched(name) => {
                self.selection.glyph_name = name.filter(|n| !n.is_empty());
            }
            HostEvent::PercentChanged(percent) => {
                self.selection.percent = self.settings.clamp_percent(percent);
            }
        }

        self.refresh(surface);
    }

    /// Recompute the report and preview and push both to the surface
    pub fn refresh(&self, surface: &mut dyn DisplaySurface) {
        let (status, frame) = self.compute();
        surface.report(&status);
        surface.show(frame);
    }

    /// Interpolate the current selection and insert the result into the
    /// host's active font under a `<glyph>.<percent>` name
    pub fn generate_into(&self, active: &mut FontData) -> TweenResult<String> {
        let Some((left, right)) = self.selected_pair() else {
            bail!("fewer than two fonts open");
        };
        let Some(glyph_name) = self.selection.glyph_name.as_deref() else {
            bail!("no glyph selected");
        };
        for font in [&left, &right] {
            if !font.data.contains_glyph(glyph_name) {
                bail!(
                    "glyph '{}' is missing from {}",
                    glyph_name,
                    font.display_name()
                );
            }
        }

        let mut glyph = self.interpolated(left, right, glyph_name)?;
        let name = instance_name(glyph_name, self.selection.factor());
        glyph.name = name.clone();
        active.insert_glyph(glyph);

        info!("Added glyph \"{}\" to the active font", name);
        Ok(name)
    }

    fn selected_pair(&self) -> Option<(&Arc<FontDocument>, &Arc<FontDocument>)> {
        if self.fonts.len() < 2 {
            return None;
        }
        let left = self.fonts.get(self.selection.left)?;
        let right = self.fonts.get(self.selection.right)?;
        Some((left, right))
    }

    fn compute(&self) -> (StatusReport, Option<PreviewFrame>) {
        let Some((left, right)) = self.selected_pair() else {
            return (StatusReport::NoFonts, None);
        };
        let Some(glyph_name) = self.selection.glyph_name.as_deref() else {
            return (StatusReport::NoGlyph, None);
        };

        for font in [&left, &right] {
            if !font.data.contains_glyph(glyph_name) {
                return (
                    StatusReport::MissingGlyph {
                        glyph: glyph_name.to_string(),
                        font: font.display_name(),
                    },
                    None,
                );
            }
        }

        match self.interpolated(left, right, glyph_name) {
            Ok(glyph) => {
                // Membership was checked above
                let right_width = right
                    .data
                    .glyph(glyph_name)
                    .map(|g| g.width)
                    .unwrap_or_default();
                let transform =
                    preview_transform(&left.info, right_width, self.settings.preview_upm);
                let frame = PreviewFrame::new(&glyph, transform);
                (StatusReport::Compatible, Some(frame))
            }
            Err(err) => (
                StatusReport::Incompatible {
                    glyph: glyph_name.to_string(),
                    reason: err.to_string(),
                },
                None,
            ),
        }
    }

    /// Decompose where needed, re-check compatibility on what actually gets
    /// interpolated, then interpolate at the current factor.
    fn interpolated(
        &self,
        left: &FontDocument,
        right: &FontDocument,
        glyph_name: &str,
    ) -> TweenResult<GlyphData> {
        let Some(glyph_a) = left.data.glyph(glyph_name) else {
            bail!("glyph '{}' is missing from {}", glyph_name, left.display_name());
        };
        let Some(glyph_b) = right.data.glyph(glyph_name) else {
            bail!("glyph '{}' is missing from {}", glyph_name, right.display_name());
        };

        let (glyph_a, glyph_b) = if glyph_a.has_components() || glyph_b.has_components() {
            (
                decompose_components(&left.data, glyph_a)?,
                decompose_components(&right.data, glyph_b)?,
            )
        } else {
            (glyph_a.clone(), glyph_b.clone())
        };

        let report = check_compatibility(&glyph_a, &glyph_b);
        if !report.compatible {
            bail!("{}", report.reason.unwrap_or_else(|| "topology mismatch".to_string()));
        }

        Ok(interpolate_glyphs(&glyph_a, &glyph_b, self.selection.factor()))
    }
}

impl Default for PreviewController {
    fn default() -> Self {
        Self::new(TweenSettings::default())
    }
}
