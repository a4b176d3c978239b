//! Component decomposition
//!
//! Expands every component reference of a glyph into concrete point data.
//! Two independently authored fonts give no guarantee that their component
//! references line up, so both sides are decomposed before interpolating
//! whenever either uses components.

use crate::core::errors::TweenResult;
use crate::font_source::{ContourData, FontData, GlyphData, OutlineData};
use anyhow::bail;
use kurbo::Affine;
use tracing::trace;

/// Components nested deeper than this are assumed to be cyclic
const MAX_COMPONENT_DEPTH: usize = 16;

/// Produce an equivalent glyph with all components expanded
///
/// The source glyph is untouched; the result carries the source's width,
/// height, and own contours plus every referenced glyph's contours with
/// placement transforms applied, and has no components left. A glyph with
/// zero components comes back point-for-point equal.
pub fn decompose_components(font: &FontData, glyph: &GlyphData) -> TweenResult<GlyphData> {
    let mut contours = Vec::new();
    collect_contours(font, glyph, Affine::IDENTITY, 0, &mut contours)?;

    trace!(
        glyph = %glyph.name,
        contours = contours.len(),
        "decomposed components"
    );

    Ok(GlyphData {
        name: glyph.name.clone(),
        width: glyph.width,
        height: glyph.height,
        unicodes: glyph.unicodes.clone(),
        outline: if contours.is_empty() {
            None
        } else {
            Some(OutlineData { contours })
        },
        components: Vec::new(),
    })
}

fn collect_contours(
    font: &FontData,
    glyph: &GlyphData,
    transform: Affine,
    depth: usize,
    out: &mut Vec<ContourData>,
) -> TweenResult<()> {
    if depth > MAX_COMPONENT_DEPTH {
        bail!(
            "component nesting exceeds {} levels in '{}', reference cycle likely",
            MAX_COMPONENT_DEPTH,
            glyph.name
        );
    }

    for contour in glyph.contours() {
        out.push(ContourData {
            points: contour
                .points
                .iter()
                .map(|point| point.transformed(transform))
                .collect(),
        });
    }

    for component in &glyph.components {
        let Some(base) = font.glyph(&component.base) else {
            bail!(
                "component base glyph '{}' not found while decomposing '{}'",
                component.base,
                glyph.name
            );
        };
        // Base glyph points pass through the component's placement first,
        // then whatever transform the outer reference chain accumulated.
        collect_contours(font, base, transform * component.transform, depth + 1, out)?;
    }

    Ok(())
}
