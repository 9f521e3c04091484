//! Palette recolour filter synthesis.
//!
//! Renderers without native palette swapping can recolour a sprite by
//! stacking zero-offset, zero-blur drop shadows: each pass paints a flat
//! colour restricted to the sprite's opaque silhouette. The synthesizer
//! turns a [`Palette`] into that stack, one pass per slot.
//!
//! Passes always follow [`Slot::ALL`], so equal palettes produce textually
//! identical filters regardless of how they were built. Output is never
//! partial: a palette that cannot be fully described is an error.

use std::fmt;

use crate::error::{DyeError, Result};
use crate::filter_id::FilterIdentifier;
use crate::types::{Colour, MissingSlotPolicy, Palette, Slot};

/// One tint pass in a filter stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TintPass {
    pub slot: Slot,
    /// `None` for a transparent, no-op pass.
    pub colour: Option<Colour>,
}

impl TintPass {
    /// CSS `drop-shadow()` for this pass.
    pub fn to_css(&self) -> String {
        match self.colour {
            Some(colour) => format!("drop-shadow(0 0 0 {})", colour),
            None => "drop-shadow(0 0 0 transparent)".to_string(),
        }
    }

    /// `feColorMatrix` values for this pass.
    ///
    /// A coloured pass replaces RGB with the slot colour and keeps alpha,
    /// which is the same silhouette fill the drop shadow gives. A no-op
    /// pass is the identity matrix.
    fn color_matrix(&self) -> String {
        match self.colour {
            Some(colour) => {
                let (r, g, b) = colour.to_unit_components();
                format!(
                    "0 0 0 0 {:.4} 0 0 0 0 {:.4} 0 0 0 0 {:.4} 0 0 0 1 0",
                    r, g, b
                )
            }
            None => "1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 1 0".to_string(),
        }
    }

    fn colour_label(&self) -> String {
        match self.colour {
            Some(colour) => colour.to_string(),
            None => "transparent".to_string(),
        }
    }
}

/// A complete recolour filter: one pass per slot, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FilterDescription {
    passes: Vec<TintPass>,
}

impl FilterDescription {
    /// Get the passes in canonical slot order.
    pub fn passes(&self) -> &[TintPass] {
        &self.passes
    }

    /// Get the pass for a slot.
    pub fn pass(&self, slot: Slot) -> Option<&TintPass> {
        self.passes.iter().find(|pass| pass.slot == slot)
    }

    /// Check whether any pass tints with `colour`.
    pub fn contains_colour(&self, colour: Colour) -> bool {
        self.passes.iter().any(|pass| pass.colour == Some(colour))
    }

    /// Render as a CSS `filter` value.
    pub fn to_css(&self) -> String {
        self.passes
            .iter()
            .map(TintPass::to_css)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Render as an SVG `<defs>` block with one `<filter>` per slot.
    ///
    /// Filter ids come from `identifier`, so a renderer can reference each
    /// slot's filter by the same key it caches under.
    pub fn to_svg(&self, identifier: &FilterIdentifier, entity_id: &str) -> Result<String> {
        let mut svg = String::from("<defs>\n");

        for pass in &self.passes {
            let id = identifier.compute(entity_id, pass.slot)?;
            svg.push_str(&format!(
                "  <filter id=\"{}\" data-colour=\"{}\" color-interpolation-filters=\"sRGB\">\
                 <feColorMatrix type=\"matrix\" values=\"{}\"/></filter>\n",
                id,
                pass.colour_label(),
                pass.color_matrix()
            ));
        }

        svg.push_str("</defs>");
        Ok(svg)
    }
}

impl fmt::Display for FilterDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

/// Builds filter descriptions under a missing-slot policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Synthesizer {
    missing: MissingSlotPolicy,
}

impl Synthesizer {
    pub fn new(missing: MissingSlotPolicy) -> Self {
        Self { missing }
    }

    /// Synthesize the filter for a palette.
    pub fn synthesize(&self, palette: &Palette) -> Result<FilterDescription> {
        let passes = Slot::ALL
            .into_iter()
            .map(|slot| match (palette.get(slot), self.missing) {
                (Some(colour), _) => Ok(TintPass {
                    slot,
                    colour: Some(colour),
                }),
                (None, MissingSlotPolicy::Transparent) => Ok(TintPass { slot, colour: None }),
                (None, MissingSlotPolicy::Reject) => Err(DyeError::MissingSlot {
                    slot: slot.name().to_string(),
                }),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(FilterDescription { passes })
    }
}

/// Synthesize a recolour filter, failing if any slot is missing.
pub fn synthesize_color_filter(palette: &Palette) -> Result<FilterDescription> {
    Synthesizer::default().synthesize(palette)
}
