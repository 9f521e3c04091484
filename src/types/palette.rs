//! Per-entity palette mapping slots to colours.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{DyeError, Result};

use super::{slot_list, Colour, Slot, UnknownSlotPolicy};

/// Palette as written in YAML/JSON: slot name to hex string.
pub type RawPalette = BTreeMap<String, String>;

/// A mapping from slots to colours.
///
/// May be partial; whether a missing slot is an error is decided at
/// synthesis time. Two palettes with the same entries are equal no matter
/// how they were built.
///
/// Deserializing a `Palette` directly always rejects unknown slot names.
/// To honour a configured [`UnknownSlotPolicy`], deserialize a
/// [`RawPalette`] and pass it to [`Palette::from_entries`], as character
/// files do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPalette", into = "RawPalette")]
pub struct Palette {
    colours: BTreeMap<Slot, Colour>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a palette from `(slot name, hex colour)` pairs.
    ///
    /// Every colour is validated. Unknown slot names are handled according
    /// to `unknown`. Later entries for the same slot replace earlier ones.
    pub fn from_entries<I, K, V>(entries: I, unknown: UnknownSlotPolicy) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut palette = Self::new();

        for (name, value) in entries {
            let name = name.as_ref();
            let colour = Colour::from_hex(value.as_ref()).map_err(|e| match e {
                DyeError::InvalidColor { message, help } => DyeError::InvalidColor {
                    message: format!("slot '{}': {}", name, message),
                    help,
                },
                other => other,
            })?;

            match Slot::from_name(name) {
                Some(slot) => palette.set(slot, colour),
                None => match unknown {
                    UnknownSlotPolicy::Reject => {
                        return Err(DyeError::UnknownSlot {
                            name: name.to_string(),
                            help: Some(format!(
                                "Known slots are {}, or set `unknown_slots: ignore` in dye.yaml",
                                slot_list()
                            )),
                        })
                    }
                    UnknownSlotPolicy::Ignore => {}
                },
            }
        }

        Ok(palette)
    }

    /// Builder-style [`Palette::set`].
    pub fn with(mut self, slot: Slot, colour: Colour) -> Self {
        self.set(slot, colour);
        self
    }

    /// Set the colour for a slot, replacing any previous one.
    pub fn set(&mut self, slot: Slot, colour: Colour) {
        self.colours.insert(slot, colour);
    }

    /// Get the colour for a slot.
    pub fn get(&self, slot: Slot) -> Option<Colour> {
        self.colours.get(&slot).copied()
    }

    /// Iterate defined slots in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, Colour)> + '_ {
        self.colours.iter().map(|(slot, colour)| (*slot, *colour))
    }

    /// Slots with no colour, in canonical order.
    pub fn missing(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| !self.colours.contains_key(slot))
            .collect()
    }

    /// Check whether every slot has a colour.
    pub fn is_complete(&self) -> bool {
        self.colours.len() == Slot::ALL.len()
    }

    /// Get the number of defined slots.
    pub fn len(&self) -> usize {
        self.colours.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colours.is_empty()
    }
}

impl TryFrom<RawPalette> for Palette {
    type Error = DyeError;

    fn try_from(raw: RawPalette) -> Result<Self> {
        Self::from_entries(raw, UnknownSlotPolicy::Reject)
    }
}

impl From<Palette> for RawPalette {
    fn from(palette: Palette) -> Self {
        palette
            .iter()
            .map(|(slot, colour)| (slot.name().to_string(), colour.to_string()))
            .collect()
    }
}
