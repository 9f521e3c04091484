//! Palette slot enumeration.
//!
//! Slots are the semantic regions of a sprite that can be recoloured
//! independently. The set is closed: adding a slot means adding a variant
//! here and to [`Slot::ALL`], nothing else.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DyeError, Result};

/// A recolourable region of a sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Skin,
    Hair,
    Clothing,
    Accent,
}

impl Slot {
    /// Every slot, in canonical order.
    ///
    /// Synthesis always walks this order, whatever order a palette was
    /// built in.
    pub const ALL: [Slot; 4] = [Slot::Skin, Slot::Hair, Slot::Clothing, Slot::Accent];

    /// Get the slot name used in palette files and filter ids.
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Skin => "skin",
            Slot::Hair => "hair",
            Slot::Clothing => "clothing",
            Slot::Accent => "accent",
        }
    }

    /// Look up a slot by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.name() == name)
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Slot {
    type Err = DyeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s).ok_or_else(|| DyeError::InvalidInput {
            message: format!("'{}' is not a palette slot", s),
            help: Some(format!("Expected one of: {}", slot_list())),
        })
    }
}

/// Comma separated slot names, for help text.
pub(crate) fn slot_list() -> String {
    Slot::ALL
        .iter()
        .map(|s| s.name())
        .collect::<Vec<_>>()
        .join(", ")
}
