//! Character definitions and full identity resolution.
//!
//! A character file bundles everything a renderer needs to draw one entity:
//!
//! ```yaml
//! entity: hero-123
//! class: Warrior
//! state: idle
//! palette:
//!   skin: "#ffdbac"
//!   hair: "#593208"
//!   clothing: "#0000ff"
//!   accent: "#ffff00"
//! ```
//!
//! Resolving it runs the locator, identifier and synthesizer side by side;
//! none of them knows about the others.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{DyeError, Result};
use crate::filter_id::FilterId;
use crate::locator::SpriteAssetPath;
use crate::types::{Palette, RawPalette, Slot};

/// A character instance as written in a YAML or JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Character {
    /// Stable id distinguishing this instance from others.
    pub entity: String,
    /// Character class, e.g. "Warrior".
    pub class: String,
    /// Animation state, e.g. "idle".
    pub state: String,
    /// Slot name to hex colour. Validated on resolution so the configured
    /// unknown-slot policy applies.
    #[serde(default)]
    pub palette: RawPalette,
}

/// One slot's filter, keyed by its filter id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlotFilter {
    pub id: FilterId,
    pub slot: Slot,
    /// Hex colour, or "transparent" for a no-op pass.
    pub colour: String,
}

/// Everything a renderer needs to draw a character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedCharacter {
    pub entity: String,
    pub sprite: SpriteAssetPath,
    pub filters: Vec<SlotFilter>,
    /// CSS `filter` value recolouring the whole sprite.
    pub css: String,
}

impl Character {
    /// Load a character from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DyeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read character: {}", e),
        })?;

        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&content)
        } else {
            Self::parse_yaml(&content)
        }
    }

    /// Parse a character from YAML.
    pub fn parse_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| DyeError::Parse {
            message: format!("Invalid character: {}", e),
            help: Some("Expected entity, class, state and palette keys".to_string()),
        })
    }

    /// Parse a character from JSON.
    pub fn parse_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| DyeError::Parse {
            message: format!("Invalid character: {}", e),
            help: Some("Expected entity, class, state and palette keys".to_string()),
        })
    }

    /// Validated palette under the configured unknown-slot policy.
    pub fn palette(&self, config: &Config) -> Result<Palette> {
        Palette::from_entries(&self.palette, config.unknown_slots)
    }

    /// Resolve sprite path, filter ids and recolour filter.
    pub fn resolve(&self, config: &Config) -> Result<ResolvedCharacter> {
        let sprite = config.locator().resolve(&self.class, &self.state)?;
        let filter = config.synthesizer().synthesize(&self.palette(config)?)?;
        let identifier = config.identifier();

        let filters = filter
            .passes()
            .iter()
            .map(|pass| {
                Ok(SlotFilter {
                    id: identifier.compute(&self.entity, pass.slot)?,
                    slot: pass.slot,
                    colour: pass
                        .colour
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "transparent".to_string()),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ResolvedCharacter {
            entity: self.entity.clone(),
            sprite,
            filters,
            css: filter.to_css(),
        })
    }
}
