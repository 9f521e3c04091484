//! Project configuration (dye.yaml) parsing.
//!
//! The configuration picks the sprite naming scheme and how unsafe or
//! incomplete input is treated. Every field is optional.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DyeError, Result};
use crate::filter_id::FilterIdentifier;
use crate::locator::{SpriteLayout, SpriteLocator};
use crate::synth::Synthesizer;
use crate::types::{MissingSlotPolicy, TagPolicy, UnknownSlotPolicy};

/// Name of the configuration file looked up by [`Config::discover`].
pub const CONFIG_FILENAME: &str = "dye.yaml";

/// Resolution settings loaded from dye.yaml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Sprite sheet naming scheme.
    pub sprites: SpriteLayout,

    /// Handling of unsafe characters in classes, states and entity ids.
    pub tags: TagPolicy,

    /// Handling of palettes without a colour for every slot.
    pub missing_slots: MissingSlotPolicy,

    /// Handling of palette entries for unknown slots.
    pub unknown_slots: UnknownSlotPolicy,
}

impl Config {
    /// Load configuration from a dye.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DyeError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read config: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Load `dye.yaml` from `dir`, or the defaults if there is none.
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILENAME);
        if path.is_file() {
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        // An empty document is YAML null, not an empty mapping.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(content).map_err(|e| DyeError::Parse {
            message: format!("Invalid config: {}", e),
            help: Some(format!("Check {} syntax", CONFIG_FILENAME)),
        })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let root = &self.sprites.root;
        if !root.starts_with('/') || (root.len() > 1 && root.ends_with('/')) {
            return Err(DyeError::Parse {
                message: format!("Invalid sprite root: '{}'", root),
                help: Some("Use an absolute path without a trailing '/', e.g. /sprites".to_string()),
            });
        }

        let ext = &self.sprites.extension;
        if ext.is_empty() || !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
            return Err(DyeError::Parse {
                message: format!("Invalid sprite extension: '{}'", ext),
                help: Some("Use letters and digits only, without the dot".to_string()),
            });
        }

        Ok(())
    }

    /// Sprite locator using this configuration.
    pub fn locator(&self) -> SpriteLocator {
        SpriteLocator::new(self.sprites.clone(), self.tags)
    }

    /// Filter identifier using this configuration.
    pub fn identifier(&self) -> FilterIdentifier {
        FilterIdentifier::with_policy(self.tags)
    }

    /// Filter synthesizer using this configuration.
    pub fn synthesizer(&self) -> Synthesizer {
        Synthesizer::new(self.missing_slots)
    }
}
