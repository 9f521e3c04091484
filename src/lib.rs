//! dye - Sprite identity resolution
//!
//! Resolves which sprite sheet a character uses and how to recolour it from
//! a per-entity palette, without pre-rendering recoloured images:
//!
//! - [`resolve_sprite_path`] maps a class and animation state to a sheet path
//! - [`compute_filter_id`] names a slot's filter for one entity
//! - [`synthesize_color_filter`] turns a palette into a drop-shadow recolour stack
//!
//! All three are pure and independent; the rendering layer combines them.

pub mod character;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter_id;
pub mod locator;
pub mod output;
pub mod synth;
pub mod types;

pub use character::{Character, ResolvedCharacter, SlotFilter};
pub use config::{Config, CONFIG_FILENAME};
pub use error::{DyeError, Result};
pub use filter_id::{compute_filter_id, FilterId, FilterIdentifier};
pub use locator::{resolve_sprite_path, SpriteAssetPath, SpriteLayout, SpriteLocator};
pub use synth::{synthesize_color_filter, FilterDescription, Synthesizer, TintPass};
pub use types::{
    Colour, MissingSlotPolicy, Palette, RawPalette, Slot, TagPolicy, UnknownSlotPolicy,
};
