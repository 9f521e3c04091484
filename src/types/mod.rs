//! Core domain types for dye.
//!
//! This module contains the values the resolvers work on:
//! - `Colour` - 24-bit RGB colour values
//! - `Slot` - the recolourable regions of a sprite
//! - `Palette` - slot to colour mapping for one entity
//! - policies and tag normalization for unsafe input

mod colour;
mod palette;
mod policy;
mod slot;
mod tag;

pub use colour::Colour;
pub use palette::{Palette, RawPalette};
pub use policy::{MissingSlotPolicy, TagPolicy, UnknownSlotPolicy};
pub use slot::Slot;
pub(crate) use slot::slot_list;
pub use tag::{normalize_entity, normalize_tag, TagKind};
