//! Stable filter identifiers.
//!
//! A filter id names the recolour filter for one slot of one entity, in the
//! form `filter-<entity>-<slot>`. Renderers use it as a cache key, so the
//! mapping must be deterministic and injective.
//!
//! Slot names never contain `-` and always come last, so an id splits back
//! into its parts at the final `-`, even when the entity id itself contains
//! hyphens (`filter-hero-123-skin`).

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::error::{DyeError, Result};
use crate::types::{normalize_entity, Slot, TagPolicy};

const PREFIX: &str = "filter-";
const SEPARATOR: char = '-';

/// Identifier for one slot's filter on one entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterId {
    id: String,
    slot: Slot,
}

impl FilterId {
    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Split the id back into its (normalized) entity and slot.
    pub fn parts(&self) -> (&str, Slot) {
        let end = self.id.len() - self.slot.name().len() - SEPARATOR.len_utf8();
        (&self.id[PREFIX.len()..end], self.slot)
    }

    /// Parse an id produced by [`compute_filter_id`].
    ///
    /// Uses the default reject policy; ids computed with
    /// `TagPolicy::Encode` need [`FilterIdentifier::parse`] on an identifier
    /// with that policy.
    pub fn parse(s: &str) -> Result<Self> {
        FilterIdentifier::new().parse(s)
    }
}

impl fmt::Display for FilterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl Serialize for FilterId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.id)
    }
}

impl AsRef<str> for FilterId {
    fn as_ref(&self) -> &str {
        &self.id
    }
}

impl PartialEq<&str> for FilterId {
    fn eq(&self, other: &&str) -> bool {
        self.id == *other
    }
}

/// Computes filter ids under a given tag policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterIdentifier {
    policy: TagPolicy,
}

impl FilterIdentifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: TagPolicy) -> Self {
        Self { policy }
    }

    /// Compute the id for an entity's slot.
    pub fn compute(&self, entity_id: &str, slot: Slot) -> Result<FilterId> {
        let entity = normalize_entity(entity_id, self.policy)?;
        Ok(FilterId {
            id: format!("{PREFIX}{entity}{SEPARATOR}{slot}"),
            slot,
        })
    }

    /// Parse an id this identifier would compute.
    ///
    /// Only canonical ids are accepted: the entity is recovered (decoding
    /// percent escapes under `Encode`) and the id must compute back to `s`.
    pub fn parse(&self, s: &str) -> Result<FilterId> {
        let invalid = || DyeError::InvalidInput {
            message: format!("'{}' is not a filter id", s),
            help: Some("Expected filter-<entity>-<slot>".to_string()),
        };

        let body = s.strip_prefix(PREFIX).ok_or_else(invalid)?;
        let (entity, slot) = body.rsplit_once(SEPARATOR).ok_or_else(invalid)?;
        let slot = Slot::from_name(slot).ok_or_else(invalid)?;

        let entity = match self.policy {
            TagPolicy::Reject => Cow::Borrowed(entity),
            TagPolicy::Encode => urlencoding::decode(entity).map_err(|_| invalid())?,
        };

        let id = self.compute(&entity, slot).map_err(|_| invalid())?;
        if id.as_str() != s {
            return Err(invalid());
        }
        Ok(id)
    }
}

/// Compute a filter id, rejecting entity ids with unsafe characters.
///
/// ```
/// use dye::{compute_filter_id, Slot};
///
/// let id = compute_filter_id("hero-123", Slot::Skin).unwrap();
/// assert_eq!(id.as_str(), "filter-hero-123-skin");
/// ```
pub fn compute_filter_id(entity_id: &str, slot: Slot) -> Result<FilterId> {
    FilterIdentifier::new().compute(entity_id, slot)
}
