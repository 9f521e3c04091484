//! Policies for inputs that cannot be used as-is.
//!
//! Each policy is an explicit configuration choice so the same input is
//! always handled the same way.

use serde::{Deserialize, Serialize};

/// What to do with a tag or entity id containing unsafe characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Fail with an invalid input error.
    #[default]
    Reject,
    /// Percent-encode every unsafe byte.
    Encode,
}

/// What to do when a palette lacks one of the known slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingSlotPolicy {
    /// Fail with a missing slot error.
    #[default]
    Reject,
    /// Keep the slot's position with a transparent, no-op tint.
    Transparent,
}

/// What to do with a palette entry naming an unknown slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownSlotPolicy {
    /// Fail with an unknown slot error.
    #[default]
    Reject,
    /// Drop the entry.
    Ignore,
}
