//! Normalization of caller-supplied names.
//!
//! Character classes and animation states become path segments; entity ids
//! become part of filter ids. Both go through a whitelist, and anything
//! outside it is rejected or percent-encoded according to [`TagPolicy`].
//! Encoding also escapes `%`, so two distinct inputs never normalize to the
//! same token.

use crate::error::{DyeError, Result};

use super::TagPolicy;

/// Which kind of name is being normalized, for error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    CharacterClass,
    AnimationState,
    Entity,
}

impl TagKind {
    fn label(&self) -> &'static str {
        match self {
            TagKind::CharacterClass => "character class",
            TagKind::AnimationState => "animation state",
            TagKind::Entity => "entity id",
        }
    }

    /// Whether `c` may appear unescaped.
    fn is_safe(&self, c: char) -> bool {
        match self {
            // '_' separates class from state in sprite file names.
            TagKind::CharacterClass | TagKind::AnimationState => {
                c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
            }
            TagKind::Entity => c.is_ascii_alphanumeric() || c == '-' || c == '_',
        }
    }
}

/// Lowercase a class or state tag and make it safe for a path segment.
///
/// Only ASCII letters are folded. Non-ASCII characters keep their own bytes,
/// so a look-alike such as KELVIN SIGN never turns into a plain `k`.
pub fn normalize_tag(kind: TagKind, raw: &str, policy: TagPolicy) -> Result<String> {
    let folded = raw.to_ascii_lowercase();
    escape(kind, raw, &folded, policy)
}

/// Make an entity id safe for a filter id. Case is preserved.
pub fn normalize_entity(raw: &str, policy: TagPolicy) -> Result<String> {
    escape(TagKind::Entity, raw, raw, policy)
}

fn escape(kind: TagKind, raw: &str, value: &str, policy: TagPolicy) -> Result<String> {
    if value.is_empty() {
        return Err(DyeError::InvalidInput {
            message: format!("{} must not be empty", kind.label()),
            help: None,
        });
    }

    let Some(bad) = value.chars().find(|&c| !kind.is_safe(c)) else {
        return Ok(value.to_string());
    };

    match policy {
        TagPolicy::Reject => Err(DyeError::InvalidInput {
            message: format!("{} '{}' contains {:?}", kind.label(), raw, bad),
            help: Some(format!(
                "Use only {}, or set `tags: encode` in dye.yaml",
                allowed(kind)
            )),
        }),
        TagPolicy::Encode => Ok(percent_encode(kind, value)),
    }
}

fn allowed(kind: TagKind) -> &'static str {
    match kind {
        TagKind::CharacterClass | TagKind::AnimationState => "letters, digits and '-'",
        TagKind::Entity => "letters, digits, '-' and '_'",
    }
}

/// Percent-encode everything outside the kind's whitelist.
///
/// `urlencoding` leaves `-`, `.`, `_` and `~` alone; whichever of those the
/// kind does not allow are escaped afterwards. Its output contains them only
/// where the input did, so the replacement cannot touch an escape sequence.
fn percent_encode(kind: TagKind, value: &str) -> String {
    let mut encoded = urlencoding::encode(value).into_owned();
    for (c, escaped) in [('.', "%2E"), ('_', "%5F"), ('~', "%7E")] {
        if !kind.is_safe(c) {
            encoded = encoded.replace(c, escaped);
        }
    }
    encoded
}
