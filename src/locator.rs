//! Sprite sheet path resolution.
//!
//! Maps a (character class, animation state) pair to the sprite sheet a
//! renderer should load. Paths are composed from strings only; whether the
//! file exists is the renderer's problem.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{normalize_tag, TagKind, TagPolicy};

/// Naming scheme for sprite sheets: `<root>/<class>_<state>.<extension>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteLayout {
    /// Directory prefix, starting with `/` and without a trailing `/`
    /// (except for the bare root).
    pub root: String,
    /// File extension without the dot.
    pub extension: String,
}

impl Default for SpriteLayout {
    fn default() -> Self {
        Self {
            root: "/sprites".to_string(),
            extension: "png".to_string(),
        }
    }
}

/// A resolved sprite sheet path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SpriteAssetPath(String);

impl SpriteAssetPath {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SpriteAssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SpriteAssetPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for SpriteAssetPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Resolves sprite paths with a given layout and tag policy.
#[derive(Debug, Clone, Default)]
pub struct SpriteLocator {
    layout: SpriteLayout,
    policy: TagPolicy,
}

impl SpriteLocator {
    pub fn new(layout: SpriteLayout, policy: TagPolicy) -> Self {
        Self { layout, policy }
    }

    pub fn layout(&self) -> &SpriteLayout {
        &self.layout
    }

    /// Resolve the sprite sheet for a class in an animation state.
    pub fn resolve(&self, class: &str, state: &str) -> Result<SpriteAssetPath> {
        let class = normalize_tag(TagKind::CharacterClass, class, self.policy)?;
        let state = normalize_tag(TagKind::AnimationState, state, self.policy)?;
        let root = self.layout.root.trim_end_matches('/');

        Ok(SpriteAssetPath(format!(
            "{}/{}_{}.{}",
            root, class, state, self.layout.extension
        )))
    }
}

/// Resolve a sprite path with the default layout, rejecting unsafe tags.
///
/// ```
/// assert_eq!(dye::resolve_sprite_path("Warrior", "idle").unwrap(), "/sprites/warrior_idle.png");
/// ```
pub fn resolve_sprite_path(class: &str, state: &str) -> Result<SpriteAssetPath> {
    SpriteLocator::default().resolve(class, state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DyeError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_default_layout() {
        assert_eq!(
            resolve_sprite_path("Warrior", "idle").unwrap().as_str(),
            "/sprites/warrior_idle.png"
        );
        assert_eq!(
            resolve_sprite_path("Mage", "walk").unwrap().as_str(),
            "/sprites/mage_walk.png"
        );
    }

    #[test]
    fn test_resolve_folds_case() {
        let a = resolve_sprite_path("ROGUE", "Attack-2").unwrap();
        let b = resolve_sprite_path("rogue", "attack-2").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_str(), "/sprites/rogue_attack-2.png");
    }

    #[test]
    fn test_resolve_is_deterministic() {
        let first = resolve_sprite_path("Mage", "cast").unwrap();
        for _ in 0..10 {
            assert_eq!(resolve_sprite_path("Mage", "cast").unwrap(), first);
        }
    }

    #[test]
    fn test_resolve_rejects_unsafe() {
        for (class, state) in [("", "idle"), ("mage", ""), ("../etc", "idle"), ("dark_knight", "idle")] {
            let err = resolve_sprite_path(class, state).unwrap_err();
            assert!(matches!(err, DyeError::InvalidInput { .. }));
        }
    }

    #[test]
    fn test_separator_cannot_collide() {
        // ("a_b", "c") and ("a", "b_c") would both be "a_b_c" without escaping.
        let locator = SpriteLocator::new(SpriteLayout::default(), TagPolicy::Encode);
        let left = locator.resolve("a_b", "c").unwrap();
        let right = locator.resolve("a", "b_c").unwrap();

        assert_ne!(left, right);
        assert_eq!(left.as_str(), "/sprites/a%5Fb_c.png");
        assert_eq!(right.as_str(), "/sprites/a_b%5Fc.png");
    }

    #[test]
    fn test_look_alike_class_does_not_collide() {
        assert_eq!(
            resolve_sprite_path("Knight", "idle").unwrap(),
            "/sprites/knight_idle.png"
        );
        assert!(matches!(
            resolve_sprite_path("\u{212A}NIGHT", "idle"),
            Err(DyeError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_custom_layout() {
        let layout = SpriteLayout {
            root: "/assets/chars".to_string(),
            extension: "webp".to_string(),
        };
        let locator = SpriteLocator::new(layout, TagPolicy::Reject);

        assert_eq!(
            locator.resolve("Mage", "walk").unwrap().as_str(),
            "/assets/chars/mage_walk.webp"
        );
    }

    #[test]
    fn test_bare_root() {
        let layout = SpriteLayout {
            root: "/".to_string(),
            ..Default::default()
        };
        let locator = SpriteLocator::new(layout, TagPolicy::Reject);

        assert_eq!(locator.resolve("Mage", "idle").unwrap().as_str(), "/mage_idle.png");
    }

    #[test]
    fn test_concurrent_resolution() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| resolve_sprite_path("Warrior", "idle").unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().as_str(), "/sprites/warrior_idle.png");
        }
    }
}
