//! Resolve command implementation.
//!
//! Reads character files and prints their resolved sprite paths, filter ids
//! and CSS filters as a JSON array.

use std::path::PathBuf;

use clap::Args;

use crate::character::{Character, ResolvedCharacter};
use crate::config::Config;
use crate::error::{DyeError, Result};
use crate::output::{display_path, plural, Printer};

/// Resolve character files to sprite paths and filters (JSON)
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Character files (YAML or JSON)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Emit compact JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run(args: ResolveArgs, config: &Config, printer: &Printer) -> Result<()> {
    let resolved = resolve_all(&args.files, config, printer)?;

    let json = if args.compact {
        serde_json::to_string(&resolved)
    } else {
        serde_json::to_string_pretty(&resolved)
    }
    .map_err(|e| DyeError::Parse {
        message: format!("Failed to serialize output: {}", e),
        help: None,
    })?;

    printer.success("Finished", &plural(resolved.len(), "character", "characters"));
    println!("{}", json);

    Ok(())
}

/// Resolve every file, stopping at the first failure.
pub fn resolve_all(
    files: &[PathBuf],
    config: &Config,
    printer: &Printer,
) -> Result<Vec<ResolvedCharacter>> {
    files
        .iter()
        .map(|file| {
            let resolved = Character::load(file)?.resolve(config)?;
            printer.status(
                "Resolved",
                &format!("{} -> {}", display_path(file), resolved.sprite),
            );
            Ok(resolved)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_all() {
        let dir = tempdir().unwrap();
        let hero = dir.path().join("hero.yaml");
        let mage = dir.path().join("mage.json");

        fs::write(
            &hero,
            "entity: hero-1\nclass: Warrior\nstate: idle\npalette:\n  skin: '#fff'\n  hair: '#000'\n  clothing: '#00f'\n  accent: '#ff0'\n",
        )
        .unwrap();
        fs::write(
            &mage,
            r##"{"entity":"mage-2","class":"Mage","state":"Walk","palette":{"skin":"#fff","hair":"#000","clothing":"#f00","accent":"#0f0"}}"##,
        )
        .unwrap();

        let resolved =
            resolve_all(&[hero, mage], &Config::default(), &Printer::new()).unwrap();

        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[0].sprite.as_str(), "/sprites/warrior_idle.png");
        assert_eq!(resolved[1].sprite.as_str(), "/sprites/mage_walk.png");
        assert_eq!(resolved[1].filters[2].id.as_str(), "filter-mage-2-clothing");
    }

    #[test]
    fn test_resolve_all_stops_on_error() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "entity: x\nclass: Mage\nstate: idle\npalette:\n  skin: nope\n").unwrap();

        let err = resolve_all(&[broken], &Config::default(), &Printer::new()).unwrap_err();
        assert!(matches!(err, DyeError::InvalidColor { .. }));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = resolve_all(
            &[dir.path().join("ghost.yaml")],
            &Config::default(),
            &Printer::new(),
        )
        .unwrap_err();
        assert!(matches!(err, DyeError::Io { .. }));
    }
}
