//! Filter command implementation.
//!
//! Reads a palette file and/or `--set` overrides and prints the recolour
//! filter as CSS or SVG.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::config::Config;
use crate::error::{DyeError, Result};
use crate::output::{display_path, plural, Printer};
use crate::types::{Palette, RawPalette};

/// Output format for the filter command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FilterFormat {
    /// CSS `filter` value (drop-shadow stack)
    Css,
    /// SVG `<defs>` block with one filter per slot
    Svg,
}

/// Synthesize a recolour filter from a palette
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Palette file (YAML or JSON mapping slot names to colours)
    pub palette: Option<PathBuf>,

    /// Set a slot colour, overriding the palette file
    #[arg(long = "set", value_name = "SLOT=COLOUR", value_parser = parse_assignment)]
    pub set: Vec<(String, String)>,

    /// Output format
    #[arg(long, value_enum, default_value_t = FilterFormat::Css)]
    pub format: FilterFormat,

    /// Entity id used for SVG filter ids
    #[arg(long, required_if_eq("format", "svg"))]
    pub entity: Option<String>,
}

pub fn run(args: FilterArgs, config: &Config, printer: &Printer) -> Result<()> {
    let source = args
        .palette
        .as_deref()
        .map(display_path)
        .unwrap_or_else(|| "--set".to_string());

    let (output, slots) = render(&args, config)?;
    printer.status(
        "Synthesized",
        &format!("{} from {}", plural(slots, "slot", "slots"), source),
    );
    println!("{}", output);

    Ok(())
}

/// Build the filter text and report how many slots had a colour.
pub fn render(args: &FilterArgs, config: &Config) -> Result<(String, usize)> {
    if args.palette.is_none() && args.set.is_empty() {
        return Err(DyeError::InvalidInput {
            message: "no palette given".to_string(),
            help: Some("Pass a palette file or --set slot=#rrggbb".to_string()),
        });
    }

    // An empty file is still a palette; the missing-slot policy decides.
    let mut raw = match &args.palette {
        Some(path) => load_raw_palette(path)?,
        None => RawPalette::new(),
    };

    for (slot, colour) in &args.set {
        raw.insert(slot.clone(), colour.clone());
    }

    let palette = Palette::from_entries(&raw, config.unknown_slots)?;
    let filter = config.synthesizer().synthesize(&palette)?;

    let output = match args.format {
        FilterFormat::Css => filter.to_css(),
        FilterFormat::Svg => {
            let entity = args.entity.as_deref().ok_or_else(|| DyeError::InvalidInput {
                message: "SVG output needs an entity id".to_string(),
                help: Some("Pass --entity <id>".to_string()),
            })?;
            filter.to_svg(&config.identifier(), entity)?
        }
    };

    Ok((output, palette.len()))
}

/// Read a slot-to-colour mapping from a YAML or JSON file.
fn load_raw_palette(path: &Path) -> Result<RawPalette> {
    let content = std::fs::read_to_string(path).map_err(|e| DyeError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read palette: {}", e),
    })?;

    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));

    let parsed: std::result::Result<RawPalette, String> = if is_json {
        serde_json::from_str(&content).map_err(|e| e.to_string())
    } else {
        serde_yaml::from_str(&content).map_err(|e| e.to_string())
    };

    parsed.map_err(|message| DyeError::Parse {
        message: format!("Invalid palette {}: {}", display_path(path), message),
        help: Some("Expected a mapping like `skin: \"#ffdbac\"`".to_string()),
    })
}

fn parse_assignment(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(slot, colour)| (slot.trim().to_string(), colour.trim().to_string()))
        .ok_or_else(|| format!("expected SLOT=COLOUR, got '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MissingSlotPolicy;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::tempdir;

    fn args(palette: Option<PathBuf>, set: &[(&str, &str)]) -> FilterArgs {
        FilterArgs {
            palette,
            set: set
                .iter()
                .map(|(s, c)| (s.to_string(), c.to_string()))
                .collect(),
            format: FilterFormat::Css,
            entity: None,
        }
    }

    #[test]
    fn test_render_from_yaml_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hero.palette.yaml");
        fs::write(
            &path,
            "accent: '#ffff00'\nclothing: '#0000ff'\nhair: '#593208'\nskin: '#ffdbac'\n",
        )
        .unwrap();

        let (css, slots) = render(&args(Some(path), &[]), &Config::default()).unwrap();

        assert_eq!(slots, 4);
        assert_eq!(
            css,
            "drop-shadow(0 0 0 #ffdbac) drop-shadow(0 0 0 #593208) \
             drop-shadow(0 0 0 #0000ff) drop-shadow(0 0 0 #ffff00)"
        );
    }

    #[test]
    fn test_set_overrides_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("hero.json");
        fs::write(
            &path,
            r##"{"skin":"#ffdbac","hair":"#593208","clothing":"#0000ff","accent":"#ffff00"}"##,
        )
        .unwrap();

        let (css, _) = render(&args(Some(path), &[("accent", "#ff0000")]), &Config::default()).unwrap();

        assert!(css.ends_with("drop-shadow(0 0 0 #ff0000)"));
        assert!(!css.contains("#ffff00"));
    }

    #[test]
    fn test_set_only_with_transparent_policy() {
        let config = Config {
            missing_slots: MissingSlotPolicy::Transparent,
            ..Default::default()
        };

        let (css, slots) = render(&args(None, &[("hair", "#000")]), &config).unwrap();

        assert_eq!(slots, 1);
        assert!(css.contains("drop-shadow(0 0 0 #000000)"));
        assert_eq!(css.matches("transparent").count(), 3);
    }

    #[test]
    fn test_no_palette_is_an_error() {
        let err = render(&args(None, &[]), &Config::default()).unwrap_err();
        assert!(matches!(err, DyeError::InvalidInput { .. }));
    }

    #[test]
    fn test_empty_palette_file_follows_missing_slot_policy() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        fs::write(&path, "{}\n").unwrap();

        let err = render(&args(Some(path.clone()), &[]), &Config::default()).unwrap_err();
        assert!(matches!(err, DyeError::MissingSlot { ref slot } if slot == "skin"));

        let config = Config {
            missing_slots: MissingSlotPolicy::Transparent,
            ..Default::default()
        };
        let (css, slots) = render(&args(Some(path), &[]), &config).unwrap();

        assert_eq!(slots, 0);
        assert_eq!(css.matches("drop-shadow(0 0 0 transparent)").count(), 4);
    }

    #[test]
    fn test_svg_format() {
        let mut a = args(
            None,
            &[
                ("skin", "#fff"),
                ("hair", "#000"),
                ("clothing", "#00f"),
                ("accent", "#ff0"),
            ],
        );
        a.format = FilterFormat::Svg;
        a.entity = Some("hero-123".to_string());

        let (svg, _) = render(&a, &Config::default()).unwrap();

        assert!(svg.starts_with("<defs>"));
        assert!(svg.contains("id=\"filter-hero-123-accent\""));
        assert!(svg.contains("data-colour=\"#ffff00\""));
    }

    #[test]
    fn test_bad_palette_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "- skin\n- hair\n").unwrap();

        let err = render(&args(Some(path), &[]), &Config::default()).unwrap_err();
        assert!(matches!(err, DyeError::Parse { .. }));
    }

    #[test]
    fn test_parse_assignment() {
        assert_eq!(
            parse_assignment("skin=#ffdbac").unwrap(),
            ("skin".to_string(), "#ffdbac".to_string())
        );
        assert!(parse_assignment("skin").is_err());
    }
}
