pub mod completions;
pub mod filter;
pub mod id;
pub mod resolve;
pub mod sprite;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::error::Result;
use crate::output::{display_path, Printer};

/// dye - Sprite path and palette filter resolver
#[derive(Parser, Debug)]
#[command(name = "dye")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: ./dye.yaml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sprite sheet path for a class and animation state
    Sprite(sprite::SpriteArgs),

    /// Print filter ids for an entity
    Id(id::IdArgs),

    /// Synthesize a recolour filter from a palette
    Filter(filter::FilterArgs),

    /// Resolve character files to sprite paths and filters (JSON)
    Resolve(resolve::ResolveArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Load the explicit config file, or discover one in the working directory.
pub fn load_config(path: Option<&Path>, printer: &Printer) -> Result<Config> {
    match path {
        Some(path) => {
            let config = Config::load(path)?;
            printer.info("Config", &display_path(path));
            Ok(config)
        }
        None => Config::discover(Path::new(".")),
    }
}
