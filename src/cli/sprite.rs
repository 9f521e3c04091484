use clap::Args;

use crate::config::Config;
use crate::error::Result;

/// Print the sprite sheet path for a class and animation state
#[derive(Args, Debug)]
pub struct SpriteArgs {
    /// Character class (e.g. Warrior)
    pub class: String,

    /// Animation state (e.g. idle)
    pub state: String,
}

pub fn run(args: SpriteArgs, config: &Config) -> Result<()> {
    let path = config.locator().resolve(&args.class, &args.state)?;
    println!("{}", path);
    Ok(())
}
