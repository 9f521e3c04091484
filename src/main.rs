use clap::Parser;
use dye::cli::{load_config, Cli, Commands};
use dye::output::Printer;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();
    let config = || load_config(cli.config.as_deref(), &printer);

    match cli.command {
        Commands::Sprite(args) => dye::cli::sprite::run(args, &config()?)?,
        Commands::Id(args) => dye::cli::id::run(args, &config()?)?,
        Commands::Filter(args) => dye::cli::filter::run(args, &config()?, &printer)?,
        Commands::Resolve(args) => dye::cli::resolve::run(args, &config()?, &printer)?,
        Commands::Completions(args) => dye::cli::completions::run(args)?,
    }

    Ok(())
}
