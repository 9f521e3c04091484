use clap::Args;

use crate::config::Config;
use crate::error::Result;
use crate::types::{slot_list, Slot};

/// Print filter ids for an entity
#[derive(Args, Debug)]
pub struct IdArgs {
    /// Entity id (e.g. hero-123)
    pub entity: String,

    /// Palette slot (default: every slot)
    #[arg(value_parser = parse_slot)]
    pub slot: Option<Slot>,
}

pub fn run(args: IdArgs, config: &Config) -> Result<()> {
    let identifier = config.identifier();
    let slots = match args.slot {
        Some(slot) => vec![slot],
        None => Slot::ALL.to_vec(),
    };

    for slot in slots {
        println!("{}", identifier.compute(&args.entity, slot)?);
    }

    Ok(())
}

fn parse_slot(s: &str) -> std::result::Result<Slot, String> {
    Slot::from_name(s).ok_or_else(|| format!("expected one of: {}", slot_list()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_slot() {
        assert_eq!(parse_slot("accent"), Ok(Slot::Accent));

        let err = parse_slot("eyes").unwrap_err();
        assert!(err.contains("skin, hair, clothing, accent"));
    }
}
