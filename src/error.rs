use miette::Diagnostic;
use thiserror::Error;

/// Main error type for dye operations
#[derive(Error, Diagnostic, Debug)]
pub enum DyeError {
    #[error("IO error: {0}")]
    #[diagnostic(code(dye::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(dye::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid input: {message}")]
    #[diagnostic(code(dye::input))]
    InvalidInput {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Invalid colour: {message}")]
    #[diagnostic(code(dye::colour))]
    InvalidColor {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Palette is missing the '{slot}' slot")]
    #[diagnostic(
        code(dye::missing_slot),
        help("Define every slot, or set `missing_slots: transparent` in dye.yaml")
    )]
    MissingSlot { slot: String },

    #[error("Unknown palette slot: '{name}'")]
    #[diagnostic(code(dye::unknown_slot))]
    UnknownSlot {
        name: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(dye::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, DyeError>;
