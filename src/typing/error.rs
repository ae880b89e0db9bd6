use std::path::PathBuf;
use thiserror::Error;

use crate::io::error::Mol2Error;
use crate::typing::style::SUPPORTED_STYLES;

/// Everything that can go wrong in one atom-typing round trip.
///
/// The taxonomy separates configuration problems (the tool is missing),
/// caller-input problems (bad style, bad or disconnected structure) and
/// tool-execution problems (antechamber ran and failed).
#[derive(Debug, Error)]
pub enum TypingError {
    #[error("antechamber not found on the executable search path")]
    ToolNotFound,

    #[error(
        "unsupported atomtyping style '{requested}'; please select from {:?}",
        SUPPORTED_STYLES
    )]
    UnsupportedStyle { requested: String },

    #[error(
        "unsupported input '{received}'; accepted inputs are a MOL2-backed \
         structure or a fragment with a registered converter"
    )]
    UnsupportedInput { received: &'static str },

    #[error(
        "antechamber requires connectivity information and only supports single \
         molecules (all atoms connected by bonds); found {components} components"
    )]
    Disconnected { components: usize },

    #[error("antechamber failed; see {log:?} for its output")]
    ExternalTool { log: PathBuf },

    #[error("failed to launch antechamber")]
    Launch(#[source] std::io::Error),

    #[error(transparent)]
    Mol2(#[from] Mol2Error),

    #[error("working directory error")]
    Workdir(#[source] std::io::Error),
}
