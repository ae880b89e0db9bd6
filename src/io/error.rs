use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Mol2Error {
    #[error("could not read MOL2 file {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not write MOL2 file {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("MOL2 line {line}: {message}")]
    Parse { line: usize, message: String },
}

impl Mol2Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Mol2Error::Parse {
            line,
            message: message.into(),
        }
    }
}
