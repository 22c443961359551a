use super::Format;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("failed to parse {format} data: {details} (at line ~{line})")]
    Parse {
        format: Format,
        line: usize,
        details: String,
    },

    #[error("unknown atom type '{code}' (at line ~{line})")]
    UnknownAtomType { line: usize, code: String },

    #[error("failed to write delimited table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to build structure: {0}")]
    Structure(#[from] crate::fingerprint::Error),
}

impl Error {
    pub fn parse(format: Format, line: usize, details: impl Into<String>) -> Self {
        Self::Parse {
            format,
            line,
            details: details.into(),
        }
    }

    pub fn unknown_atom_type(line: usize, code: impl Into<String>) -> Self {
        Self::UnknownAtomType {
            line,
            code: code.into(),
        }
    }
}
