use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("Failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error("line {line}: not valid UTF-8")]
    Encoding { line: usize },

    #[error("line {line}: malformed JSON: {source}")]
    Parse {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: expected a JSON object")]
    NotAnObject { line: usize },

    #[error("line {line}: missing required field `{field}`")]
    MissingField { line: usize, field: &'static str },

    #[error("line {line}: invalid post record: {source}")]
    InvalidField {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Line number of errors tied to a single input line; `None` for I/O or setup failures.
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Encoding { line }
            | Self::Parse { line, .. }
            | Self::NotAnObject { line }
            | Self::MissingField { line, .. }
            | Self::InvalidField { line, .. } => Some(*line),
            _ => None,
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
