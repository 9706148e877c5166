//! Error types.
//!
//! Parse failures are ordinary outcomes here, so they get their own small enum
//! that callers can match on. Everything the command-line front end can hit
//! (I/O, clipboard, configuration) is folded into [`Error`].

use thiserror::Error;

use crate::constants::format_help;

/// Crate result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Why a pasted block of text could not be turned into a passage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFailure {
    /// The input does not start with a `[...]` reference header.
    #[error("input does not start with a bracketed reference header")]
    MissingHeader,

    /// The header matched none of the supported reference shapes.
    #[error("unrecognized reference header: [{0}]")]
    UnrecognizedHeader(String),

    /// Nothing follows the header.
    #[error("no passage text follows the reference header")]
    EmptyBody,

    /// The body produced no non-empty verse.
    #[error("no verses could be extracted from the passage text")]
    NoVerses,
}

impl ParseFailure {
    /// User-facing message shown when a paste is rejected.
    pub const fn hint(&self) -> &'static str {
        format_help::PARSE_FAILURE
    }
}

/// Crate error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<std::path::PathBuf>,
    },

    /// The system clipboard could not be read.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// Pasted text was rejected by the parser.
    #[error("Passage parse failed: {0}")]
    Passage(#[from] ParseFailure),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<std::path::PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io { source: e, path: None }
    }
}

impl From<arboard::Error> for Error {
    fn from(e: arboard::Error) -> Self {
        Self::Clipboard(e.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}
