//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: poster error (invalid parameters, palette, dimensions, drawing)
//! - 11: I/O error (reading a seed file, writing output)
//! - 12: input error (bad JSON params, unsupported output extension)
//! - 13: serialization error

use blob_poster_core::PosterError;
use thiserror::Error;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug, Error)]
pub enum CliError {
    /// Generation or rendering rejected the request (out-of-range
    /// parameter, unknown palette, unusable dpi).
    #[error(transparent)]
    Poster(PosterError),
    /// A seed file could not be read or an output could not be written.
    #[error("{0}")]
    Io(String),
    /// The command line carried malformed input (`--params` JSON, seed
    /// file contents, output extension).
    #[error("{0}")]
    Input(String),
    /// JSON output could not be produced.
    #[error("{0}")]
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Poster(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

/// Output failures surface as I/O so scripts can tell them apart from
/// rejected parameters.
impl From<PosterError> for CliError {
    fn from(e: PosterError) -> Self {
        match e {
            PosterError::Io(msg) => CliError::Io(msg),
            other => CliError::Poster(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
