use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised anywhere in the fetch pipeline. All of them are fatal:
/// nothing is retried, and a failed batch never yields partial results.
#[derive(Debug, Error)]
pub enum Error {
    /// A command-line token that is neither a recognized flag nor a
    /// consumed flag value.
    #[error("error while parsing argument `{0}`: invalid argument")]
    InvalidArgument(String),

    /// The same logical option was supplied via both its short and its
    /// long form.
    #[error("duplicate argument found: {0}")]
    DuplicateArgument(&'static str),

    /// A flag requiring a value was given without one.
    #[error("argument {0} must be followed by a value")]
    MissingValue(&'static str),

    /// The API answered a batch query with a non-success status.
    #[error("API request failed with HTTP {0}")]
    RequestFailed(StatusCode),

    /// The names file could not be opened.
    #[error("specified file not found: {path}")]
    SourceNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("network error")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
