//! Error types for dirtitle-core operations.
//!
//! Not-found conditions (absent override files, absent directories) are
//! control flow inside the resolvers and never appear here.

use std::io;

/// All errors that can occur while deriving a title.
#[derive(Debug, thiserror::Error)]
pub enum TitleError {
    #[error("bad directory path {0:?}")]
    MalformedPath(String),

    #[error("reading title override for {path}: {source}")]
    OverrideRead {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("inspecting {path}: {source}")]
    Inspect {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("could not resolve a home directory for the current user")]
    HomeDirUnavailable,

    #[error("could not resolve a username for uid {0}")]
    UsernameUnavailable(u32),
}

/// Convenience type alias for Results using TitleError.
pub type Result<T> = std::result::Result<T, TitleError>;
