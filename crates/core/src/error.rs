use crate::domain::Format;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while rendering or saving printable data
#[derive(Debug, Error)]
pub enum Error {
    /// A rendering was requested that does not match the entity's declared format
    #[error("Invalid format!")]
    InvalidFormat { requested: Format, declared: Format },

    /// The output stream failed its health check before writing
    #[error("output stream {target} is not writable")]
    UnhealthyStream { target: String },

    /// The output resource could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
