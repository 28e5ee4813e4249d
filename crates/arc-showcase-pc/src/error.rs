use std::path::PathBuf;

use arc_showcase_core::SessionError;

/// Errors that can stop the desktop host.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// I/O error reading a script.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A script line could not be parsed.
    #[error("script line {line}: {message}")]
    Script { line: usize, message: String },

    /// The session could not be built from the given options.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// The frame sink rejected a frame.
    #[error("render error: {0}")]
    Render(String),
}
