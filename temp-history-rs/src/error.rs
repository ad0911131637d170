use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents errors that can occur while persisting the history.
pub enum LogError {
    /// The log file could not be opened or truncated for writing.
    #[error("cannot open {} for writing: {source}", .path.display())]
    DestinationUnavailable {
        /// Log file path.
        path: PathBuf,
        /// Underlying open error.
        source: io::Error,
    },
    /// Writing or flushing the log file failed.
    #[error("write to {} failed: {source}", .path.display())]
    WriteFailed {
        /// Log file path.
        path: PathBuf,
        /// Underlying write error.
        source: io::Error,
    },
}
