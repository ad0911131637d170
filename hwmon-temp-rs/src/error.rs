use std::{io, path::PathBuf};

use thiserror::Error;

/// lm-sensors error number for "Can't read".
const SENSORS_ERR_ACCESS_R: i32 = 3;
/// lm-sensors error number for "Kernel interface error".
const SENSORS_ERR_KERNEL: i32 = 4;
/// lm-sensors error number for "I/O error".
const SENSORS_ERR_IO: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// The way a sensor source failed after it was opened.
pub enum ReadFailure {
    /// The kernel reported an I/O error (`EIO`) while the source was being read.
    Io,
    /// The source yielded no parseable value, or could not be read for another reason.
    Access,
}

#[derive(Debug, Error)]
/// Represents errors that can occur while reading the temperature sources.
pub enum SensorError {
    /// The source could not be opened. Usually the driver is not loaded or the chip moved.
    #[error("sensor {index} ({}) unavailable: {source}", .path.display())]
    SourceUnavailable {
        /// Index of the source in the reader.
        index: usize,
        /// Path of the source.
        path: PathBuf,
        /// Underlying open error.
        source: io::Error,
    },
    /// The source was opened but did not produce a value.
    #[error("sensor {index} ({}) read failed: {kind:?}", .path.display())]
    ReadFailed {
        /// Index of the source in the reader.
        index: usize,
        /// Path of the source.
        path: PathBuf,
        /// Failure class.
        kind: ReadFailure,
    },
}

impl SensorError {
    /// Negative lm-sensors style error code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            SensorError::SourceUnavailable { .. } => -SENSORS_ERR_KERNEL,
            SensorError::ReadFailed {
                kind: ReadFailure::Io,
                ..
            } => -SENSORS_ERR_IO,
            SensorError::ReadFailed {
                kind: ReadFailure::Access,
                ..
            } => -SENSORS_ERR_ACCESS_R,
        }
    }

    /// Index of the source that failed.
    pub fn index(&self) -> usize {
        match self {
            SensorError::SourceUnavailable { index, .. } | SensorError::ReadFailed { index, .. } => {
                *index
            }
        }
    }
}

impl ReadFailure {
    /// Classifies an I/O error raised while reading an already opened source.
    pub fn from_io(err: &io::Error) -> Self {
        if err.raw_os_error() == Some(libc::EIO) {
            ReadFailure::Io
        } else {
            ReadFailure::Access
        }
    }
}
