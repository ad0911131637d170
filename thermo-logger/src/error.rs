use std::process::ExitCode;

use hwmon_temp::SensorError;
use temp_history::LogError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to install signal handler: {0}")]
    Signal(#[from] ctrlc::Error),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error("get_cpu_temperature failed ({code}): {0}", code = .0.code())]
    Sensor(#[from] SensorError),
}

impl Error {
    /// Process exit code reported for this error.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Error::Signal(_) => ExitCode::from(1),
            Error::Log(LogError::DestinationUnavailable { .. }) => ExitCode::from(2),
            Error::Sensor(_) => ExitCode::from(3),
            Error::Log(LogError::WriteFailed { .. }) => ExitCode::from(4),
        }
    }
}
