use std::{
    path::{Path, PathBuf},
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use hwmon_temp::{SENSOR_COUNT, SensorReader};
use temp_history::{CpuHistory, HistoryRecord, LogFile};

use crate::{Error, config};

/// Drives the sample/record/persist cycle.
pub struct Logger {
    reader: SensorReader,
    history: CpuHistory,
    destination: PathBuf,
}

impl Logger {
    /// Logger reading the `hwmon0` temperature inputs into `destination`.
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self::with_reader(SensorReader::hwmon0(), destination)
    }

    pub fn with_reader(reader: SensorReader, destination: impl Into<PathBuf>) -> Self {
        Self {
            reader,
            history: CpuHistory::new(),
            destination: destination.into(),
        }
    }

    pub fn sources(&self) -> &[PathBuf; SENSOR_COUNT] {
        self.reader.sources()
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn history(&self) -> &CpuHistory {
        &self.history
    }

    /// Sleeps, then runs a cycle, until `running` is cleared or a cycle fails.
    ///
    /// The flag is only checked once the sleep is over.
    pub fn run(&mut self, running: &AtomicBool) -> Result<(), Error> {
        loop {
            thread::sleep(config::INTERVAL);
            if !running.load(Ordering::Relaxed) {
                return Ok(());
            }
            self.run_cycle()?;
        }
    }

    /// Opens the log file, samples the sensors and rewrites the log with the updated history.
    ///
    /// The log file is opened before any sensor is read. A sensor failure replaces the
    /// history in the file with a single diagnostic line and leaves the history untouched.
    pub fn run_cycle(&mut self) -> Result<(), Error> {
        let mut log = LogFile::create(&self.destination)?;
        let reading = match self.reader.read_temperatures() {
            Ok(reading) => reading,
            Err(e) => {
                log.write_error(e.code())?;
                log.finish()?;
                return Err(e.into());
            }
        };
        let record = HistoryRecord::now(&reading);
        log::debug!("[CPU] {record}");
        self.history.insert(record);
        log.write_history(&self.history)?;
        log.finish()?;
        Ok(())
    }
}
