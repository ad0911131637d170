use std::{
    fs::File,
    io::Read,
    ops::Index,
    path::{Path, PathBuf},
};

use crate::{ReadFailure, SensorError, Subfeature};

/// Number of temperature sources sampled per cycle.
pub const SENSOR_COUNT: usize = 3;

/// Temperature inputs of the first hwmon chip.
pub const HWMON0_SOURCES: [&str; SENSOR_COUNT] = [
    "/sys/class/hwmon/hwmon0/device/temp1_input",
    "/sys/class/hwmon/hwmon0/device/temp2_input",
    "/sys/class/hwmon/hwmon0/device/temp3_input",
];

#[derive(Debug, Clone, Copy, PartialEq)]
/// One complete set of temperatures, in degrees, ordered by source index.
pub struct SensorReading([f64; SENSOR_COUNT]);

impl SensorReading {
    /// Creates a reading from already scaled values.
    pub const fn new(values: [f64; SENSOR_COUNT]) -> Self {
        Self(values)
    }

    /// The scaled values, ordered by source index.
    pub fn values(&self) -> &[f64; SENSOR_COUNT] {
        &self.0
    }
}

impl Index<usize> for SensorReading {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.0[index]
    }
}

#[derive(Debug, Clone)]
/// Reads a fixed set of hwmon temperature inputs.
pub struct SensorReader {
    sources: [PathBuf; SENSOR_COUNT],
    subfeature: Subfeature,
}

impl Default for SensorReader {
    fn default() -> Self {
        Self::hwmon0()
    }
}

impl SensorReader {
    /// Reader for the temperature inputs of `hwmon0`.
    pub fn hwmon0() -> Self {
        Self::new(HWMON0_SOURCES.map(PathBuf::from))
    }

    /// Reader for an explicit set of temperature input files.
    pub fn new(sources: [PathBuf; SENSOR_COUNT]) -> Self {
        Self {
            sources,
            subfeature: Subfeature::TempInput,
        }
    }

    /// The source paths, ordered by index.
    pub fn sources(&self) -> &[PathBuf; SENSOR_COUNT] {
        &self.sources
    }

    /// Reads every source in index order.
    ///
    /// The first source that cannot be opened or parsed aborts the whole read; a partial
    /// reading is never returned.
    pub fn read_temperatures(&self) -> Result<SensorReading, SensorError> {
        let mut values = [0.0; SENSOR_COUNT];
        for (index, path) in self.sources.iter().enumerate() {
            let raw = read_raw(index, path).inspect_err(|e| {
                log::debug!("[CPU] {}> {e}", path.display());
            })?;
            values[index] = self.subfeature.scale(raw);
        }
        Ok(SensorReading(values))
    }
}

fn read_raw(index: usize, path: &Path) -> Result<f64, SensorError> {
    let mut file = File::open(path).map_err(|source| SensorError::SourceUnavailable {
        index,
        path: path.to_path_buf(),
        source,
    })?;
    let failed = |kind| SensorError::ReadFailed {
        index,
        path: path.to_path_buf(),
        kind,
    };
    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| failed(ReadFailure::from_io(&e)))?;
    parse_leading_f64(&contents).ok_or_else(|| failed(ReadFailure::Access))
}

/// Parses the longest numeric prefix after leading whitespace, like `scanf("%lf")`.
fn parse_leading_f64(contents: &str) -> Option<f64> {
    let text = contents.trim_start();
    let end = text
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .unwrap_or(text.len());
    // ASCII-only prefix, so every byte index is a char boundary
    (1..=end).rev().find_map(|len| text[..len].parse::<f64>().ok())
}
