use std::fmt;

use chrono::{DateTime, Utc};
use hwmon_temp::SensorReading;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One formatted history line: `YYYY-MM-DD HH:MM:SS, temp1: F.FFFF, temp2: F.FFFF, temp3: F.FFFF`.
pub struct HistoryRecord(String);

impl HistoryRecord {
    /// Formats a reading taken at `timestamp`.
    pub fn new(timestamp: DateTime<Utc>, reading: &SensorReading) -> Self {
        let [t1, t2, t3] = reading.values();
        Self(format!(
            "{}, temp1: {t1:.4}, temp2: {t2:.4}, temp3: {t3:.4}",
            timestamp.format("%Y-%m-%d %H:%M:%S")
        ))
    }

    /// Formats a reading taken now.
    pub fn now(reading: &SensorReading) -> Self {
        Self::new(Utc::now(), reading)
    }

    /// The formatted line, without a trailing newline.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
