use std::{collections::VecDeque, path::Path};

use crate::{HistoryRecord, LogError, LogFile};

/// Number of records kept by the CPU temperature logger.
pub const CPU_HISTORY_CAPACITY: usize = 20;

/// History used by the CPU temperature logger.
pub type CpuHistory = History<CPU_HISTORY_CAPACITY>;

#[derive(Debug, Clone)]
/// A rolling window over the `N` most recently inserted records, newest first.
///
/// Inserting into a full history discards the oldest record. Eviction is purely
/// count-based; records never expire.
pub struct History<const N: usize> {
    records: VecDeque<HistoryRecord>,
}

impl<const N: usize> Default for History<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> History<N> {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::with_capacity(N),
        }
    }

    #[inline]
    /// Maximum number of records kept.
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing has been inserted yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Adds `record` as the newest entry, evicting the oldest one if the history is full.
    pub fn insert(&mut self, record: HistoryRecord) {
        if N == 0 {
            return;
        }
        if self.records.len() == N {
            self.records.pop_back();
        }
        self.records.push_front(record);
    }

    /// The most recently inserted record.
    pub fn newest(&self) -> Option<&HistoryRecord> {
        self.records.front()
    }

    /// The oldest record still kept.
    pub fn oldest(&self) -> Option<&HistoryRecord> {
        self.records.back()
    }

    /// Iterates over the records, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryRecord> {
        self.records.iter()
    }

    /// The stored lines, newest first, exactly as they are persisted.
    pub fn render(&self) -> Vec<&str> {
        self.iter().map(HistoryRecord::as_str).collect()
    }

    /// Truncates `destination` and writes the whole history to it, one line per record.
    pub fn persist(&self, destination: impl AsRef<Path>) -> Result<(), LogError> {
        let mut log = LogFile::create(destination)?;
        log.write_history(self)?;
        log.finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use hwmon_temp::SensorReading;

    use super::*;

    fn record(i: u32) -> HistoryRecord {
        let ts = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
            + chrono::Duration::seconds(4 * i64::from(i));
        HistoryRecord::new(ts, &SensorReading::new([f64::from(i), 40.0, 41.0]))
    }

    #[test]
    fn starts_empty() {
        let history = CpuHistory::new();
        assert!(history.is_empty());
        assert_eq!(history.capacity(), 20);
        assert!(history.render().is_empty());
        assert!(history.newest().is_none());
    }

    #[test]
    fn length_is_bounded_by_capacity() {
        let mut history = CpuHistory::new();
        for n in 1..=45 {
            history.insert(record(n));
            assert_eq!(history.len(), (n as usize).min(CPU_HISTORY_CAPACITY));
        }
    }

    #[test]
    fn partial_window_is_newest_first() {
        let mut history = CpuHistory::new();
        let records = (1..=7).map(record).collect::<Vec<_>>();
        for r in &records {
            history.insert(r.clone());
        }
        let expected = records.iter().rev().map(HistoryRecord::as_str).collect::<Vec<_>>();
        assert_eq!(history.render(), expected);
        assert_eq!(history.oldest(), Some(&records[0]));
    }

    #[test]
    fn full_window_keeps_most_recent() {
        let mut history = History::<5>::new();
        let records = (1..=12).map(record).collect::<Vec<_>>();
        for r in &records {
            history.insert(r.clone());
        }
        let expected = records[7..]
            .iter()
            .rev()
            .map(HistoryRecord::as_str)
            .collect::<Vec<_>>();
        assert_eq!(history.render(), expected);
        assert_eq!(history.newest(), Some(&records[11]));
        assert_eq!(history.oldest(), Some(&records[7]));
    }

    #[test]
    fn render_is_idempotent() {
        let mut history = CpuHistory::new();
        for n in 1..=25 {
            history.insert(record(n));
        }
        assert_eq!(history.render(), history.render());
    }

    #[test]
    fn zero_capacity_stores_nothing() {
        let mut history = History::<0>::new();
        history.insert(record(1));
        assert!(history.is_empty());
    }

    #[test]
    fn persist_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log_cpu_temperature.txt");
        std::fs::write(&path, "stale line\nanother\nand more\n").unwrap();
        let mut history = History::<3>::new();
        for n in 1..=4 {
            history.insert(record(n));
        }
        history.persist(&path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        let expected = format!("{}\n{}\n{}\n", record(4), record(3), record(2));
        assert_eq!(contents, expected);
    }

    #[test]
    fn persist_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("log.txt");
        let err = CpuHistory::new().persist(&path).unwrap_err();
        assert!(matches!(err, LogError::DestinationUnavailable { .. }));
    }
}
