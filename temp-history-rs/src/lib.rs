#![deny(missing_docs)]
//!# temp-history - Rolling window of temperature records
//! A fixed-capacity, newest-first history of formatted temperature records, and the
//! log file writer that rewrites the whole history on every cycle.
mod error;
mod history;
mod log_file;
mod record;

pub use error::LogError;
pub use history::{CPU_HISTORY_CAPACITY, CpuHistory, History};
pub use log_file::LogFile;
pub use record::HistoryRecord;
