use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::{History, LogError};

/// A log file opened (and truncated) for one cycle.
pub struct LogFile {
    path: PathBuf,
    writer: BufWriter<File>,
}

impl LogFile {
    /// Creates or truncates the log file at `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, LogError> {
        let path = path.as_ref().to_path_buf();
        match File::create(&path) {
            Ok(file) => Ok(Self {
                writer: BufWriter::new(file),
                path,
            }),
            Err(source) => Err(LogError::DestinationUnavailable { path, source }),
        }
    }

    /// Path of the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every record of `history`, newest first, one per line.
    pub fn write_history<const N: usize>(&mut self, history: &History<N>) -> Result<(), LogError> {
        for line in history.render() {
            self.write_line(format_args!("{line}"))?;
        }
        Ok(())
    }

    /// Writes the diagnostic line for a failed sensor read.
    pub fn write_error(&mut self, code: i32) -> Result<(), LogError> {
        self.write_line(format_args!("error get_cpu_temperature:{code}"))
    }

    /// Flushes and closes the file.
    pub fn finish(mut self) -> Result<(), LogError> {
        self.writer.flush().map_err(|source| LogError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }

    fn write_line(&mut self, line: std::fmt::Arguments<'_>) -> Result<(), LogError> {
        writeln!(self.writer, "{line}").map_err(|source| LogError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        let mut log = LogFile::create(&path).unwrap();
        assert_eq!(log.path(), path.as_path());
        log.write_error(-4).unwrap();
        log.finish().unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "error get_cpu_temperature:-4\n"
        );
    }

    #[test]
    fn create_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("log.txt");
        std::fs::write(&path, "old contents\n").unwrap();
        LogFile::create(&path).unwrap().finish().unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().is_empty());
    }
}
