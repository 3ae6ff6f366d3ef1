//! Rotating file writer for the trace file.
//!
//! Lines are appended to a single file. Once it grows past the size limit it
//! is renamed with a UTC timestamp suffix and a fresh file is started; only
//! the newest backups are retained.

use chrono::Utc;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Size past which the file is rotated (10 MB).
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Backups retained after rotation.
const MAX_BACKUP_FILES: usize = 3;

/// Backup suffix format. Sorts lexicographically in time order.
const BACKUP_SUFFIX_FORMAT: &str = "%Y%m%dT%H%M%S%.3f";

/// Line-oriented appender with size-based rotation.
///
/// The file handle is opened lazily on the first write and guarded by a
/// `Mutex` so the span exporter can share it.
pub struct FileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl FileWriter {
    /// Creates a writer with the default limits.
    pub const fn new(file_path: PathBuf) -> Self {
        Self::with_limits(file_path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer rotating past `max_bytes` and keeping `max_backups`.
    pub const fn with_limits(file_path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            file_path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Appends `line` plus a newline, rotating first if the file is full.
    ///
    /// # Errors
    ///
    /// Returns any I/O error from rotating, opening or writing the file, or
    /// an error if the lock was poisoned.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::other(format!("trace writer lock poisoned: {e}")))?;

        if self.is_full() {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let file = handle
            .as_mut()
            .ok_or_else(|| io::Error::other("trace file not open"))?;

        writeln!(file, "{line}")?;
        file.flush()
    }

    fn is_full(&self) -> bool {
        fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes)
    }

    /// Moves the current file aside and prunes old backups.
    fn rotate(&self) -> io::Result<()> {
        let suffix = Utc::now().format(BACKUP_SUFFIX_FORMAT);
        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{suffix}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }

        self.prune_backups()
    }

    /// Deletes all but the newest `max_backups` backups.
    ///
    /// Individual removal failures are ignored so one stuck file does not
    /// block rotation.
    fn prune_backups(&self) -> io::Result<()> {
        let mut backups = self.backups()?;
        backups.sort_unstable_by(|a, b| b.cmp(a));

        for stale in backups.iter().skip(self.max_backups) {
            let _ = fs::remove_file(stale);
        }
        Ok(())
    }

    /// Lists backup files, i.e. `<file name>.<suffix>` siblings.
    fn backups(&self) -> io::Result<Vec<PathBuf>> {
        let parent = self
            .file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let prefix = self
            .file_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| format!("{n}."))
            .ok_or_else(|| io::Error::other("trace file has no name"))?;

        Ok(fs::read_dir(parent)?
            .filter_map(std::result::Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(&prefix))
            })
            .collect())
    }
}

impl std::fmt::Debug for FileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::new(path.clone());

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "{\"a\":1}\n{\"b\":2}\n");
    }

    #[test]
    fn rotates_when_file_exceeds_limit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        let writer = FileWriter::with_limits(path.clone(), 8, 3);

        writer.write_line("0123456789").unwrap();
        writer.write_line("next").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "next\n");
        assert_eq!(writer.backups().unwrap().len(), 1);
    }

    #[test]
    fn keeps_only_newest_backups() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("trace.json");
        for suffix in ["20240101T000000.000", "20240102T000000.000", "20240103T000000.000"] {
            fs::write(dir.path().join(format!("trace.json.{suffix}")), "old").unwrap();
        }
        fs::write(dir.path().join("unrelated.json"), "keep").unwrap();

        let writer = FileWriter::with_limits(path.clone(), 1, 2);
        fs::write(&path, "full").unwrap();
        writer.write_line("fresh").unwrap();

        let mut names: Vec<String> = writer
            .backups()
            .unwrap()
            .iter()
            .filter_map(|p| p.file_name()?.to_str().map(String::from))
            .collect();
        names.sort();

        assert_eq!(names.len(), 2);
        assert!(!names.contains(&"trace.json.20240101T000000.000".to_string()));
        assert!(!names.contains(&"trace.json.20240102T000000.000".to_string()));
        assert!(dir.path().join("unrelated.json").exists());
    }
}
