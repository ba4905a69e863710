use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

/// The on-disk target of a logger.
///
/// Holds only the resolved path: every append opens the file for the
/// duration of the call and closes it again, so external readers and
/// tailing tools never contend with a held handle.
#[derive(Debug)]
pub(crate) struct LogFile {
    path: PathBuf,
}

impl LogFile {
    /// Resolves `path` to an absolute path, creating the file if it does
    /// not exist. With `truncate`, a pre-existing file is cut back to
    /// length 0 before any writes.
    pub(crate) fn new(path: &Path, truncate: bool) -> Result<Self, std::io::Error> {
        let path = std::path::absolute(path)?;
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(truncate);
        options.open(&path)?;
        Ok(Self { path })
    }

    /// Appends one already-formatted record. The handle is acquired and
    /// released within the call, on error paths included.
    pub(crate) fn append(&self, record: &str) -> Result<(), std::io::Error> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;
        file.write_all(record.as_bytes())
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }
}

#[test]
fn test_new_creates_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.log");
    let file = LogFile::new(&path, false).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
    assert!(file.path().is_absolute());
}

#[test]
fn test_new_without_truncate_keeps_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("kept.log");
    std::fs::write(&path, "old contents\n").unwrap();
    LogFile::new(&path, false).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "old contents\n");
}

#[test]
fn test_new_with_truncate_discards_contents() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("truncated.log");
    std::fs::write(&path, "old contents\n").unwrap();
    LogFile::new(&path, true).unwrap();
    assert_eq!(std::fs::metadata(&path).unwrap().len(), 0);
}

#[test]
fn test_append_accumulates_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appended.log");
    let file = LogFile::new(&path, false).unwrap();
    file.append("first\n").unwrap();
    file.append("second\n").unwrap();
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "first\nsecond\n"
    );
}

#[test]
fn test_new_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("app.log");
    assert!(LogFile::new(&path, false).is_err());
}
