//! Resume file on local disk
//!
//! Only name and size are read up front so the upload flow can reject a bad
//! candidate without loading it. Bytes are read right before sending.

use crate::error::{PerfectCvError, Result};
use perfect_cv_common::FileLike;
use std::io;
use std::path::{Path, PathBuf};

/// Only a missing path is `FileNotFound`; other stat failures keep their cause.
fn metadata_error(path: &Path, err: io::Error) -> PerfectCvError {
    match err.kind() {
        io::ErrorKind::NotFound => PerfectCvError::FileNotFound(path.display().to_string()),
        _ => PerfectCvError::Io(err),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    size: u64,
}

impl LocalFile {
    pub fn open(path: &Path) -> Result<Self> {
        let metadata = std::fs::metadata(path).map_err(|e| metadata_error(path, e))?;
        if !metadata.is_file() {
            return Err(PerfectCvError::FileNotFound(path.display().to_string()));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        Ok(Self {
            path: path.to_path_buf(),
            name,
            size: metadata.len(),
        })
    }

    /// Build without touching the filesystem.
    pub fn from_parts(path: impl Into<PathBuf>, name: impl Into<String>, size: u64) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            size,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(tokio::fs::read(&self.path).await?)
    }
}

impl FileLike for LocalFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn file_size(&self) -> u64 {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_reads_name_and_size() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("cv.pdf");
        std::fs::write(&path, b"%PDF-1.4 test").unwrap();

        let file = LocalFile::open(&path).unwrap();
        assert_eq!(file.file_name(), "cv.pdf");
        assert_eq!(file.file_size(), 13);
    }

    #[test]
    fn test_open_missing_file() {
        let err = LocalFile::open(Path::new("/nonexistent/cv.pdf")).unwrap_err();
        assert!(matches!(err, PerfectCvError::FileNotFound(_)));
    }

    #[test]
    fn test_unreadable_path_keeps_io_cause() {
        let err = metadata_error(
            Path::new("cv.pdf"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        match err {
            PerfectCvError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            other => panic!("expected Io, got {:?}", other),
        }
        assert!(matches!(
            metadata_error(Path::new("cv.pdf"), io::Error::from(io::ErrorKind::NotFound)),
            PerfectCvError::FileNotFound(_)
        ));
    }

    #[test]
    fn test_open_directory_is_not_a_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        assert!(matches!(
            LocalFile::open(dir.path()).unwrap_err(),
            PerfectCvError::FileNotFound(_)
        ));
    }
}
