//! File-backed session store
//!
//! The CLI equivalent of browser localStorage: a flat JSON object of string
//! keys, rewritten on every change.

use perfect_cv_common::{Error as CommonError, SessionStore};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`. A missing or unreadable file starts empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = Self::read_entries(&path).unwrap_or_else(|| {
            tracing::debug!(path = %path.display(), "no readable session file, starting empty");
            BTreeMap::new()
        });
        Self { path, entries }
    }

    fn read_entries(path: &Path) -> Option<BTreeMap<String, String>> {
        let file = File::open(path).ok()?;
        serde_json::from_reader(BufReader::new(file)).ok()
    }

    fn persist(&self) -> perfect_cv_common::Result<()> {
        if self.entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
                Err(e) => Err(CommonError::Storage(e.to_string())),
            };
        }

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CommonError::Storage(e.to_string()))?;
        }
        let file = File::create(&self.path).map_err(|e| CommonError::Storage(e.to_string()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &self.entries)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> perfect_cv_common::Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> perfect_cv_common::Result<()> {
        if self.entries.remove(key).is_some() {
            self.persist()?;
        }
        Ok(())
    }
}
