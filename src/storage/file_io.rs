//! Typed JSON files
//!
//! A [`JsonFile`] knows the type it holds. Loading a missing file yields the
//! type's default; storing goes through a temp file in the same directory
//! that is renamed over the target, so readers never see half a file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::error::{LedgerError, LedgerResult};

/// A JSON document of type `T` at a fixed path
#[derive(Debug, Clone)]
pub struct JsonFile<T> {
    path: PathBuf,
    _contents: PhantomData<fn() -> T>,
}

impl<T> JsonFile<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _contents: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl<T: DeserializeOwned + Default> JsonFile<T> {
    /// Read the document, or `T::default()` when the file is absent
    pub fn load(&self) -> LedgerResult<T> {
        if !self.exists() {
            return Ok(T::default());
        }

        let file = File::open(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            LedgerError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }
}

impl<T: Serialize> JsonFile<T> {
    /// Replace the document on disk
    pub fn store(&self, value: &T) -> LedgerResult<()> {
        let parent = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent).map_err(|e| {
            LedgerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;

        let mut temp = NamedTempFile::new_in(parent)
            .map_err(|e| LedgerError::Storage(format!("Failed to create temp file: {}", e)))?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            serde_json::to_writer_pretty(&mut writer, value).map_err(|e| {
                LedgerError::Storage(format!("Failed to serialize {}: {}", self.path.display(), e))
            })?;
            writer
                .flush()
                .map_err(|e| LedgerError::Storage(format!("Failed to flush data: {}", e)))?;
        }

        temp.as_file()
            .sync_all()
            .map_err(|e| LedgerError::Storage(format!("Failed to sync data: {}", e)))?;

        temp.persist(&self.path).map_err(|e| {
            LedgerError::Storage(format!("Failed to replace {}: {}", self.path.display(), e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
    struct Counter {
        next_id: u64,
        labels: Vec<String>,
    }

    #[test]
    fn test_missing_file_loads_default() {
        let temp_dir = TempDir::new().unwrap();
        let file: JsonFile<Counter> = JsonFile::new(temp_dir.path().join("missing.json"));
        assert!(!file.exists());
        assert_eq!(file.load().unwrap(), Counter::default());
    }

    #[test]
    fn test_store_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("nested");
        let file = JsonFile::new(dir.join("counter.json"));
        let data = Counter {
            next_id: 3,
            labels: vec!["Lunch".into(), "Rent".into()],
        };

        file.store(&data).unwrap();

        assert_eq!(file.load().unwrap(), data);
        // Only the target is left behind
        assert_eq!(fs::read_dir(&dir).unwrap().count(), 1);
    }

    #[test]
    fn test_store_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let file = JsonFile::new(temp_dir.path().join("counter.json"));

        file.store(&Counter {
            next_id: 9,
            labels: vec!["a much longer label than the next one".into()],
        })
        .unwrap();
        file.store(&Counter::default()).unwrap();

        assert_eq!(file.load().unwrap(), Counter::default());
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let file: JsonFile<Counter> = JsonFile::new(temp_dir.path().join("bad.json"));
        fs::write(file.path(), "not json at all").unwrap();

        let err = file.load().unwrap_err();
        assert!(matches!(err, LedgerError::Storage(_)));
        assert!(err.to_string().contains("bad.json"));
    }
}
