//! Test-only helpers for building records and scratch stores.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::record::{Record, RecordInput};
use crate::store::Store;

/// Build a stored record with an explicit age.
pub fn record(first: &str, middle: &str, last: &str, age: u32, date: &str) -> Record {
    Record {
        firstname: first.to_string(),
        middlename: middle.to_string(),
        lastname: last.to_string(),
        age: Some(age),
        date_of_death: date.to_string(),
        extra: serde_json::Map::new(),
    }
}

/// Build raw command-line input.
pub fn input(first: &str, middle: &str, last: &str, age: &str, date: &str) -> RecordInput {
    RecordInput::new(first, middle, last, age, date)
}

/// Temporary directory with a data path at the default relative location.
pub struct TestStore {
    dir: TempDir,
    data_path: PathBuf,
}

impl TestStore {
    pub fn new() -> Result<Self> {
        let dir = tempfile::tempdir().context("create tempdir")?;
        let data_path = dir.path().join("src").join("assets").join("victims.json");
        Ok(Self { dir, data_path })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn open(&self) -> Result<Store> {
        Store::open(self.data_path.clone())
    }

    /// Write raw file contents, creating the parent directory.
    pub fn write_raw(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.data_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&self.data_path, contents)
            .with_context(|| format!("write {}", self.data_path.display()))
    }

    pub fn read_raw(&self) -> Result<String> {
        fs::read_to_string(&self.data_path)
            .with_context(|| format!("read {}", self.data_path.display()))
    }
}
