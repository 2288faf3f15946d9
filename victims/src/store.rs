//! The record store: load, add, remove, list.
//!
//! A [`Store`] owns the in-memory list for one invocation. Every successful
//! mutation rewrites the whole backing file before returning. Validation
//! failures come back as `Rejected` outcomes and leave the store untouched;
//! only file errors surface through `Err`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::identity::find;
use crate::core::ordering::{is_sorted_by_date_desc, sort_by_date_desc};
use crate::core::record::{Record, RecordInput};
use crate::core::validate::{Candidate, Rejection, parse_lookup, validate_new};
use crate::io::record_file::{load_records, write_records};

/// Result of [`Store::add`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// Record was stored and the file rewritten.
    Added(Record),
    Rejected(Rejection),
}

/// Result of [`Store::remove`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Record was dropped and the file rewritten.
    Removed(Record),
    Rejected(Rejection),
}

#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    records: Vec<Record>,
    file_missing: bool,
}

impl Store {
    /// Load the store from `path` and sort it newest first.
    ///
    /// A missing file yields an empty store (see [`Store::file_missing`]).
    /// A file that is not a valid record array is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let loaded = load_records(&path)
            .with_context(|| format!("load victims file {}", path.display()))?;
        let file_missing = loaded.is_none();
        let mut records = loaded.unwrap_or_default();
        sort_by_date_desc(&mut records);
        debug!(path = %path.display(), count = records.len(), file_missing, "store opened");
        Ok(Self {
            path,
            records,
            file_missing,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if the backing file did not exist when the store was opened.
    pub fn file_missing(&self) -> bool {
        self.file_missing
    }

    /// Records in current order (newest first after load or add).
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if a stored record has the same identity as `candidate`.
    pub fn exists(&self, candidate: &Candidate) -> bool {
        find(&self.records, candidate).is_some()
    }

    /// Validate and add a record, then persist the full list.
    pub fn add(&mut self, input: &RecordInput) -> Result<AddOutcome> {
        let record = match validate_new(input) {
            Ok(record) => record,
            Err(rejection) => {
                debug!(%rejection, "add rejected");
                return Ok(AddOutcome::Rejected(rejection));
            }
        };

        let candidate = Candidate::from(&record);
        if self.exists(&candidate) {
            return Ok(AddOutcome::Rejected(Rejection::Duplicate {
                name: candidate.display_name(),
                date: candidate.date_of_death,
            }));
        }

        self.records.push(record.clone());
        sort_by_date_desc(&mut self.records);
        debug_assert!(is_sorted_by_date_desc(&self.records));
        self.save()?;
        info!(name = %record.full_name(), date = %record.date_of_death, "record added");
        Ok(AddOutcome::Added(record))
    }

    /// Remove the first record matching `input`, then persist the full list.
    pub fn remove(&mut self, input: &RecordInput) -> Result<RemoveOutcome> {
        let candidate = match parse_lookup(input) {
            Ok(candidate) => candidate,
            Err(rejection) => {
                debug!(%rejection, "remove rejected");
                return Ok(RemoveOutcome::Rejected(rejection));
            }
        };

        let Some(idx) = find(&self.records, &candidate) else {
            return Ok(RemoveOutcome::Rejected(Rejection::NotFound {
                name: candidate.display_name(),
                date: candidate.date_of_death,
            }));
        };

        let removed = self.records.remove(idx);
        self.save()?;
        info!(name = %removed.full_name(), date = %removed.date_of_death, "record removed");
        Ok(RemoveOutcome::Removed(removed))
    }

    fn save(&self) -> Result<()> {
        write_records(&self.path, &self.records)
            .with_context(|| format!("save victims file {}", self.path.display()))
    }
}
