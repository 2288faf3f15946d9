//! Backing file load/save.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::core::record::Record;

/// Load all records from `path`.
///
/// Returns `Ok(None)` if the file does not exist. Any other read failure, or
/// content that is not a JSON array of record objects, is an error.
pub fn load_records(path: &Path) -> Result<Option<Vec<Record>>> {
    debug!(path = %path.display(), "loading records");
    if !path.exists() {
        debug!(path = %path.display(), "record file missing");
        return Ok(None);
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("read records {}", path.display()))?;
    let records: Vec<Record> = serde_json::from_str(&contents)
        .with_context(|| format!("invalid JSON in {}", path.display()))?;
    debug!(count = records.len(), "records loaded");
    Ok(Some(records))
}

/// Write the full record list to `path`, creating the parent directory.
///
/// Output is pretty JSON with 2-space indentation and a trailing newline;
/// non-ASCII text is written as-is.
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    debug!(path = %path.display(), count = records.len(), "writing records");
    let mut buf = serde_json::to_string_pretty(records).context("serialize records")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp records {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace records {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::record;

    #[test]
    fn missing_file_loads_as_none() {
        let temp = tempfile::tempdir().expect("tempdir");
        let loaded = load_records(&temp.path().join("victims.json")).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn invalid_json_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("victims.json");
        fs::write(&path, "{ not json").expect("write");
        let err = load_records(&path).expect_err("invalid json");
        assert!(format!("{err:#}").contains("invalid JSON"));
    }

    #[test]
    fn non_array_document_is_an_error() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("victims.json");
        fs::write(&path, r#"{"firstname":"Jane"}"#).expect("write");
        assert!(load_records(&path).is_err());
    }

    #[test]
    fn legacy_records_load() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("victims.json");
        fs::write(
            &path,
            r#"[{"firstname":"Ann","lastname":"Lee","dateOfDeath":"2019-01-02"}]"#,
        )
        .expect("write");
        let records = load_records(&path).expect("load").expect("present");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].age, None);
    }

    #[test]
    fn null_fields_load_as_empty_text() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("victims.json");
        fs::write(
            &path,
            r#"[{"firstname":"Ann","middlename":null,"lastname":"Lee","dateOfDeath":null}]"#,
        )
        .expect("write");
        let records = load_records(&path).expect("load").expect("present");
        assert_eq!(records[0].middlename, "");
        assert_eq!(records[0].date_of_death, "");
        assert_eq!(records[0].to_string(), "Ann Lee - Unknown");
    }

    #[test]
    fn write_creates_parent_and_uses_two_space_indent() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("src").join("assets").join("victims.json");
        write_records(&path, &[record("José", "", "Núñez", 27, "2022-07-04")]).expect("write");

        let contents = fs::read_to_string(&path).expect("read");
        let expected = "[\n  {\n    \"firstname\": \"José\",\n    \"middlename\": \"\",\n    \"lastname\": \"Núñez\",\n    \"age\": 27,\n    \"dateOfDeath\": \"2022-07-04\"\n  }\n]\n";
        assert_eq!(contents, expected);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn write_then_load_preserves_records() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("victims.json");
        let records = vec![
            record("Jane", "Q", "Doe", 34, "2020-05-01"),
            record("A", "", "B", 0, "2010-01-01"),
        ];
        write_records(&path, &records).expect("write");
        assert_eq!(load_records(&path).expect("load"), Some(records));
    }

    #[test]
    fn write_into_unwritable_location_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        let blocker = temp.path().join("blocker");
        fs::write(&blocker, "file, not a directory").expect("write");
        let path = blocker.join("victims.json");
        assert!(write_records(&path, &[]).is_err());
    }
}
