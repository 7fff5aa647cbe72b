//! CSV record files
//!
//! Ledger records are stored one row per record with a header line. Files
//! only ever grow, except when a failed posting is rolled back.

use std::fs::{self, OpenOptions};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::error::SipadiError;

/// Read every decodable record from a CSV file
///
/// A missing or empty file reads as an empty list. Rows that fail to decode
/// are skipped with a warning; only I/O failures are errors.
pub fn read_records<T, P>(path: P) -> Result<Vec<T>, SipadiError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| SipadiError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut records = Vec::new();
    for result in reader.deserialize::<T>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => {
                return Err(SipadiError::Storage(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
            Err(e) => {
                let line = e.position().map(|p| p.line()).unwrap_or_default();
                warn!(path = %path.display(), line, error = %e, "skipping unreadable row");
            }
        }
    }

    Ok(records)
}

/// Append records to a CSV file, writing the header only for a new file
pub fn append_records<T, P>(path: P, records: &[T]) -> Result<(), SipadiError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            SipadiError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let needs_header = file_len(path)? == 0;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| SipadiError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);

    for record in records {
        writer.serialize(record).map_err(|e| {
            SipadiError::Storage(format!("Failed to write {}: {}", path.display(), e))
        })?;
    }

    writer
        .flush()
        .map_err(|e| SipadiError::Storage(format!("Failed to flush {}: {}", path.display(), e)))?;

    Ok(())
}

/// Current length of a file in bytes; a missing file has length 0
pub fn file_len<P: AsRef<Path>>(path: P) -> Result<u64, SipadiError> {
    let path = path.as_ref();
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(SipadiError::Storage(format!(
            "Failed to stat {}: {}",
            path.display(),
            e
        ))),
    }
}

/// Cut a file back to `len` bytes, undoing appends made after it was measured
pub fn truncate_to<P: AsRef<Path>>(path: P, len: u64) -> Result<(), SipadiError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(());
    }

    let file = OpenOptions::new().write(true).open(path).map_err(|e| {
        SipadiError::Storage(format!("Failed to open {}: {}", path.display(), e))
    })?;
    file.set_len(len).map_err(|e| {
        SipadiError::Storage(format!("Failed to truncate {}: {}", path.display(), e))
    })?;
    file.sync_all()
        .map_err(|e| SipadiError::Storage(format!("Failed to sync {}: {}", path.display(), e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Row {
        #[serde(rename = "Name")]
        name: String,
        #[serde(rename = "Amount")]
        amount: i64,
    }

    fn row(name: &str, amount: i64) -> Row {
        Row {
            name: name.into(),
            amount,
        }
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let rows: Vec<Row> = read_records(temp_dir.path().join("none.csv")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_empty_file_reads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();
        let rows: Vec<Row> = read_records(&path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_append_writes_header_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data").join("rows.csv");

        append_records(&path, &[row("a", 1)]).unwrap();
        append_records(&path, &[row("b", 2), row("c", 3)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Name,Amount").count(), 1);

        let rows: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(rows, vec![row("a", 1), row("b", 2), row("c", 3)]);
    }

    #[test]
    fn test_bad_rows_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");
        fs::write(&path, "Name,Amount\na,1\nb,lots\nc,3\n").unwrap();

        let rows: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(rows, vec![row("a", 1), row("c", 3)]);
    }

    #[test]
    fn test_truncate_undoes_append() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rows.csv");

        append_records(&path, &[row("a", 1)]).unwrap();
        let len = file_len(&path).unwrap();
        append_records(&path, &[row("b", 2)]).unwrap();
        assert!(file_len(&path).unwrap() > len);

        truncate_to(&path, len).unwrap();
        let rows: Vec<Row> = read_records(&path).unwrap();
        assert_eq!(rows, vec![row("a", 1)]);
    }

    #[test]
    fn test_file_len_missing_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(file_len(temp_dir.path().join("x.csv")).unwrap(), 0);
    }
}
