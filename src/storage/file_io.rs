//! File I/O for the account record, with atomic writes
//!
//! The record file is overwritten in full on every save. Writes go to a
//! temp file in the same directory followed by a rename, so the file is
//! either completely written or not modified at all.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::TellerError;

use super::record::AccountRecord;

/// Write the account record to a file atomically (write to temp, then rename)
pub fn save_record<P: AsRef<Path>>(path: P, record: &AccountRecord) -> Result<(), TellerError> {
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                TellerError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TellerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    writer
        .write_all(record.to_file_string().as_bytes())
        .map_err(|e| TellerError::Storage(format!("Failed to write record: {}", e)))?;

    writer
        .flush()
        .map_err(|e| TellerError::Storage(format!("Failed to flush record: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TellerError::Storage(format!("Failed to sync record: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        TellerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Read the account record from a file
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_record<P: AsRef<Path>>(path: P) -> Result<Option<AccountRecord>, TellerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .map_err(|e| TellerError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    let record = AccountRecord::parse(&contents)
        .map_err(|e| TellerError::Storage(format!("Failed to parse {}: {}", path.display(), e)))?;

    Ok(Some(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountNumber, Money};
    use tempfile::TempDir;

    fn test_record() -> AccountRecord {
        AccountRecord {
            number: AccountNumber::new(1000),
            owner_name: "Alice".to_string(),
            balance: Money::from_cents(5000),
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("account_data.txt");

        let record = test_record();
        save_record(&path, &record).unwrap();

        let loaded = load_record(&path).unwrap().unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_save_writes_expected_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("account_data.txt");

        save_record(&path, &test_record()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "1000\nAlice\n50\n");
    }

    #[test]
    fn test_save_overwrites_previous_record() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("account_data.txt");

        save_record(&path, &test_record()).unwrap();

        let updated = AccountRecord {
            balance: Money::from_cents(2500),
            ..test_record()
        };
        save_record(&path, &updated).unwrap();

        let loaded = load_record(&path).unwrap().unwrap();
        assert_eq!(loaded.balance.cents(), 2500);
    }

    #[test]
    fn test_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("account_data.txt");

        save_record(&path, &test_record()).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("account_data.txt.tmp").exists());
    }

    #[test]
    fn test_load_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert_eq!(load_record(&path).unwrap(), None);
    }

    #[test]
    fn test_load_malformed_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("account_data.txt");

        fs::write(&path, "not\na\nrecord at all\n").unwrap();

        assert!(matches!(
            load_record(&path),
            Err(TellerError::Storage(_))
        ));
    }
}
