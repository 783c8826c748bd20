// Manages local file access: reading procedure snapshots and writing the
// config file safely (exclusive lock + atomic rename).
use crate::model::{Procedure, RawProcedure};
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub struct LocalStorage;

impl LocalStorage {
    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive lock on a sidecar lock file,
    /// so concurrent instances cannot interleave writes.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Reads a snapshot file into raw records.
    ///
    /// A missing file is an empty snapshot, not an error. The top-level
    /// value must be a JSON array; individual records that fail to
    /// deserialize are logged and skipped rather than failing the load.
    pub fn load_raw_records(path: &Path) -> Result<Vec<RawProcedure>> {
        if !path.exists() {
            log::info!("No snapshot file at {}", path.display());
            return Ok(Vec::new());
        }

        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot '{}'", path.display()))?;
        let values: Vec<serde_json::Value> = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse snapshot '{}'", path.display()))?;

        let mut records = Vec::with_capacity(values.len());
        for value in values {
            match serde_json::from_value::<RawProcedure>(value) {
                Ok(record) => records.push(record),
                Err(e) => log::warn!("Skipping malformed snapshot record: {}", e),
            }
        }
        Ok(records)
    }

    /// Loads and converts a snapshot in one step.
    pub fn load_snapshot(path: &Path, date_format: &str) -> Result<Vec<Procedure>> {
        let records = Self::load_raw_records(path)?;
        Ok(Procedure::from_raw_records(records, date_format))
    }
}
