use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// FS adapter contract for a single-document entity file.
///
/// Implementations read a default entity when the file does not exist, and
/// write atomically (temp file, fsync, rename) so a crash mid-write never
/// leaves a torn document behind.
///
/// `Send + Sync` is part of the contract: adapters are borrowed as trait
/// objects across await points inside axum handlers.
pub trait EntityFsAdapterTrait<T>: Send + Sync {
    fn new() -> Self
    where
        Self: Sized;

    fn read(&self) -> Result<T>;
    fn write(&self, data: &T) -> Result<()>;
    fn delete(&self) -> Result<()>;
}

/// Shared helpers for the JSON-file adapters.
pub(crate) fn read_json_or_default<T: DeserializeOwned + Default>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

pub(crate) fn write_json_atomic<T: Serialize>(path: PathBuf, data: &T) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let mut f = File::create(&tmp_path)
        .with_context(|| format!("Failed to create {}", tmp_path.display()))?;

    let body = serde_json::to_string_pretty(data).context("Failed to serialize entity")?;
    f.write_all(body.as_bytes())?;
    f.flush()?;
    f.sync_all()
        .with_context(|| format!("Failed to sync {}", tmp_path.display()))?;

    fs::rename(&tmp_path, &path)
        .with_context(|| format!("Failed to finalize {}", path.display()))?;
    Ok(())
}

pub(crate) fn delete_if_present(path: PathBuf) -> Result<()> {
    if path.exists() {
        fs::remove_file(&path)
            .with_context(|| format!("Failed to delete {}", path.display()))?;
    }
    Ok(())
}
