//! Locations of the file-backed entities.

use std::env;
use std::path::PathBuf;

/// Base directory for persisted state, overridable for containers.
pub fn data_dir() -> PathBuf {
    env::var("BANNER_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./data"))
}

pub fn app_credential_path() -> PathBuf {
    data_dir().join("app_credentials.json")
}

pub fn user_credential_path() -> PathBuf {
    data_dir().join("user_credentials.json")
}

pub fn banner_setting_path() -> PathBuf {
    data_dir().join("banner_settings.json")
}
