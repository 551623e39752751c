use anyhow::Result;

use crate::core::persistence::entity_fs_adapter_trait::{
    delete_if_present, read_json_or_default, write_json_atomic, EntityFsAdapterTrait,
};
use crate::core::persistence::storage_path::{app_credential_path, user_credential_path};

use super::app_credential_entity::AppCredentialEntity;
use super::user_credential_entity::UserCredentialEntity;

/// FS adapter for `app_credentials.json`.
pub struct AppCredentialFsAdapter;

impl EntityFsAdapterTrait<AppCredentialEntity> for AppCredentialFsAdapter {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self {}
    }

    fn read(&self) -> Result<AppCredentialEntity> {
        read_json_or_default(app_credential_path())
    }

    fn write(&self, data: &AppCredentialEntity) -> Result<()> {
        write_json_atomic(app_credential_path(), data)
    }

    fn delete(&self) -> Result<()> {
        delete_if_present(app_credential_path())
    }
}

/// FS adapter for `user_credentials.json`.
pub struct UserCredentialFsAdapter;

impl EntityFsAdapterTrait<UserCredentialEntity> for UserCredentialFsAdapter {
    fn new() -> Self
    where
        Self: Sized,
    {
        Self {}
    }

    fn read(&self) -> Result<UserCredentialEntity> {
        read_json_or_default(user_credential_path())
    }

    fn write(&self, data: &UserCredentialEntity) -> Result<()> {
        write_json_atomic(user_credential_path(), data)
    }

    fn delete(&self) -> Result<()> {
        delete_if_present(user_credential_path())
    }
}
