use crate::core::persistence::entity_fs_adapter_trait::EntityFsAdapterTrait;

use super::app_credential_entity::AppCredentialEntity;
use super::credential_fs_adapter::{AppCredentialFsAdapter, UserCredentialFsAdapter};
use super::user_credential_entity::UserCredentialEntity;

/// Repository seam over both credential files; services depend on this trait
/// so tests can substitute in-memory adapters. `Send + Sync` so the trait
/// object can be held across await points inside handlers.
pub trait CredentialApiRepository: Send + Sync {
    fn app_adapter(&self) -> &dyn EntityFsAdapterTrait<AppCredentialEntity>;
    fn user_adapter(&self) -> &dyn EntityFsAdapterTrait<UserCredentialEntity>;
}

pub struct CredentialRepository {
    app: AppCredentialFsAdapter,
    user: UserCredentialFsAdapter,
}

impl CredentialRepository {
    pub fn new() -> Self {
        Self {
            app: AppCredentialFsAdapter::new(),
            user: UserCredentialFsAdapter::new(),
        }
    }
}

impl Default for CredentialRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialApiRepository for CredentialRepository {
    fn app_adapter(&self) -> &dyn EntityFsAdapterTrait<AppCredentialEntity> {
        &self.app
    }

    fn user_adapter(&self) -> &dyn EntityFsAdapterTrait<UserCredentialEntity> {
        &self.user
    }
}
