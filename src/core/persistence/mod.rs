pub mod credentials;
pub mod entity_fs_adapter_trait;
pub mod settings;
pub mod storage_path;
