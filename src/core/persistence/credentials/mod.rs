pub mod app_credential_entity;
pub mod credential_fs_adapter;
pub mod credential_repository;
pub mod user_credential_entity;
