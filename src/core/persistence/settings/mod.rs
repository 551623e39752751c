pub mod banner_setting_entity;
pub mod banner_setting_fs_adapter;
pub mod banner_setting_repository;
