pub mod banner_setting_upsert_request;
