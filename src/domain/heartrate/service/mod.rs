pub mod gap_fill;
pub mod series_service;
pub mod timeline;
