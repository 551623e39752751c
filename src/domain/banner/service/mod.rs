pub mod banner_cache;
pub mod banner_service;
pub mod render_service;
pub mod ticks;
