//! API route declarations (e.g., /api/v1/*)

pub mod setting_routes;
pub mod setup_routes;
