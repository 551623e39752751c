pub mod banner;
pub mod setting;
pub mod setup;
