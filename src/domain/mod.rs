pub mod banner;
pub mod heartrate;
pub mod settings;
pub mod setup;
pub mod tz;
