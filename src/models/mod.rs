mod config;

pub use config::{JobConfig, DEFAULT_FILENAME};
