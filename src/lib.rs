//! msxg4 - MSX2 GRAPHICS 4 converter
//!
//! Command-line host for the `screen5` conversion core: PNG decoding, job
//! files and output writing. This library exposes modules for integration
//! testing.

pub mod error;
pub mod models;
pub mod services;
