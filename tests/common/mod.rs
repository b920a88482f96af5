//! Common test infrastructure for msxg4 integration tests.
//!
//! Each test file compiles its own copy of this module, so items may appear
//! unused from the perspective of a single test file even though they're
//! used elsewhere.

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

pub use fixtures::*;

use std::path::Path;

use msxg4::models::JobConfig;
use tempfile::TempDir;

/// A job writing into `dir` with the given stem.
pub fn job_in(dir: &TempDir, filename: &str) -> JobConfig {
    JobConfig {
        filename: filename.to_string(),
        output_dir: dir.path().to_path_buf(),
        ..JobConfig::default()
    }
}

/// Sorted names of the files in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
