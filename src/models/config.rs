use std::path::{Path, PathBuf};

use screen5::ConvertOptions;
use serde::Deserialize;

use crate::error::AppError;

/// Output stem used when a job names none.
pub const DEFAULT_FILENAME: &str = "NONAME";

/// A conversion job loaded from YAML.
///
/// ```yaml
/// filename: title
/// output_dir: build/gfx
/// encoding: SC5
/// dithering: false
/// transparent_color: "#FF00FF"
/// export_text_palette: true
/// ```
///
/// Every key is optional. The conversion keys are those of
/// [`ConvertOptions`].
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct JobConfig {
    /// Output file stem, upper-cased on use
    pub filename: String,

    /// Directory receiving the output files
    pub output_dir: PathBuf,

    #[serde(flatten)]
    pub options: ConvertOptions,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            filename: DEFAULT_FILENAME.to_string(),
            output_dir: PathBuf::from("."),
            options: ConvertOptions::default(),
        }
    }
}

impl JobConfig {
    /// Load a job file. Unlike a missing optional setting, an unreadable or
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content).map_err(|source| AppError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(
            path = %path.display(),
            filename = %config.filename,
            encoding = %config.options.encoding,
            "Loaded job file"
        );
        Ok(config)
    }

    /// The file stem: upper-cased, MSX-DOS style.
    pub fn stem(&self) -> String {
        let name = self.filename.trim();
        if name.is_empty() {
            DEFAULT_FILENAME.to_string()
        } else {
            name.to_uppercase()
        }
    }

    /// Where the output with `extension` goes.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{extension}", self.stem()))
    }
}
