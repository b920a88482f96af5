//! Output files: existence pre-check and atomic writes.
//!
//! Each file is written to a temporary file in the target directory and
//! then linked into place without replacing anything, so an aborted run
//! never leaves a truncated file under the final name.

use std::io::Write;
use std::path::{Path, PathBuf};

use screen5::{Artifact, ConvertError};
use tempfile::NamedTempFile;

use crate::error::AppError;

/// Writes the artifacts of one conversion as `DIR/STEM.EXT`.
#[derive(Debug, Clone)]
pub struct OutputWriter {
    dir: PathBuf,
    stem: String,
}

impl OutputWriter {
    pub fn new(dir: impl Into<PathBuf>, stem: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            stem: stem.into(),
        }
    }

    pub fn path_for(&self, extension: &str) -> PathBuf {
        self.dir.join(format!("{}.{extension}", self.stem))
    }

    /// Fail with [`ConvertError::OutputAlreadyExists`] if any of the files
    /// for `extensions` is already present.
    pub fn check_available(&self, extensions: &[&str]) -> Result<(), AppError> {
        for extension in extensions {
            let path = self.path_for(extension);
            if path.exists() {
                return Err(ConvertError::OutputAlreadyExists { path }.into());
            }
        }
        Ok(())
    }

    /// Write every artifact, returning the paths in order.
    pub fn write_all(&self, artifacts: &[Artifact<'_>]) -> Result<Vec<PathBuf>, AppError> {
        let mut written = Vec::with_capacity(artifacts.len());
        for artifact in artifacts {
            let path = self.dir.join(artifact.file_name(&self.stem));
            write_atomic(&path, artifact.bytes)?;
            tracing::info!(path = %path.display(), bytes = artifact.bytes.len(), "Wrote file");
            written.push(path);
        }
        Ok(written)
    }
}

/// Write `bytes` to `path` through a temporary sibling file. Refuses to
/// overwrite an existing file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = NamedTempFile::new_in(dir)?;
    file.write_all(bytes)?;
    file.as_file().sync_all()?;

    file.persist_noclobber(path).map_err(|e| {
        if e.error.kind() == std::io::ErrorKind::AlreadyExists {
            AppError::Convert(ConvertError::OutputAlreadyExists {
                path: path.to_path_buf(),
            })
        } else {
            AppError::Io(e.error)
        }
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths() {
        let writer = OutputWriter::new("out", "TITLE");
        assert_eq!(writer.path_for("SC5"), PathBuf::from("out").join("TITLE.SC5"));
    }

    #[test]
    fn test_check_available() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(dir.path(), "NONAME");
        assert!(writer.check_available(&["SC5", "PAL"]).is_ok());

        std::fs::write(dir.path().join("NONAME.PAL"), b"x").unwrap();
        let err = writer.check_available(&["SC5", "PAL"]).unwrap_err();
        assert!(matches!(
            err,
            AppError::Convert(ConvertError::OutputAlreadyExists { ref path }) if path.ends_with("NONAME.PAL")
        ));
    }

    #[test]
    fn test_write_all() {
        let dir = TempDir::new().unwrap();
        let writer = OutputWriter::new(dir.path(), "PIC");
        let artifacts = [
            Artifact {
                extension: "SR5",
                bytes: &[0xFE, 1, 2],
            },
            Artifact {
                extension: "TXT",
                bytes: b"hello\n",
            },
        ];

        let written = writer.write_all(&artifacts).unwrap();

        assert_eq!(written.len(), 2);
        assert_eq!(std::fs::read(dir.path().join("PIC.SR5")).unwrap(), [0xFE, 1, 2]);
        assert_eq!(std::fs::read_to_string(dir.path().join("PIC.TXT")).unwrap(), "hello\n");
    }

    #[test]
    fn test_write_atomic_never_clobbers() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("KEEP.RAW");
        std::fs::write(&path, b"original").unwrap();

        let err = write_atomic(&path, b"new").unwrap_err();

        assert!(matches!(
            err,
            AppError::Convert(ConvertError::OutputAlreadyExists { .. })
        ));
        assert_eq!(std::fs::read(&path).unwrap(), b"original");
        // the temporary file is cleaned up
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
