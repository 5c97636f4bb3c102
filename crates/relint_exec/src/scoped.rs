//! Scoped temporary configuration files with guaranteed cleanup.

use crate::error::ExecError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A temporary configuration file that lives exactly as long as one
/// invocation.
///
/// The file is created with the requested suffix (some tools insist on a
/// particular config extension), filled with the generated contents, and
/// removed when this value is dropped — on normal returns, early `?`
/// exits, and panics alike.
#[derive(Debug)]
pub struct ScopedConfigFile {
    file: NamedTempFile,
}

impl ScopedConfigFile {
    /// Creates a temporary file ending in `suffix` containing `contents`.
    pub fn create(suffix: &str, contents: &str) -> Result<Self, ExecError> {
        let mut file = tempfile::Builder::new()
            .prefix("relint-config-")
            .suffix(suffix)
            .tempfile()
            .map_err(ExecError::TempConfig)?;
        file.write_all(contents.as_bytes())
            .map_err(ExecError::TempConfig)?;
        file.flush().map_err(ExecError::TempConfig)?;
        log::debug!("materialized config at {}", file.path().display());
        Ok(Self { file })
    }

    /// Returns the path of the materialized config file.
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn creates_with_suffix_and_contents() {
        let config = ScopedConfigFile::create(".xml", "<lint/>").unwrap();
        let name = config.path().file_name().unwrap().to_string_lossy();
        assert!(name.ends_with(".xml"));
        assert_eq!(std::fs::read_to_string(config.path()).unwrap(), "<lint/>");
    }

    #[test]
    fn deleted_on_drop() {
        let path: PathBuf;
        {
            let config = ScopedConfigFile::create(".cfg", "x = 1").unwrap();
            path = config.path().to_path_buf();
            assert!(path.exists());
        }
        assert!(!path.exists());
    }

    #[test]
    fn deleted_on_panic() {
        let path = std::sync::Mutex::new(PathBuf::new());
        let result = std::panic::catch_unwind(|| {
            let config = ScopedConfigFile::create(".cfg", "").unwrap();
            *path.lock().unwrap() = config.path().to_path_buf();
            panic!("simulated interpretation failure");
        });
        assert!(result.is_err());
        assert!(!path.lock().unwrap().exists());
    }
}
