/// File-backed key-value storage
///
/// Each key maps to one `<key>.json` file inside a base directory. This is
/// the native-process analog of a browser's localStorage: small blobs,
/// replaced whole on every write.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::storage::{KeyValueStorage, StorageError};

/// One-file-per-key storage implementation
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the given directory
    ///
    /// The directory is created if it does not exist.
    pub fn new(base_dir: PathBuf) -> Result<Self, StorageError> {
        fs::create_dir_all(&base_dir)?;
        tracing::info!("File storage initialized at: {:?}", base_dir);
        Ok(Self { base_dir })
    }

    /// Create a file storage at the default per-user location
    ///
    /// Tries the platform data directory, then the home directory, then the
    /// current working directory, and finally falls back to a temporary
    /// directory. The first location that can actually be written to wins.
    pub fn default_location() -> Result<Self, StorageError> {
        let potential_dirs = [
            dirs::data_dir().map(|mut p| {
                p.push("habit-tracker");
                p
            }),
            dirs::home_dir().map(|mut p| {
                p.push(".habit-tracker");
                p
            }),
            std::env::current_dir().ok().map(|mut p| {
                p.push(".habit-tracker");
                p
            }),
        ];

        for dir in potential_dirs.iter().flatten() {
            if fs::create_dir_all(dir).is_ok() {
                let probe = dir.join(".test_write");
                if fs::write(&probe, "test").is_ok() {
                    let _ = fs::remove_file(&probe);
                    return Self::new(dir.clone());
                }
            }
        }

        let mut temp = std::env::temp_dir();
        temp.push("habit-tracker");
        tracing::warn!("Using temporary directory for storage: {}", temp.display());
        Self::new(temp)
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys become file names, so reject anything that could escape the
        // base directory.
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.base_dir.join(format!("{key}.json")))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(&path, value)?;
        tracing::debug!("Wrote {} bytes to {:?}", value.len(), path);
        Ok(())
    }
}
