use super::EntryStore;
use crate::error::{Result, ShiplogError};
use crate::model::Entry;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding the data file location.
pub const DATA_PATH_ENV: &str = "SHIPLOG_DATA_PATH";

const DATA_FILENAME: &str = "entries.json";

/// File-backed storage: the whole collection lives in one JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Resolve the data file from `SHIPLOG_DATA_PATH`, falling back to the
    /// platform data directory.
    pub fn from_env() -> Self {
        let path = std::env::var_os(DATA_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);
        Self::new(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(ShiplogError::Io)?;
            }
        }
        Ok(())
    }
}

fn default_data_path() -> PathBuf {
    match ProjectDirs::from("com", "shiplog", "shiplog") {
        Some(dirs) => dirs.data_dir().join(DATA_FILENAME),
        None => PathBuf::from(DATA_FILENAME),
    }
}

impl EntryStore for FileStore {
    fn load(&self) -> Result<Vec<Entry>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path).map_err(ShiplogError::Io)?;
        // A corrupt payload is treated as absent, not as a fatal error.
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn save(&mut self, entries: &[Entry]) -> Result<()> {
        self.ensure_parent()?;
        let payload = serde_json::to_string(entries).map_err(ShiplogError::Serialization)?;
        fs::write(&self.path, payload).map_err(ShiplogError::Io)?;
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ShiplogError::Io(e)),
        }
    }
}
