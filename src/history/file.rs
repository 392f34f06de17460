//! JSON file backing for history.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use log::{debug, warn};

use super::HistoryStore;
use crate::error::Result;
use crate::settings;

const FILE_NAME: &str = "pwd_history_v1.json";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store under the user config directory.
    pub fn default_location() -> Self {
        Self::new(settings::config_dir().join(FILE_NAME))
    }
}

impl HistoryStore for FileStore {
    fn load(&self) -> Result<Vec<String>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(d) => d,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                warn!("ignoring unreadable history file {}: {}", self.path.display(), e);
                return Ok(Vec::new());
            }
        };
        if data.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Vec<String>>(&data) {
            Ok(entries) => {
                debug!("loaded {} history entries from {}", entries.len(), self.path.display());
                Ok(entries)
            }
            Err(e) => {
                warn!("ignoring unreadable history file {}: {}", self.path.display(), e);
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, entries: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options.open(&self.path)?;
        let mut data = serde_json::to_vec(entries)?;
        let written = file.write_all(&data);
        zeroize::Zeroize::zeroize(&mut data);
        written?;
        debug!("saved {} history entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}
