//! Persisted generation defaults.

mod file;

use std::env;
use std::path::PathBuf;

use crate::pass::GenerationConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config: GenerationConfig,
    pub masked: bool,
    pub keep_history: bool,
}

impl Settings {
    pub fn load_from_file() -> Result<Self, std::io::Error> {
        let mut settings = Settings::default();
        file::load(&mut settings, &file::default_path())?;
        Ok(settings)
    }

    pub fn save_to_file(&self) -> Result<(), std::io::Error> {
        file::save(self, &file::default_path())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: GenerationConfig::default(),
            masked: false,
            keep_history: true,
        }
    }
}

/// `<config dir>/passforge`, falling back to `$HOME/.config/passforge`.
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = env::var("HOME").unwrap_or_else(|_| ".".into());
            PathBuf::from(home).join(".config")
        })
        .join("passforge")
}
