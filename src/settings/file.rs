//! Settings file persistence.
//!
//! One line: `length,upper,lower,digits,symbols,exclude_ambiguous,masked,keep_history`.

use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::Settings;

const FIELDS: usize = 8;

pub fn default_path() -> PathBuf {
    super::config_dir().join("settings")
}

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let c = &settings.config;
    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        c.length,
        c.upper,
        c.lower,
        c.digits,
        c.symbols,
        c.exclude_ambiguous,
        settings.masked,
        settings.keep_history,
    );

    file.write_all(data.as_bytes())?;
    debug!("settings saved to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists()
        && let Some(parent) = path.parent()
        && let Err(e) = std::fs::create_dir_all(parent)
    {
        warn!("failed to create directory for settings file: {}", e);
        return Ok(());
    }

    let file = OpenOptions::new()
        .read(true)
        .create(true)
        .truncate(false)
        .write(true)
        .open(path)?;

    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        return save(settings, path);
    }

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELDS {
        warn!(
            "settings file {} has {} fields, expected {}; rewriting defaults",
            path.display(),
            parts.len(),
            FIELDS
        );
        *settings = Settings::default();
        return save(settings, path);
    }

    let c = &mut settings.config;
    c.length = parts[0].parse().unwrap_or(c.length);
    c.upper = parts[1].parse().unwrap_or(c.upper);
    c.lower = parts[2].parse().unwrap_or(c.lower);
    c.digits = parts[3].parse().unwrap_or(c.digits);
    c.symbols = parts[4].parse().unwrap_or(c.symbols);
    c.exclude_ambiguous = parts[5].parse().unwrap_or(c.exclude_ambiguous);
    settings.masked = parts[6].parse().unwrap_or(settings.masked);
    settings.keep_history = parts[7].parse().unwrap_or(settings.keep_history);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::GenerationConfig;

    #[test]
    fn missing_file_written_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cfg/settings");
        let mut s = Settings::default();
        load(&mut s, &path).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "16,true,true,true,true,true,false,true\n"
        );
    }

    #[test]
    fn saved_values_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        let custom = Settings {
            config: GenerationConfig {
                length: 32,
                upper: false,
                lower: true,
                digits: true,
                symbols: false,
                exclude_ambiguous: false,
            },
            masked: true,
            keep_history: false,
        };
        save(&custom, &path).unwrap();

        let mut loaded = Settings::default();
        load(&mut loaded, &path).unwrap();
        assert_eq!(loaded, custom);
    }

    #[test]
    fn bad_field_keeps_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "abc,false,true,true,true,yes,false,true\n").unwrap();
        let mut s = Settings::default();
        load(&mut s, &path).unwrap();
        assert_eq!(s.config.length, 16);
        assert!(!s.config.upper);
        assert!(s.config.exclude_ambiguous);
    }

    #[test]
    fn wrong_field_count_resets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings");
        std::fs::write(&path, "74,19,false,false,!@#,5,1,1,1,1,,true,\n").unwrap();
        let mut s = Settings::default();
        s.masked = true;
        load(&mut s, &path).unwrap();
        assert_eq!(s, Settings::default());
        assert!(std::fs::read_to_string(&path).unwrap().starts_with("16,"));
    }
}
