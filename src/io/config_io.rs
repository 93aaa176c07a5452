use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::AppConfig;

/// Resolve the data directory: explicit override, else
/// `$XDG_DATA_HOME/kantonspiel`, else `~/.local/share/kantonspiel`.
pub fn data_dir(override_dir: Option<&str>) -> PathBuf {
    if let Some(dir) = override_dir {
        return PathBuf::from(dir);
    }
    let data_home = std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".local").join("share"));
    data_home.join("kantonspiel")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read config.toml from the data directory.
/// A missing file yields defaults; a corrupted file warns and yields
/// defaults rather than failing startup.
pub fn read_config(dir: &Path) -> AppConfig {
    let path = dir.join("config.toml");
    if !path.exists() {
        return AppConfig::default();
    }
    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str::<AppConfig>(&content) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("warning: could not parse {}: {}", path.display(), e);
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}
