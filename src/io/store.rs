use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tempfile::NamedTempFile;

use crate::model::catalog;
use crate::model::route::Route;

/// Store keys. Each key maps to `<key>.json` in the data directory.
const SELECTED_KEY: &str = "selected-codes";
const COMPLETED_KEY: &str = "completed-at";
const ROUTE_KEY: &str = "route";

/// Error type for store writes. Loads never fail: any read or parse
/// problem recovers to a safe default so a corrupted record cannot take
/// down the view.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not create data directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {key}: {source}")]
    Write {
        key: &'static str,
        source: std::io::Error,
    },
    #[error("could not serialize store value: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable key-value store for the three pieces of game state.
///
/// The three keys have independent lifecycles and are written
/// independently; there is no transaction spanning them.
#[derive(Debug, Clone)]
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: &Path) -> Result<Store, StoreError> {
        fs::create_dir_all(dir).map_err(|e| StoreError::CreateDir {
            path: dir.to_path_buf(),
            source: e,
        })?;
        Ok(Store {
            dir: dir.to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn read_key(&self, key: &str) -> Option<serde_json::Value> {
        let content = fs::read_to_string(self.key_path(key)).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn write_key(&self, key: &'static str, value: &serde_json::Value) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(value)?;
        atomic_write(&self.key_path(key), content.as_bytes())
            .map_err(|e| StoreError::Write { key, source: e })
    }

    fn remove_key(&self, key: &str) {
        let _ = fs::remove_file(self.key_path(key));
    }

    // -----------------------------------------------------------------------
    // Selection
    // -----------------------------------------------------------------------

    /// Load the selected codes. Missing file, malformed JSON, or a
    /// non-array shape all yield the empty set; codes not in the catalog
    /// are silently dropped.
    pub fn load_selection(&self) -> HashSet<String> {
        let Some(serde_json::Value::Array(items)) = self.read_key(SELECTED_KEY) else {
            return HashSet::new();
        };
        items
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) if catalog::is_valid_code(&s) => Some(s),
                _ => None,
            })
            .collect()
    }

    /// Overwrite the stored selection with the full set.
    /// Serialized in catalog order so the file is stable across runs.
    pub fn save_selection(&self, selected: &HashSet<String>) -> Result<(), StoreError> {
        let codes: Vec<&str> = catalog::CANTONS
            .iter()
            .map(|c| c.code)
            .filter(|code| selected.contains(*code))
            .collect();
        self.write_key(SELECTED_KEY, &serde_json::json!(codes))
    }

    pub fn clear_selection(&self) {
        self.remove_key(SELECTED_KEY);
    }

    // -----------------------------------------------------------------------
    // Completion marker
    // -----------------------------------------------------------------------

    /// The timestamp of the first full completion of this run, if any.
    pub fn completion_marker(&self) -> Option<DateTime<Utc>> {
        match self.read_key(COMPLETED_KEY)? {
            serde_json::Value::String(s) => {
                DateTime::parse_from_rfc3339(&s).ok().map(|t| t.to_utc())
            }
            _ => None,
        }
    }

    /// Set the completion marker, unless one is already present.
    /// Returns whether the marker was written (the "at most once per run"
    /// invariant is enforced here, at the store layer).
    pub fn set_completion_marker_if_absent(
        &self,
        at: DateTime<Utc>,
    ) -> Result<bool, StoreError> {
        if self.completion_marker().is_some() {
            return Ok(false);
        }
        let stamp = at.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        self.write_key(COMPLETED_KEY, &serde_json::json!(stamp))?;
        Ok(true)
    }

    pub fn clear_completion_marker(&self) {
        self.remove_key(COMPLETED_KEY);
    }

    // -----------------------------------------------------------------------
    // Route
    // -----------------------------------------------------------------------

    /// Load the route annotation. Missing or malformed data yields the
    /// empty route; scalar field values are coerced to strings.
    pub fn load_route(&self) -> Route {
        self.read_key(ROUTE_KEY)
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }

    /// Store the route, trimmed of surrounding whitespace.
    pub fn save_route(&self, route: &Route) -> Result<(), StoreError> {
        self.write_key(ROUTE_KEY, &serde_json::to_value(route.trimmed())?)
    }

    pub fn clear_route(&self) {
        self.remove_key(ROUTE_KEY);
    }

    // -----------------------------------------------------------------------

    /// Remove all three keys.
    pub fn clear_all(&self) {
        self.clear_selection();
        self.clear_completion_marker();
        self.clear_route();
    }
}

/// Write a file atomically: write to a temp file in the same directory,
/// then rename over the target.
fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
