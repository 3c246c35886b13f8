//! Content factory for loading towers and configuration from a data directory.

use std::path::{Path, PathBuf};

use tower_core::{GameConfig, Tower};

use crate::io::ImportResult;
use crate::loaders::{ConfigLoader, LoadResult, TowerLoader};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── towers/
///     ├── sample.json
///     └── ...
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`, or the defaults when the
    /// file does not exist.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Import `towers/{tower_name}.json`.
    pub fn load_tower(&self, tower_name: &str) -> LoadResult<ImportResult> {
        TowerLoader::load(&self.tower_path(tower_name))
    }

    /// Import `towers/{tower_name}.json`, failing on any import error.
    pub fn load_tower_strict(&self, tower_name: &str) -> LoadResult<Tower> {
        TowerLoader::load_strict(&self.tower_path(tower_name))
    }

    /// Names of the towers in `towers/`, sorted.
    pub fn tower_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("towers");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to read directory {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|extension| extension == "json")
                && let Some(stem) = path.file_stem().and_then(|stem| stem.to_str())
            {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    fn tower_path(&self, tower_name: &str) -> PathBuf {
        self.data_dir
            .join("towers")
            .join(format!("{}.json", tower_name))
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
