//! Tower record loader.

use std::path::Path;

use tower_core::Tower;

use crate::io::{ImportResult, export_tower_string, import_tower};
use crate::loaders::{LoadResult, read_file};

/// Loader for tower records stored as JSON files.
pub struct TowerLoader;

impl TowerLoader {
    /// Imports the tower at `path`.
    ///
    /// Only an unreadable file is an `Err`; problems inside the record are
    /// returned in [`ImportResult::errors`].
    pub fn load(path: &Path) -> LoadResult<ImportResult> {
        let content = read_file(path)?;
        let result = import_tower(&content);
        tracing::debug!(
            path = %path.display(),
            tower = %result.tower.name,
            errors = result.errors.len(),
            "loaded tower record"
        );
        Ok(result)
    }

    /// Like [`TowerLoader::load`] but any import error fails the load.
    pub fn load_strict(path: &Path) -> LoadResult<Tower> {
        let result = Self::load(path)?;
        if !result.is_clean() {
            anyhow::bail!(
                "Tower {} has {} error(s):\n  {}",
                path.display(),
                result.errors.len(),
                result.errors.join("\n  ")
            );
        }
        Ok(result.tower)
    }

    /// Writes `tower` to `path` as a pretty-printed record.
    pub fn save(tower: &Tower, path: &Path) -> LoadResult<()> {
        std::fs::write(path, export_tower_string(tower))
            .map_err(|e| anyhow::anyhow!("Failed to write file {}: {}", path.display(), e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let error = TowerLoader::load(&dir.path().join("absent.json")).expect_err("no file");
        assert!(error.to_string().starts_with("Failed to read file"));
    }

    #[test]
    fn strict_load_rejects_imperfect_records() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("empty.json");
        TowerLoader::save(&Tower::new("Bare"), &path).expect("write tower");

        let loaded = TowerLoader::load(&path).expect("file is readable");
        assert_eq!(loaded.tower.name, "Bare");
        assert_eq!(loaded.errors, vec!["Tower has no starting position".to_owned()]);

        let error = TowerLoader::load_strict(&path).expect_err("no starting position");
        assert!(error.to_string().contains("Tower has no starting position"));
    }
}
