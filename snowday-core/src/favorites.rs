//! Locally persisted list of previously checked city names.

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use std::{fs, path::PathBuf};

/// Ordered, deduplicated set of city names.
///
/// Implementations persist the full list on every successful insert. There
/// is deliberately no remove operation.
pub trait FavoritesStore {
    /// Current favorites, oldest first.
    fn list(&self) -> Result<Vec<String>>;

    /// Insert `name` if absent. Returns `true` when the list changed.
    fn add(&mut self, name: &str) -> Result<bool>;
}

/// File-backed store: one JSON array of strings, read once at open and
/// overwritten in full after every add. Single-process, single-writer.
#[derive(Debug)]
pub struct JsonFavorites {
    path: PathBuf,
    names: Vec<String>,
}

impl JsonFavorites {
    /// Open the store at its platform data location.
    pub fn open_default() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "snowday", "snowday-cli")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Self::open(dirs.data_dir().join("favorites.json"))
    }

    /// Load existing favorites from `path`, or start empty on first run.
    pub fn open(path: PathBuf) -> Result<Self> {
        let names = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read favorites file: {}", path.display()))?;

            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse favorites file: {}", path.display()))?
        } else {
            Vec::new()
        };

        Ok(Self { path, names })
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create favorites directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string(&self.names).context("Failed to serialize favorites")?;

        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write favorites file: {}", self.path.display()))?;

        Ok(())
    }
}

impl FavoritesStore for JsonFavorites {
    fn list(&self) -> Result<Vec<String>> {
        Ok(self.names.clone())
    }

    fn add(&mut self, name: &str) -> Result<bool> {
        if self.names.iter().any(|n| n == name) {
            return Ok(false);
        }

        self.names.push(name.to_string());
        self.persist()?;

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn starts_empty_on_first_run() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFavorites::open(dir.path().join("favorites.json")).expect("open");

        assert!(store.list().expect("list").is_empty());
    }

    #[test]
    fn add_appends_in_order() {
        let dir = tempdir().expect("tempdir");
        let mut store = JsonFavorites::open(dir.path().join("favorites.json")).expect("open");

        assert!(store.add("Shimla").expect("add"));
        assert!(store.add("Oslo").expect("add"));

        assert_eq!(store.list().expect("list"), vec!["Shimla", "Oslo"]);
    }

    #[test]
    fn duplicate_add_is_a_noop() {
        let dir = tempdir().expect("tempdir");
        let mut store = JsonFavorites::open(dir.path().join("favorites.json")).expect("open");

        assert!(store.add("Shimla").expect("first add"));
        assert!(!store.add("Shimla").expect("second add"));

        assert_eq!(store.list().expect("list"), vec!["Shimla"]);
    }

    #[test]
    fn favorites_survive_a_reopen() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("favorites.json");

        {
            let mut store = JsonFavorites::open(path.clone()).expect("open");
            store.add("Shimla").expect("add");
            store.add("Tromsø").expect("add");
        }

        let store = JsonFavorites::open(path).expect("reopen");
        assert_eq!(store.list().expect("list"), vec!["Shimla", "Tromsø"]);
    }

    #[test]
    fn file_holds_a_plain_json_array() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("favorites.json");

        let mut store = JsonFavorites::open(path.clone()).expect("open");
        store.add("Shimla").expect("add");

        let raw = std::fs::read_to_string(path).expect("read back");
        assert_eq!(raw, r#"["Shimla"]"#);
    }
}
