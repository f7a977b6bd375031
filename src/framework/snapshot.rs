//! File-backed JSON snapshots for actor stores.
//!
//! The persistence substrate is deliberately simple: each store serializes its
//! whole map to one JSON file after every mutation, and reads it back at
//! startup. That is enough for a small, single-writer store that must survive
//! process restarts, without pulling in an embedded database.

use std::collections::HashMap;
use std::fs;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::core::ActorEntity;

/// Errors raised while reading or writing a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot encode/decode error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// A JSON snapshot file for one entity store.
///
/// Entities are stored as a list of `(id, entity)` pairs so ids are not
/// constrained to JSON object keys.
pub struct JsonStore<T: ActorEntity> {
    path: PathBuf,
    _entity: PhantomData<fn() -> T>,
}

impl<T: ActorEntity> JsonStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _entity: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the snapshot back into a store map. A missing file yields an
    /// empty store.
    pub fn load(&self) -> Result<HashMap<T::Id, T>, SnapshotError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        let entries: Vec<(T::Id, T)> = serde_json::from_str(&raw)?;
        Ok(entries.into_iter().collect())
    }

    /// Writes the whole store to the snapshot file. The write goes through a
    /// temporary file and a rename so a crash mid-write never truncates the
    /// previous snapshot.
    pub fn save(&self, store: &HashMap<T::Id, T>) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let entries: Vec<(&T::Id, &T)> = store.iter().collect();
        let raw = serde_json::to_string_pretty(&entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, raw)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonStore<Product> = JsonStore::new(dir.path().join("products.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let store: JsonStore<Product> = JsonStore::new(dir.path().join("products.json"));

        let mut map = HashMap::new();
        let id = ProductId("prod_1".into());
        map.insert(id.clone(), Product::new(id.clone(), "Indigo Oxford Shirt", 1899.0, 45));
        store.save(&map).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        let product = &loaded[&id];
        assert_eq!(product.name, "Indigo Oxford Shirt");
        assert_eq!(product.stock, 45);
    }
}
