//! Whole-file persistence for the items and locales stores.
//!
//! Both stores are read and written in one piece. Writes go to a temporary
//! sibling file that is renamed over the target, so an interrupted save
//! leaves the previous file intact.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;
use crate::item::ItemRecord;
use crate::locale::LocaleStore;

/// Default file name of the items store.
pub const ITEMS_FILE: &str = "items.json";

/// Default file name of the locales store.
pub const LOCALES_FILE: &str = "locales.json";

/// Load the items store. Fails with [`StoreError::NotFound`] if the file is missing.
pub fn load_items(path: &Path) -> Result<Vec<ItemRecord>, StoreError> {
    read_json(path)
}

/// Load the items store, or an empty sequence if it does not exist yet.
pub fn load_items_or_empty(path: &Path) -> Result<Vec<ItemRecord>, StoreError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_json(path)
}

pub fn save_items(path: &Path, items: &[ItemRecord]) -> Result<(), StoreError> {
    write_json(path, items)
}

/// Load the locales store. Fails with [`StoreError::NotFound`] if the file is missing.
pub fn load_locales(path: &Path) -> Result<LocaleStore, StoreError> {
    read_json(path)
}

/// Load the locales store, or a fresh one with the default languages.
pub fn load_locales_or_default(path: &Path) -> Result<LocaleStore, StoreError> {
    if !path.exists() {
        return Ok(LocaleStore::with_default_languages());
    }
    read_json(path)
}

pub fn save_locales(path: &Path, locales: &LocaleStore) -> Result<(), StoreError> {
    write_json(path, locales)
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };
    serde_json::from_str(&contents).map_err(|e| StoreError::json(path, e))
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), StoreError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
    }

    let mut serialized = serde_json::to_string_pretty(value).map_err(|e| StoreError::json(path, e))?;
    serialized.push('\n');

    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &serialized).map_err(|e| StoreError::io(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| StoreError::io(path, e))?;
    Ok(())
}
