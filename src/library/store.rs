use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use serde_json::{Map, Value};

use crate::config::SharedSettings;
use crate::error::StoreError;

/// Read access to the app-group key-value store.
///
/// The widget pipeline never writes through this trait; the main app replaces
/// each list wholesale.
pub trait SharedStore {
    /// Latest value stored under `key`, or `None` when the key is absent.
    fn value(&self, key: &str) -> Result<Option<Value>, StoreError>;
}

/// Shared preferences persisted as one JSON object inside the app-group
/// container.
///
/// Every read goes back to disk so it observes the most recent replacement.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: Option<PathBuf>,
}

impl JsonFileStore {
    /// Store at an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store resolved from settings. Without a container every key reads as
    /// absent.
    pub fn from_settings(settings: &SharedSettings) -> Self {
        Self {
            path: settings.preferences_path(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Replace the value stored under `key`, keeping the other keys.
    ///
    /// The file is rewritten through a sibling temp file and a rename so that
    /// readers never see a partial write.
    pub fn replace(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let path = self.path.as_deref().ok_or(StoreError::NoContainer)?;

        let mut root = match read_object(path)? {
            Some(map) => map,
            None => Map::new(),
        };
        root.insert(key.to_string(), value);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&Value::Object(root))?)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl SharedStore for JsonFileStore {
    fn value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(None);
        };
        Ok(read_object(path)?.and_then(|mut map| map.remove(key)))
    }
}

fn read_object(path: &Path) -> Result<Option<Map<String, Value>>, StoreError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    match serde_json::from_slice::<Value>(&bytes)? {
        Value::Object(map) => Ok(Some(map)),
        _ => Err(StoreError::NotAnObject),
    }
}

/// In-memory store, used for previews and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: impl Into<String>, value: Value) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value);
    }

    pub fn remove(&self, key: &str) {
        self.values
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

impl SharedStore for MemoryStore {
    fn value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let values = self.values.read().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }
}

impl<S: SharedStore + ?Sized> SharedStore for &S {
    fn value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).value(key)
    }
}

impl<S: SharedStore + ?Sized> SharedStore for std::sync::Arc<S> {
    fn value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        (**self).value(key)
    }
}
