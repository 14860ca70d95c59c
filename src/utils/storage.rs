// ============================================================================
// STORAGE - Persistencia clave/valor (localStorage en el navegador)
// ============================================================================

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Error de localStorage: {0}")]
    Storage(#[from] StorageError),
    #[error("Error serializando datos: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Almacenamiento no disponible: {0}")]
    Unavailable(String),
}

/// Backend de persistencia usado por el store. Los valores se guardan como JSON.
pub trait StorageBackend {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError>;

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;
}

/// localStorage del navegador vía gloo-storage
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BrowserStorage;

impl StorageBackend for BrowserStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        Ok(LocalStorage::get(key)?)
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        LocalStorage::set(key, value)?;
        Ok(())
    }
}

/// Almacenamiento en memoria con el mismo contrato que localStorage.
/// Los clones comparten las mismas entradas.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
    read_only: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarda texto tal cual, sin validar que sea JSON
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    /// Con `true`, toda escritura falla (cuota llena, modo privado...)
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl StorageBackend for MemoryStorage {
    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<T, StoreError> {
        let entries = self.entries.borrow();
        let raw = entries
            .get(key)
            .ok_or_else(|| StorageError::KeyNotFound(key.to_string()))?;
        Ok(serde_json::from_str(raw)?)
    }

    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        if self.read_only.get() {
            return Err(StoreError::Unavailable(format!("escritura rechazada para '{}'", key)));
        }
        let json = serde_json::to_string(value)?;
        self.entries.borrow_mut().insert(key.to_string(), json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_reported() {
        let storage = MemoryStorage::new();
        let result: Result<Vec<u32>, _> = storage.load("favorites");
        assert!(matches!(
            result,
            Err(StoreError::Storage(StorageError::KeyNotFound(ref key))) if key == "favorites"
        ));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        let storage = MemoryStorage::new();
        storage.insert_raw("favorites", "[1, 2");
        let result: Result<Vec<u32>, _> = storage.load("favorites");
        assert!(matches!(result, Err(StoreError::Serialization(_))));
    }

    #[test]
    fn save_writes_json_text() {
        let storage = MemoryStorage::new();
        storage.save("favorites", &vec!["a", "b"]).unwrap();
        assert_eq!(storage.raw("favorites").as_deref(), Some(r#"["a","b"]"#));

        let loaded: Vec<String> = storage.load("favorites").unwrap();
        assert_eq!(loaded, vec!["a", "b"]);
    }

    #[test]
    fn read_only_storage_rejects_writes() {
        let storage = MemoryStorage::new();
        storage.set_read_only(true);
        let result = storage.save("favorites", &vec![1]);
        assert!(matches!(result, Err(StoreError::Unavailable(_))));
        assert_eq!(storage.raw("favorites"), None);
    }

    #[test]
    fn clones_share_entries() {
        let storage = MemoryStorage::new();
        let other = storage.clone();
        storage.insert_raw("k", "1");
        assert_eq!(other.raw("k").as_deref(), Some("1"));
    }
}
