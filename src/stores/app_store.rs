// ============================================================================
// APP STORE - Búsqueda + favoritos (persistidos en localStorage)
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::config::CONFIG;
use crate::models::{Favorites, ProductId};
use crate::utils::storage::{BrowserStorage, StorageBackend, StoreError};

/// Mutaciones disponibles sobre el store
#[derive(Debug, Clone, PartialEq)]
pub enum StoreAction {
    SetSearchQuery(String),
    ToggleFavorite(ProductId),
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppStore {
    pub search_query: String,
    pub favorites: Favorites,
    storage_key: String,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            search_query: String::new(),
            favorites: Favorites::new(),
            storage_key: CONFIG.favorites_storage_key.clone(),
        }
    }
}

impl AppStore {
    /// Estado inicial: favoritos leídos de la clave configurada
    pub fn load<S: StorageBackend>(storage: &S) -> Self {
        Self::load_with_key(storage, &CONFIG.favorites_storage_key)
    }

    /// Cualquier fallo al leer (clave ausente, JSON roto, algo que no es un
    /// array) deja la lista vacía. Dentro del array, los elementos que no son
    /// número ni string se descartan y el resto de favoritos se conserva.
    pub fn load_with_key<S: StorageBackend>(storage: &S, key: &str) -> Self {
        let favorites = match storage.load::<Favorites>(key) {
            Ok(favorites) => favorites,
            Err(e) => {
                log::debug!("Favoritos no disponibles en '{}': {}", key, e);
                Favorites::new()
            }
        };

        Self {
            search_query: String::new(),
            favorites,
            storage_key: key.to_string(),
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Alterna `id` en favoritos y guarda la lista completa.
    ///
    /// El cambio en memoria se aplica antes de escribir: si la escritura falla
    /// el error se devuelve pero la lista ya refleja el toggle.
    pub fn toggle_favorite<S: StorageBackend>(
        &mut self,
        id: ProductId,
        storage: &S,
    ) -> Result<bool, StoreError> {
        let is_favorite = self.favorites.toggle(id);
        storage.save(&self.storage_key, &self.favorites)?;
        Ok(is_favorite)
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn apply<S: StorageBackend>(
        &mut self,
        action: StoreAction,
        storage: &S,
    ) -> Result<(), StoreError> {
        match action {
            StoreAction::SetSearchQuery(query) => {
                self.set_search_query(query);
                Ok(())
            }
            StoreAction::ToggleFavorite(id) => self.toggle_favorite(id, storage).map(|_| ()),
        }
    }
}

impl Reducible for AppStore {
    type Action = StoreAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if let Err(e) = next.apply(action, &BrowserStorage) {
            log::error!("❌ Error guardando favoritos en '{}': {}", next.storage_key, e);
        }
        Rc::new(next)
    }
}
