// ============================================================================
// USE STORE HOOK - Estado global (búsqueda + favoritos)
// ============================================================================
// use_reducer sobre AppStore: cada mutación pasa por StoreAction y los
// favoritos se escriben en localStorage dentro del reducer
// ============================================================================

use yew::prelude::*;

use crate::models::{Favorites, ProductId};
use crate::stores::{AppStore, StoreAction};
use crate::utils::storage::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct UseStoreHandle {
    pub state: UseReducerHandle<AppStore>,
    pub set_search_query: Callback<String>,
    pub toggle_favorite: Callback<ProductId>,
}

impl UseStoreHandle {
    pub fn search_query(&self) -> &str {
        &self.state.search_query
    }

    pub fn favorites(&self) -> &Favorites {
        &self.state.favorites
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.state.is_favorite(id)
    }
}

/// Crea el store. Solo lo llama StoreProvider; el resto usa `use_store()`.
#[hook]
pub fn use_store_state() -> UseStoreHandle {
    let state = use_reducer(|| {
        let store = AppStore::load(&BrowserStorage);
        log::info!("✅ Favoritos cargados: {}", store.favorites.len());
        store
    });

    let set_search_query = {
        let dispatcher = state.dispatcher();
        Callback::from(move |query: String| {
            dispatcher.dispatch(StoreAction::SetSearchQuery(query));
        })
    };

    let toggle_favorite = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: ProductId| {
            log::info!("⭐ Toggle favorito: {}", id);
            dispatcher.dispatch(StoreAction::ToggleFavorite(id));
        })
    };

    UseStoreHandle {
        state,
        set_search_query,
        toggle_favorite,
    }
}

/// Store compartido por StoreProvider
#[hook]
pub fn use_store() -> UseStoreHandle {
    use_context::<UseStoreHandle>()
        .expect("use_store() debe usarse dentro de <StoreProvider>")
}
