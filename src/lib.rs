// ============================================================================
// STOREFRONT - SPA de la tienda (Yew + WASM)
// ============================================================================
// - router: tabla de rutas estática + scroll al inicio en cada navegación
// - stores: búsqueda + favoritos persistidos en localStorage
// - hooks: store compartido vía Context
// - components: shell de la app y páginas
// ============================================================================

pub mod components;
pub mod config;
pub mod hooks;
pub mod models;
pub mod router;
pub mod stores;
pub mod utils;
