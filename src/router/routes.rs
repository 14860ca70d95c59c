// ============================================================================
// ROUTES - Tabla estática de rutas de la tienda
// ============================================================================

use yew_router::prelude::*;

/// Página que renderiza cada ruta
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Product,
    Cart,
    Category,
    Favorites,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub name: &'static str,
    pub page: Page,
}

/// Rutas en orden de declaración. Los paths son disjuntos.
pub const ROUTE_TABLE: &[RouteEntry] = &[
    RouteEntry { path: "/", name: "home", page: Page::Home },
    RouteEntry { path: "/product/:id", name: "product", page: Page::Product },
    RouteEntry { path: "/cart", name: "cart", page: Page::Cart },
    RouteEntry {
        path: "/category/:category_id/:category_name",
        name: "categorypr",
        page: Page::Category,
    },
    // El nombre histórico de esta ruta es "ProductDetail" aunque muestra favoritos
    RouteEntry { path: "/favorites", name: "ProductDetail", page: Page::Favorites },
    RouteEntry { path: "/category", name: "category", page: Page::Category },
];

#[derive(Debug, Clone, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/product/:id")]
    Product { id: String },
    #[at("/cart")]
    Cart,
    #[at("/category/:category_id/:category_name")]
    CategoryProducts { category_id: String, category_name: String },
    #[at("/favorites")]
    Favorites,
    #[at("/category")]
    Category,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Resuelve un path a exactamente una ruta (NotFound si no hay coincidencia)
    pub fn resolve(path: &str) -> Route {
        Route::recognize(path).unwrap_or(Route::NotFound)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Product { .. } => "product",
            Route::Cart => "cart",
            Route::CategoryProducts { .. } => "categorypr",
            Route::Favorites => "ProductDetail",
            Route::Category => "category",
            Route::NotFound => "not-found",
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::Home => Page::Home,
            Route::Product { .. } => Page::Product,
            Route::Cart => Page::Cart,
            Route::CategoryProducts { .. } | Route::Category => Page::Category,
            Route::Favorites => Page::Favorites,
            Route::NotFound => Page::NotFound,
        }
    }

    pub fn path(&self) -> String {
        self.to_path()
    }
}
