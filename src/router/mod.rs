// ============================================================================
// ROUTER - Tabla de rutas + render de páginas
// ============================================================================

pub mod routes;
pub mod scroll;

pub use routes::{Page, Route, RouteEntry, ROUTE_TABLE};
pub use scroll::{apply_scroll, scroll_behavior, ScrollPosition};

use yew::prelude::*;
use crate::components::pages::{
    CartPage, CategoryPage, FavoritesPage, HomePage, NotFoundPage, ProductPage,
};

/// Render de `Switch<Route>`: página de la ruta con sus parámetros como props
pub fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Product { id } => html! { <ProductPage {id} /> },
        Route::Cart => html! { <CartPage /> },
        Route::CategoryProducts { category_id, category_name } => html! {
            <CategoryPage category_id={Some(category_id)} category_name={Some(category_name)} />
        },
        Route::Favorites => html! { <FavoritesPage /> },
        Route::Category => html! { <CategoryPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
