use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::use_store;
use crate::router::Route;
use super::SearchBar;

#[function_component(Header)]
pub fn header() -> Html {
    let store = use_store();
    let favorites_count = store.favorites().len();

    html! {
        <header class="app-header">
            <Link<Route> to={Route::Home} classes="app-title">
                {CONFIG.app_title.clone()}
            </Link<Route>>
            <nav class="app-nav">
                <Link<Route> to={Route::Category}>{"Categorías"}</Link<Route>>
                <Link<Route> to={Route::Favorites} classes="nav-favorites">
                    {"Favoritos"}
                    if favorites_count > 0 {
                        <span class="badge">{favorites_count}</span>
                    }
                </Link<Route>>
                <Link<Route> to={Route::Cart}>{"Carrito"}</Link<Route>>
            </nav>
            <SearchBar />
        </header>
    }
}
