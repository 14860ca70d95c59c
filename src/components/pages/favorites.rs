use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::FavoriteButton;
use crate::hooks::use_store;
use crate::router::Route;

#[function_component(FavoritesPage)]
pub fn favorites_page() -> Html {
    let store = use_store();
    let favorites = store.favorites();

    html! {
        <section class="page page-favorites">
            <h1>{"Favoritos"}</h1>
            if favorites.is_empty() {
                <p class="empty-message">{"Todavía no tienes favoritos."}</p>
            } else {
                <ul class="favorites-list">
                    { for favorites.iter().map(|id| html! {
                        <li key={id.list_key()} class="favorite-item">
                            <Link<Route> to={Route::Product { id: id.to_route_param() }}>
                                {format!("Producto {}", id)}
                            </Link<Route>>
                            <FavoriteButton product_id={id.clone()} />
                        </li>
                    }) }
                </ul>
            }
        </section>
    }
}
