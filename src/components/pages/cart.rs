use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

// El contenido del carrito lo gestiona el módulo de carrito de la tienda
#[function_component(CartPage)]
pub fn cart_page() -> Html {
    html! {
        <section class="page page-cart">
            <h1>{"Carrito"}</h1>
            <p class="empty-message">{"Tu carrito está vacío."}</p>
            <Link<Route> to={Route::Home}>{"Seguir comprando"}</Link<Route>>
        </section>
    }
}
