use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <section class="page page-not-found">
            <h1>{"Página no encontrada"}</h1>
            <Link<Route> to={Route::Home}>{"Volver al inicio"}</Link<Route>>
        </section>
    }
}
