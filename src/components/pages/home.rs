use yew::prelude::*;

use crate::components::SearchBar;
use crate::hooks::use_store;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let store = use_store();
    let query = store.search_query().trim().to_string();

    html! {
        <section class="page page-home">
            <h1>{"Inicio"}</h1>
            <SearchBar placeholder="¿Qué estás buscando?" />
            if !query.is_empty() {
                <p class="search-summary">{format!("Resultados para \"{}\"", query)}</p>
            }
        </section>
    }
}
