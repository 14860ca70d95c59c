// ============================================================================
// STORE CONTEXT - Compartir el store entre componentes
// ============================================================================

use yew::prelude::*;
use crate::hooks::use_store::{use_store_state, UseStoreHandle};

/// Provider que envuelve la app: crea el store una sola vez y lo expone por Context
#[function_component(StoreProvider)]
pub fn store_provider(props: &StoreProviderProps) -> Html {
    let store = use_store_state();

    html! {
        <ContextProvider<UseStoreHandle> context={store}>
            {props.children.clone()}
        </ContextProvider<UseStoreHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct StoreProviderProps {
    pub children: Children,
}
