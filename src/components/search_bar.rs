use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_store;

#[derive(Properties, PartialEq, Clone)]
pub struct SearchBarProps {
    #[prop_or(AttrValue::Static("Buscar productos..."))]
    pub placeholder: AttrValue,
}

#[function_component(SearchBar)]
pub fn search_bar(props: &SearchBarProps) -> Html {
    let store = use_store();

    let on_input = {
        let set_search_query = store.set_search_query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_search_query.emit(input.value());
        })
    };

    html! {
        <input
            class="search-bar"
            type="search"
            placeholder={props.placeholder.clone()}
            value={store.search_query().to_string()}
            oninput={on_input}
        />
    }
}
