use yew::prelude::*;

use crate::hooks::use_store;
use crate::models::ProductId;

#[derive(Properties, PartialEq, Clone)]
pub struct FavoriteButtonProps {
    pub product_id: ProductId,
}

#[function_component(FavoriteButton)]
pub fn favorite_button(props: &FavoriteButtonProps) -> Html {
    let store = use_store();
    let active = store.is_favorite(&props.product_id);

    let on_click = {
        let toggle_favorite = store.toggle_favorite.clone();
        let id = props.product_id.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            toggle_favorite.emit(id.clone());
        })
    };

    let label = if active { "Quitar de favoritos" } else { "Añadir a favoritos" };

    html! {
        <button
            class={classes!("btn-favorite", active.then_some("active"))}
            aria-pressed={active.to_string()}
            title={label}
            onclick={on_click}
        >
            { if active { "♥" } else { "♡" } }
        </button>
    }
}
