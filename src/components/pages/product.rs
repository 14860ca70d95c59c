use yew::prelude::*;

use crate::components::FavoriteButton;
use crate::models::ProductId;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductPageProps {
    /// Parámetro `:id` de la ruta
    pub id: AttrValue,
}

#[function_component(ProductPage)]
pub fn product_page(props: &ProductPageProps) -> Html {
    let product_id = ProductId::from_route_param(&props.id);

    html! {
        <section class="page page-product" data-product-id={props.id.clone()}>
            <div class="product-header">
                <h1>{format!("Producto {}", props.id)}</h1>
                <FavoriteButton {product_id} />
            </div>
        </section>
    }
}
