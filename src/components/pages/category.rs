use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CategoryPageProps {
    /// `:category_id`, solo en /category/:category_id/:category_name
    #[prop_or_default]
    pub category_id: Option<String>,
    #[prop_or_default]
    pub category_name: Option<String>,
}

/// Índice de categorías o listado de una categoría concreta
#[function_component(CategoryPage)]
pub fn category_page(props: &CategoryPageProps) -> Html {
    match (&props.category_id, &props.category_name) {
        (Some(id), Some(name)) => html! {
            <section class="page page-category" data-category-id={id.clone()}>
                <h1>{name.clone()}</h1>
            </section>
        },
        _ => html! {
            <section class="page page-category">
                <h1>{"Categorías"}</h1>
            </section>
        },
    }
}
