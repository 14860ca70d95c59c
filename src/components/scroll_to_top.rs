use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::{apply_scroll, scroll_behavior, Route};

/// Sube la ventana al inicio en cada navegación (cambio de path o query)
#[function_component(ScrollToTop)]
pub fn scroll_to_top() -> Html {
    let location = use_location();
    let route = use_route::<Route>();
    let previous = use_mut_ref(|| None::<Route>);

    let location_key = location
        .map(|loc| format!("{}{}", loc.path(), loc.query_str()))
        .unwrap_or_default();

    use_effect_with(location_key, move |_| {
        let to = route.unwrap_or(Route::NotFound);
        let from = previous.borrow_mut().replace(to.clone());
        log::debug!("↑ Navegación a {} ({})", to.path(), to.name());
        apply_scroll(scroll_behavior(from.as_ref(), &to, None));
        || ()
    });

    Html::default()
}
