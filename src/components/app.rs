use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::CONFIG;
use crate::hooks::StoreProvider;
use crate::router::{switch, Route};
use super::{Header, ScrollToTop};

#[function_component(App)]
pub fn app() -> Html {
    let basename: Option<AttrValue> = CONFIG.router_basename().map(AttrValue::from);

    html! {
        <BrowserRouter {basename}>
            <StoreProvider>
                <ScrollToTop />
                <Header />
                <main class="page-container">
                    <Switch<Route> render={switch} />
                </main>
            </StoreProvider>
        </BrowserRouter>
    }
}
