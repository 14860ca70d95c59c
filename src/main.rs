use storefront::components::App;
use storefront::config::CONFIG;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 {} starting...", CONFIG.app_title);

    yew::Renderer::<App>::new().render();
}
