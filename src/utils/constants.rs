// Valores por defecto de la configuración

pub const DEFAULT_APP_TITLE: &str = "Storefront";
pub const DEFAULT_BASE_URL: &str = "/";
pub const DEFAULT_FAVORITES_KEY: &str = "favorites";
