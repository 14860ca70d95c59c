// ============================================================================
// CONFIG - Configuración de la tienda en tiempo de compilación
// ============================================================================
// Los valores llegan vía option_env! (build.rs copia las entradas de .env)
// ============================================================================

use serde::{Deserialize, Serialize};
use crate::utils::constants::{DEFAULT_APP_TITLE, DEFAULT_BASE_URL, DEFAULT_FAVORITES_KEY};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_title: String,
    /// Prefijo bajo el que se monta el router (equivale al BASE_URL del bundler)
    pub base_url: String,
    /// Clave de localStorage donde se guardan los favoritos
    pub favorites_storage_key: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: DEFAULT_APP_TITLE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            favorites_storage_key: DEFAULT_FAVORITES_KEY.to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self {
            app_title: option_env!("APP_TITLE")
                .unwrap_or(DEFAULT_APP_TITLE).to_string(),
            base_url: option_env!("BASE_URL")
                .unwrap_or(DEFAULT_BASE_URL).to_string(),
            favorites_storage_key: option_env!("FAVORITES_STORAGE_KEY")
                .filter(|key| !key.is_empty())
                .unwrap_or(DEFAULT_FAVORITES_KEY).to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true").parse().unwrap_or(true),
        }
    }

    /// Basename para BrowserRouter. None cuando la app vive en la raíz.
    pub fn router_basename(&self) -> Option<String> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return None;
        }
        if trimmed.starts_with('/') {
            Some(trimmed.to_string())
        } else {
            Some(format!("/{}", trimmed))
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_favorites_key() {
        let config = AppConfig::default();
        assert_eq!(config.favorites_storage_key, "favorites");
        assert_eq!(config.base_url, "/");
        assert!(config.enable_logging);
    }

    #[test]
    fn root_base_url_has_no_basename() {
        let config = AppConfig::default();
        assert_eq!(config.router_basename(), None);

        let empty = AppConfig { base_url: String::new(), ..AppConfig::default() };
        assert_eq!(empty.router_basename(), None);
    }

    #[test]
    fn nested_base_url_is_normalized() {
        let config = AppConfig { base_url: "shop/".to_string(), ..AppConfig::default() };
        assert_eq!(config.router_basename().as_deref(), Some("/shop"));

        let config = AppConfig { base_url: "/store/app/".to_string(), ..AppConfig::default() };
        assert_eq!(config.router_basename().as_deref(), Some("/store/app"));
    }

    #[test]
    fn disabled_logging_lowers_level() {
        let config = AppConfig { enable_logging: false, ..AppConfig::default() };
        assert_eq!(config.log_level(), log::Level::Warn);
        assert_eq!(AppConfig::default().log_level(), log::Level::Info);
    }
}
