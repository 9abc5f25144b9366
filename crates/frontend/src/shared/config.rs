use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Порт бэкенда, хост берётся из адреса страницы
    pub port: u16,
    pub products_path: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    pub default_page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Через сколько миллисекунд скрывается уведомление об ошибке
    pub notification_timeout_ms: u32,
    pub placeholder_image_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            products_path: "/api/products".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: 5,
            page_size_options: vec![5, 10, 20],
            notification_timeout_ms: 6000,
            placeholder_image_url: String::new(),
        }
    }
}

/// Configuration embedded at build time from `crates/frontend/config.toml`
const DEFAULT_CONFIG: &str = include_str!("../../config.toml");

pub fn parse_config(raw: &str) -> Result<AppConfig, toml::de::Error> {
    toml::from_str(raw)
}

/// Load the embedded configuration, falling back to built-in defaults
pub fn load_config() -> AppConfig {
    match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Invalid embedded config.toml, using defaults: {}", e);
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.api.products_path, "/api/products");
        assert_eq!(config.catalog.default_page_size, 5);
        assert_eq!(config.catalog.page_size_options, vec![5, 10, 20]);
        assert_eq!(config.catalog.notification_timeout_ms, 6000);
        assert!(!config.catalog.placeholder_image_url.is_empty());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[catalog]\ndefault_page_size = 10\n").unwrap();
        assert_eq!(config.catalog.default_page_size, 10);
        assert_eq!(config.catalog.page_size_options, vec![5, 10, 20]);
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(parse_config("[api]\nport = \"three thousand\"\n").is_err());
    }
}
