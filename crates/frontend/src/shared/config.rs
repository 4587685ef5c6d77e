//! Runtime configuration.
//!
//! Defaults are embedded in the bundle; a `config.toml` served next to
//! `index.html` overrides any subset of them. Loaded once before mount.

use contracts::shared::list_query::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS};
use once_cell::sync::OnceCell;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub session: SessionConfig,
    pub lists: ListsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// REST backend origin; empty means same host, port 3000
    pub base: String,
    /// Origin serving `/back/tipos/*` suggestion lists; empty means `base`
    pub backup_base: String,
    pub georef_base: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SessionConfig {
    pub storage_key: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListsConfig {
    pub page_sizes: Vec<usize>,
    pub default_page_size: usize,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base = ""
backup_base = ""
georef_base = "https://apis.datos.gob.ar/georef/api"

[session]
storage_key = "usuario"

[lists]
page_sizes = [5, 10, 25, 50]
default_page_size = 10
"#;

const CONFIG_URL: &str = "/config.toml";

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            backup_base: String::new(),
            georef_base: "https://apis.datos.gob.ar/georef/api".to_string(),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: "usuario".to_string(),
        }
    }
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            page_sizes: PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl AppConfig {
    /// Parses a TOML document; missing keys keep their defaults
    pub fn parse(contents: &str) -> anyhow::Result<Self> {
        let mut config: AppConfig = toml::from_str(contents)?;
        if config.lists.page_sizes.is_empty() {
            config.lists.page_sizes = PAGE_SIZE_OPTIONS.to_vec();
        }
        if !config.lists.page_sizes.contains(&config.lists.default_page_size) {
            config.lists.default_page_size = config.lists.page_sizes[0];
        }
        Ok(config)
    }

    pub fn embedded() -> Self {
        Self::parse(DEFAULT_CONFIG).unwrap_or_default()
    }
}

async fn fetch_remote() -> anyhow::Result<AppConfig> {
    let response = gloo_net::http::Request::get(CONFIG_URL).send().await?;
    if !response.ok() {
        anyhow::bail!("{} answered {}", CONFIG_URL, response.status());
    }
    let contents = response.text().await?;
    AppConfig::parse(&contents)
}

/// Loads `/config.toml` over the embedded defaults.
/// Any failure keeps the defaults.
pub async fn init() {
    let config = match fetch_remote().await {
        Ok(config) => {
            log::info!("Loaded config from {}", CONFIG_URL);
            config
        }
        Err(e) => {
            log::warn!("Using default embedded configuration: {}", e);
            AppConfig::embedded()
        }
    };
    if CONFIG.set(config).is_err() {
        log::warn!("configuration was already initialized");
    }
}

pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(AppConfig::embedded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = AppConfig::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.session.storage_key, "usuario");
        assert_eq!(config.lists.page_sizes, vec![5, 10, 25, 50]);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = AppConfig::parse(
            r#"
[api]
base = "https://api.example.com"
"#,
        )
        .unwrap();
        assert_eq!(config.api.base, "https://api.example.com");
        assert_eq!(config.api.georef_base, "https://apis.datos.gob.ar/georef/api");
        assert_eq!(config.lists.default_page_size, 10);
    }

    #[test]
    fn test_default_page_size_must_be_offered() {
        let config = AppConfig::parse(
            r#"
[lists]
page_sizes = [20, 40]
default_page_size = 10
"#,
        )
        .unwrap();
        assert_eq!(config.lists.default_page_size, 20);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(AppConfig::parse("[api\nbase = 1").is_err());
    }
}
