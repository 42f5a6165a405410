//! CLI configuration.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::listing::SHOP_PAGE_SIZE;
use storefront_commerce::reviews::REVIEWS_PAGE_SIZE;
use storefront_commerce::selection::DEFAULT_LOW_STOCK_THRESHOLD;
use storefront_observability::{LogFormat, LogLevel};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Site identity.
    #[serde(default)]
    pub site: SiteConfig,

    /// Catalog presentation settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Render logging settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Environment-specific overrides.
    #[serde(default)]
    pub environments: HashMap<String, EnvironmentConfig>,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        Self::parse(&content, path.ends_with(".json"))
            .with_context(|| format!("Failed to parse config: {}", path))
    }

    /// Parse config text as TOML or JSON.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if json {
            Ok(serde_json::from_str(content)?)
        } else {
            Ok(toml::from_str(content)?)
        }
    }

    /// Get environment-specific config.
    pub fn for_environment(&self, env: &str) -> StorefrontConfig {
        let mut config = self.clone();

        if let Some(env_config) = self.environments.get(env) {
            if let Some(ref site) = env_config.site {
                config.site = site.clone();
            }
            if let Some(ref render) = env_config.render {
                config.render = render.clone();
            }
        }

        config
    }

    /// Problems that make the config unusable, then advisory warnings.
    pub fn validate(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if self.site.name.trim().is_empty() {
            errors.push("site.name is required".to_string());
        }
        let base_url = &self.site.base_url;
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            errors.push(format!(
                "site.base_url must be an http(s) URL, got '{}'",
                self.site.base_url
            ));
        }
        if self.site.base_url.ends_with('/') {
            warnings.push("site.base_url should not end with '/'".to_string());
        }
        match self.site.support_email.as_deref() {
            Some(email) if !email.contains('@') => {
                errors.push(format!("site.support_email '{}' is not an address", email));
            }
            None => warnings
                .push("site.support_email is not set; order help links are disabled".to_string()),
            _ => {}
        }
        if self.catalog.page_size < 1 {
            errors.push("catalog.page_size must be at least 1".to_string());
        }
        if self.catalog.reviews_page_size < 1 {
            errors.push("catalog.reviews_page_size must be at least 1".to_string());
        }
        if self.catalog.low_stock_threshold < 0 {
            errors.push("catalog.low_stock_threshold must not be negative".to_string());
        }

        (errors, warnings)
    }
}

/// Site identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Store name shown in page titles.
    #[serde(default = "default_site_name")]
    pub name: String,

    /// Public origin used to build product URLs.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Address for order help links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_email: Option<String>,
}

fn default_site_name() -> String {
    "Storefront".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            support_email: None,
        }
    }
}

/// Catalog presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Products per shop page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Reviews per page on the product page.
    #[serde(default = "default_reviews_page_size")]
    pub reviews_page_size: u32,

    /// Stock level below which "Only N remaining" is shown.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: i64,
}

fn default_page_size() -> i64 {
    SHOP_PAGE_SIZE
}

fn default_reviews_page_size() -> u32 {
    REVIEWS_PAGE_SIZE
}

fn default_low_stock_threshold() -> i64 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            reviews_page_size: default_reviews_page_size(),
            low_stock_threshold: default_low_stock_threshold(),
        }
    }
}

/// Render logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    #[serde(default = "default_min_level")]
    pub min_level: LogLevel,
}

fn default_log_format() -> LogFormat {
    LogFormat::Human
}

fn default_min_level() -> LogLevel {
    LogLevel::Info
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            log_format: default_log_format(),
            min_level: default_min_level(),
        }
    }
}

/// Environment-specific configuration overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site: Option<SiteConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<RenderConfig>,
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# Storefront configuration

[site]
name = "{name}"
base_url = "http://localhost:3000"
# support_email = "support@example.com"

[catalog]
page_size = 12
reviews_page_size = 2
low_stock_threshold = 10

[render]
log_format = "human"
min_level = "info"

[environments.production.site]
name = "{name}"
base_url = "https://www.example.com"

[environments.production.render]
log_format = "json"
min_level = "warn"
"#,
        name = name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_round_trips_through_toml() {
        let config =
            StorefrontConfig::parse(&generate_default_config("Green Thumb"), false).unwrap();

        assert_eq!(config.site.name, "Green Thumb");
        assert_eq!(config.catalog.page_size, 12);
        assert_eq!(config.catalog.reviews_page_size, 2);
        assert_eq!(config.catalog.low_stock_threshold, 10);
        assert_eq!(config.render.log_format, LogFormat::Human);
        assert!(config.environments.contains_key("production"));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = StorefrontConfig::parse("[site]\nname = \"Shop\"\n", false).unwrap();
        assert_eq!(config.site.base_url, "http://localhost:3000");
        assert_eq!(config.catalog.low_stock_threshold, DEFAULT_LOW_STOCK_THRESHOLD);
        assert_eq!(config.render.min_level, LogLevel::Info);
    }

    #[test]
    fn test_for_environment_overrides_site_and_render() {
        let config = StorefrontConfig::parse(&generate_default_config("Shop"), false).unwrap();

        let prod = config.for_environment("production");
        assert_eq!(prod.site.base_url, "https://www.example.com");
        assert_eq!(prod.render.log_format, LogFormat::Json);
        assert_eq!(prod.render.min_level, LogLevel::Warn);

        let other = config.for_environment("staging");
        assert_eq!(other.site.base_url, "http://localhost:3000");
    }

    #[test]
    fn test_json_config() {
        let config = StorefrontConfig::parse(
            r#"{"site": {"name": "Shop", "support_email": "help@shop.test"}, "render": {"log_format": "json"}}"#,
            true,
        )
        .unwrap();
        assert_eq!(config.site.support_email.as_deref(), Some("help@shop.test"));
        assert_eq!(config.render.log_format, LogFormat::Json);
    }

    #[test]
    fn test_validate() {
        let mut config = StorefrontConfig::default();
        config.site.support_email = Some("help@shop.test".into());
        let (errors, warnings) = config.validate();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());

        config.site.base_url = "shop.test".into();
        config.catalog.page_size = 0;
        config.site.support_email = None;
        let (errors, warnings) = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(warnings.len(), 1);
    }
}
