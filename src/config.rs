use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use std::time::Duration;

use crate::RecipeError;

/// Legacy variable holding the API base URL
pub const LEGACY_URL_VAR: &str = "RECIPE_URL";
/// Legacy variable holding the API key
pub const LEGACY_API_KEY_VAR: &str = "RECIPE_API_KEY";

/// Settings for talking to the recipe API
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL of the recipe API (e.g. "https://api.spoonacular.com")
    #[serde(default)]
    pub base_url: Option<String>,
    /// Static API key appended to every request
    #[serde(default)]
    pub api_key: Option<String>,
    /// Number of results requested per search
    #[serde(default = "default_result_limit")]
    pub result_limit: u32,
    /// Request timeout in seconds. Requests never time out when unset.
    #[serde(default)]
    pub timeout: Option<u64>,
    /// Timeout set in code. Takes precedence over `timeout` and keeps
    /// sub-second precision.
    #[serde(skip)]
    pub timeout_override: Option<Duration>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            api_key: None,
            result_limit: default_result_limit(),
            timeout: None,
            timeout_override: None,
        }
    }
}

/// Configuration with every required setting present
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub api_key: String,
    pub result_limit: u32,
    pub timeout: Option<Duration>,
}

fn default_result_limit() -> u32 {
    12
}

impl ApiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_FINDER__ prefix
    /// 2. recipe-finder.toml file in current directory
    /// 3. RECIPE_URL / RECIPE_API_KEY, only for settings still missing
    /// 4. Default values
    ///
    /// Environment variable format: RECIPE_FINDER__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        load_config().map(|config| config.with_legacy_env(|name| std::env::var(name).ok()))
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(toml: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Fill missing base URL and API key from the legacy variables
    pub fn with_legacy_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.base_url.is_none() {
            self.base_url = lookup(LEGACY_URL_VAR);
        }
        if self.api_key.is_none() {
            self.api_key = lookup(LEGACY_API_KEY_VAR);
        }
        self
    }

    /// Overlay explicitly provided settings; `Some` values win
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        api_key: Option<String>,
        result_limit: Option<u32>,
        timeout: Option<Duration>,
    ) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        if api_key.is_some() {
            self.api_key = api_key;
        }
        if let Some(limit) = result_limit {
            self.result_limit = limit;
        }
        if timeout.is_some() {
            self.timeout_override = timeout;
        }
        self
    }

    /// Check that the required settings are present
    pub fn resolve(self) -> Result<ResolvedConfig, RecipeError> {
        let base_url = self
            .base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(RecipeError::MissingSetting("base_url"))?;
        let api_key = self
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(RecipeError::MissingSetting("api_key"))?;

        Ok(ResolvedConfig {
            base_url,
            api_key,
            result_limit: self.result_limit,
            timeout: self
                .timeout_override
                .or_else(|| self.timeout.map(Duration::from_secs)),
        })
    }
}

impl ResolvedConfig {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            result_limit: default_result_limit(),
            timeout: None,
        }
    }
}

/// Load configuration from file and environment variables
///
/// See [`ApiConfig::load`] for the source priority. Legacy variables are
/// not consulted here.
pub fn load_config() -> Result<ApiConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name("recipe-finder").required(false))
        .add_source(
            Environment::with_prefix("RECIPE_FINDER")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_values() {
        let config = ApiConfig::default();
        assert_eq!(config.result_limit, 12);
        assert!(config.timeout.is_none());
        assert!(config.base_url.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_from_toml_str() {
        let config = ApiConfig::from_toml_str(
            r#"
            base_url = "https://api.example.com"
            api_key = "secret"
            timeout = 10
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url.as_deref(), Some("https://api.example.com"));
        assert_eq!(config.api_key.as_deref(), Some("secret"));
        assert_eq!(config.result_limit, 12);
        assert_eq!(config.timeout, Some(10));
    }

    #[test]
    fn test_legacy_env_only_fills_missing_settings() {
        let vars: HashMap<&str, &str> = [
            (LEGACY_URL_VAR, "https://legacy.example.com"),
            (LEGACY_API_KEY_VAR, "legacy-key"),
        ]
        .into_iter()
        .collect();
        let lookup = |name: &str| vars.get(name).map(|v| v.to_string());

        let config = ApiConfig {
            api_key: Some("configured-key".to_string()),
            ..Default::default()
        }
        .with_legacy_env(lookup);

        assert_eq!(config.base_url.as_deref(), Some("https://legacy.example.com"));
        assert_eq!(config.api_key.as_deref(), Some("configured-key"));
    }

    #[test]
    fn test_overrides_win() {
        let config = ApiConfig {
            base_url: Some("https://file.example.com".to_string()),
            api_key: Some("file-key".to_string()),
            ..Default::default()
        }
        .with_overrides(
            None,
            Some("explicit-key".to_string()),
            Some(5),
            Some(Duration::from_secs(3)),
        );

        assert_eq!(config.base_url.as_deref(), Some("https://file.example.com"));
        assert_eq!(config.api_key.as_deref(), Some("explicit-key"));
        assert_eq!(config.result_limit, 5);
        assert_eq!(config.timeout_override, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_resolve_requires_base_url_and_key() {
        let err = ApiConfig::default().resolve().unwrap_err();
        assert!(matches!(err, RecipeError::MissingSetting("base_url")));

        let err = ApiConfig {
            base_url: Some("https://api.example.com".to_string()),
            api_key: Some("  ".to_string()),
            ..Default::default()
        }
        .resolve()
        .unwrap_err();
        assert!(matches!(err, RecipeError::MissingSetting("api_key")));
    }

    #[test]
    fn test_resolve_converts_timeout() {
        let resolved = ApiConfig {
            base_url: Some("https://api.example.com".to_string()),
            api_key: Some("key".to_string()),
            result_limit: 3,
            timeout: Some(20),
            ..Default::default()
        }
        .resolve()
        .unwrap();

        assert_eq!(resolved.result_limit, 3);
        assert_eq!(resolved.timeout, Some(Duration::from_secs(20)));
    }

    #[test]
    fn test_sub_second_override_is_kept() {
        let resolved = ApiConfig {
            base_url: Some("https://api.example.com".to_string()),
            api_key: Some("key".to_string()),
            timeout: Some(20),
            ..Default::default()
        }
        .with_overrides(None, None, None, Some(Duration::from_millis(1500)))
        .resolve()
        .unwrap();

        assert_eq!(resolved.timeout, Some(Duration::from_millis(1500)));
    }
}
