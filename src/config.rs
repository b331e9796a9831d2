use reqwest::Url;
use thiserror::Error;
use tracing::info;

/// Environment variable holding the search API base address
pub const API_URL_VAR: &str = "YEG_API_URL";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("YEG_API_URL is not configured")]
    MissingApiUrl,
    #[error("YEG_API_URL is not a valid http(s) URL: {0}")]
    InvalidApiUrl(String),
}

/// Application configuration
/// In native builds: loads from the process environment (and a .env file in debug builds)
/// In web builds: uses the value baked in at compile time
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Root address of the search API, without a trailing slash
    pub api_base_url: String,
}

impl Config {
    /// Load configuration based on build target
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            #[cfg(debug_assertions)]
            {
                if dotenvy::dotenv().is_ok() {
                    tracing::debug!("Dev mode activated - loaded .env file");
                }
            }

            Self::from_lookup(|key| std::env::var(key).ok())
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self::from_lookup(|key| match key {
                API_URL_VAR => option_env!("YEG_API_URL").map(str::to_string),
                _ => None,
            })
        }
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// A missing or blank API address is an error; there is no local fallback.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(API_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiUrl)?;

        let url = Url::parse(&raw).map_err(|_| ConfigError::InvalidApiUrl(raw.clone()))?;
        if !matches!(url.scheme(), "http" | "https") || !url.has_host() {
            return Err(ConfigError::InvalidApiUrl(raw));
        }

        let api_base_url = raw.trim_end_matches('/').to_string();
        info!("Search API base URL: {}", api_base_url);

        Ok(Self { api_base_url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_missing_api_url_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert_eq!(result, Err(ConfigError::MissingApiUrl));
    }

    #[test]
    fn test_blank_api_url_is_treated_as_missing() {
        let result = Config::from_lookup(lookup_from(&[(API_URL_VAR, "   ")]));
        assert_eq!(result, Err(ConfigError::MissingApiUrl));
    }

    #[test]
    fn test_no_localhost_fallback() {
        let result = Config::from_lookup(lookup_from(&[("OTHER_VAR", "http://localhost:8000")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_api_url() {
        let result = Config::from_lookup(lookup_from(&[(API_URL_VAR, "not a url")]));
        assert_eq!(
            result,
            Err(ConfigError::InvalidApiUrl("not a url".to_string()))
        );

        let result = Config::from_lookup(lookup_from(&[(API_URL_VAR, "ftp://example.com")]));
        assert!(matches!(result, Err(ConfigError::InvalidApiUrl(_))));
    }

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config =
            Config::from_lookup(lookup_from(&[(API_URL_VAR, "http://localhost:8000/")])).unwrap();
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn test_base_url_with_path_prefix() {
        let config =
            Config::from_lookup(lookup_from(&[(API_URL_VAR, " https://api.example.com/v1 ")]))
                .unwrap();
        assert_eq!(config.api_base_url, "https://api.example.com/v1");
    }
}
