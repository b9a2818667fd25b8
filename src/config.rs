use std::env;

use tracing::{info, warn};
use url::Url;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3/";
pub const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/";

/// Runtime configuration, read once from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer token for TMDB. `None` puts every screen into the "token required" state.
    pub api_token: Option<String>,
    pub api_base: Url,
    pub image_base: Url,
}

impl Config {
    /// Loads `.env` (if any) and reads the TMDB settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {:?}", path),
            Err(e) => warn!("No .env file loaded ({}) - relying on environment", e),
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_token = ["TMDB_API_TOKEN", "TMDB_API_KEY"]
            .into_iter()
            .filter_map(&lookup)
            .map(|token| token.trim().to_string())
            .find(|token| !token.is_empty());

        if api_token.is_none() {
            warn!("TMDB_API_TOKEN is not set; movie data cannot be fetched");
        }

        let api_base = parse_base(
            "TMDB_BASE_URL",
            lookup("TMDB_BASE_URL").as_deref().unwrap_or(DEFAULT_API_BASE),
        )?;
        let image_base = parse_base(
            "TMDB_IMAGE_BASE",
            lookup("TMDB_IMAGE_BASE")
                .as_deref()
                .unwrap_or(DEFAULT_IMAGE_BASE),
        )?;

        Ok(Self {
            api_token,
            api_base,
            image_base,
        })
    }
}

// Url::join drops the last segment unless the base ends with a slash.
fn parse_base(name: &'static str, raw: &str) -> Result<Url, ConfigError> {
    let with_slash = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&with_slash).map_err(|source| ConfigError::InvalidUrl { name, source })
}
