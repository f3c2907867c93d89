//! Rooster configuration module
//! Paging limits applied by handlers before a store is queried

use std::env;
use thiserror::Error;
use tracing::info;

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MAX_PAGE: u32 = 10_000;
const MAX_PAGE_SIZE: usize = 100;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoosterConfig {
    /// Entries returned per `get_all` page
    pub page_size: usize,
    /// Highest page number a caller may request
    pub max_page: u32,
}

impl Default for RoosterConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page: DEFAULT_MAX_PAGE,
        }
    }
}

impl RoosterConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("ROOSTER_PAGE_SIZE") {
            config.page_size = raw.trim().parse::<usize>().map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid page size: {} ({})", raw, e))
            })?;
        }

        if let Some(raw) = lookup("ROOSTER_MAX_PAGE") {
            config.max_page = raw.trim().parse::<u32>().map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid max page: {} ({})", raw, e))
            })?;
        }

        if config.page_size < 1 || config.page_size > MAX_PAGE_SIZE {
            return Err(ConfigError::InvalidConfig(format!(
                "Page size must be between 1 and {}",
                MAX_PAGE_SIZE
            )));
        }

        if config.max_page == 0 {
            return Err(ConfigError::InvalidConfig(
                "Max page must be at least 1".to_string(),
            ));
        }

        info!(
            "Rooster config loaded: page_size={}, max_page={}",
            config.page_size, config.max_page
        );

        Ok(config)
    }
}
