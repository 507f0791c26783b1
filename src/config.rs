// src/config.rs

use crate::domain::filter::{FilterDefaults, FilterSpec};
use crate::domain::geo::GeoBounds;
use crate::domain::{CatalogError, Listing, PropertyStore};
use serde::Deserialize;
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

/// Path of an optional JSON config file.
pub const CONFIG_ENV: &str = "ECOESTATE_CONFIG";
/// Overrides `addr`.
pub const ADDR_ENV: &str = "ECOESTATE_ADDR";
/// Overrides `dataset`.
pub const DATASET_ENV: &str = "ECOESTATE_DATASET";

/// Listings shipped with the binary, used when no dataset path is configured.
const BUILTIN_DATASET: &str = include_str!("../data/listings.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        source: serde_json::Error,
    },
    #[error("invalid bind address '{0}'")]
    InvalidAddr(String),
    #[error("max_workers must be at least 1")]
    NoWorkers,
    #[error("filter {0} must be a positive number")]
    InvalidStep(&'static str),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Startup configuration. Every field has a default, so an empty JSON object
/// (or no config file at all) is valid.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub addr: SocketAddr,
    pub max_workers: usize,
    /// JSON file with the listing collection. `None` uses the built-in dataset.
    pub dataset: Option<PathBuf>,
    pub bounds: GeoBounds,
    pub filter: FilterDefaults,
    /// Suffix used by price formatting, e.g. "12.5 million RUB".
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_workers: 8,
            dataset: None,
            bounds: GeoBounds::default(),
            filter: FilterDefaults::default(),
            currency: "RUB".to_string(),
        }
    }
}

impl AppConfig {
    /// Reads config from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds config from a variable lookup: the file named by `ECOESTATE_CONFIG`
    /// first, then single-value overrides.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match var(CONFIG_ENV) {
            Some(path) => {
                let path = PathBuf::from(path);
                let raw = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                info!(path = %path.display(), "loading config file");
                Self::from_json(&raw)?
            }
            None => Self::default(),
        };

        if let Some(addr) = var(ADDR_ENV) {
            config.addr = addr
                .parse()
                .map_err(|_| ConfigError::InvalidAddr(addr.clone()))?;
        }
        if let Some(path) = var(DATASET_ENV) {
            config.dataset = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
            what: "config",
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        self.bounds.validate()?;

        // the reset spec has to be a valid filter, or the catalog can never recover
        FilterSpec::reset(&self.filter).validate()?;
        if self.filter.price_step == 0 {
            return Err(ConfigError::InvalidStep("price_step"));
        }
        if !(self.filter.area_step.is_finite() && self.filter.area_step > 0.0) {
            return Err(ConfigError::InvalidStep("area_step"));
        }
        Ok(())
    }

    /// Loads and validates the listing collection.
    pub fn load_store(&self) -> Result<PropertyStore, ConfigError> {
        let store = match &self.dataset {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.clone(),
                    source,
                })?;
                parse_dataset(&raw)?
            }
            None => parse_dataset(BUILTIN_DATASET)?,
        };

        info!(listings = store.len(), "catalog loaded");
        Ok(store)
    }
}

pub fn parse_dataset(raw: &str) -> Result<PropertyStore, ConfigError> {
    let listings: Vec<Listing> = serde_json::from_str(raw).map_err(|source| ConfigError::Parse {
        what: "dataset",
        source,
    })?;
    Ok(PropertyStore::new(listings)?)
}
