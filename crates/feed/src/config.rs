// ABOUTME: Feed build configuration with serde defaults and a fluent ConfigBuilder.
// ABOUTME: Config is immutable for the duration of a single build call.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Format, Quality, Sorting};

/// Default number of episodes kept per feed.
pub const DEFAULT_PAGE_SIZE: usize = 50;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Errors raised when a Config cannot be used for a build.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("config: url is required")]
    MissingUrl,

    #[error("config: page_size must be greater than zero")]
    ZeroPageSize,
}

/// Settings for one feed build.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default)]
    pub format: Format,
    #[serde(default)]
    pub quality: Quality,
    #[serde(default)]
    pub playlist_sort: Sorting,
    #[serde(default)]
    pub cover_art_quality: Quality,
    /// Opaque provider-specific settings, carried but not interpreted.
    #[serde(default)]
    pub extras: HashMap<String, String>,
}

impl Config {
    /// Start a builder for the given source URL.
    pub fn builder(url: impl Into<String>) -> ConfigBuilder {
        ConfigBuilder::new(url)
    }

    /// Checks the fields a build cannot proceed without.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::MissingUrl);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(())
    }
}

/// Fluent constructor for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigBuilder {
    cfg: Config,
}

impl ConfigBuilder {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            cfg: Config {
                url: url.into(),
                page_size: DEFAULT_PAGE_SIZE,
                format: Format::default(),
                quality: Quality::default(),
                playlist_sort: Sorting::default(),
                cover_art_quality: Quality::default(),
                extras: HashMap::new(),
            },
        }
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.cfg.page_size = page_size;
        self
    }

    pub fn format(mut self, format: Format) -> Self {
        self.cfg.format = format;
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.cfg.quality = quality;
        self
    }

    pub fn playlist_sort(mut self, sort: Sorting) -> Self {
        self.cfg.playlist_sort = sort;
        self
    }

    pub fn cover_art_quality(mut self, quality: Quality) -> Self {
        self.cfg.cover_art_quality = quality;
        self
    }

    /// Add a provider-specific extra.
    pub fn extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.cfg.extras.insert(key.into(), value.into());
        self
    }

    pub fn build(self) -> Config {
        self.cfg
    }
}
