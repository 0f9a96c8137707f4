// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Configuration utils.

use crate::catalog::{SortField, SortOrder, SortState};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Encountered when the configuration cannot be loaded.
#[derive(Error, Debug)]
#[error("Configuration Error: {0}")]
pub struct ConfigError(#[from] toml::de::Error);

/// Default configuration TOML string.
const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

/// Initial sort direction used when the configuration does not set one.
const FALLBACK_SORT: SortState = SortState {
    field: SortField::Artist,
    order: SortOrder::Ascending,
};

/// Debounce window used when the configuration does not set one, in milliseconds.
const FALLBACK_DEBOUNCE_MS: u64 = 300;

/// Library file path used when the configuration does not set one.
const FALLBACK_DATA_PATH: &str = "assets/data/library.json";

/// Represents a piece of configuration that can be merged with another one.
trait MergeableConfig {
    /// Merge this configuration object with another one, taking values not set in this object from
    /// the other one (if present).
    fn merge(&self, other: &Self) -> Self;
}

/// Initial presentation of a freshly loaded catalog.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct BrowserConfig {
    /// Field that the catalog is initially sorted by.
    pub sort_field: Option<SortField>,
    /// Direction of the initial sort.
    pub sort_order: Option<SortOrder>,
}

impl MergeableConfig for BrowserConfig {
    fn merge(&self, other: &Self) -> Self {
        BrowserConfig {
            sort_field: self.sort_field.or(other.sort_field),
            sort_order: self.sort_order.or(other.sort_order),
        }
    }
}

/// Search behavior.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Quiescence window for interactive search input, in milliseconds.
    pub debounce_ms: Option<u64>,
}

impl MergeableConfig for SearchConfig {
    fn merge(&self, other: &Self) -> Self {
        SearchConfig {
            debounce_ms: self.debounce_ms.or(other.debounce_ms),
        }
    }
}

/// Album library location.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct LibraryConfig {
    /// Path of the album library JSON file.
    pub data_path: Option<PathBuf>,
}

impl MergeableConfig for LibraryConfig {
    fn merge(&self, other: &Self) -> Self {
        LibraryConfig {
            data_path: self
                .data_path
                .as_ref()
                .or(other.data_path.as_ref())
                .cloned(),
        }
    }
}

/// The main configuration struct.
///
/// Every section is optional in the configuration file; unset values are taken from the compiled
/// in defaults by [`Config::with_defaults`] or the accessor fallbacks.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Initial presentation of the catalog.
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Search behavior.
    #[serde(default)]
    pub search: SearchConfig,
    /// Album library location.
    #[serde(default)]
    pub library: LibraryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::load_default().expect("Failed to load default config")
    }
}

impl MergeableConfig for Config {
    /// Merge this configuration object with another one, taking values not set in this object from
    /// the other one (if present).
    fn merge(&self, other: &Self) -> Self {
        Config {
            browser: self.browser.merge(&other.browser),
            search: self.search.merge(&other.search),
            library: self.library.merge(&other.library),
        }
    }
}

impl Config {
    /// Load the configuration from a string slice.
    fn load_from_str(text: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str(text)?;
        Ok(config)
    }

    /// Load the default configuration.
    fn load_default() -> Result<Self, ConfigError> {
        Self::load_from_str(DEFAULT_CONFIG)
    }

    /// Load the configuration from a file located at the given path.
    ///
    /// # Errors
    ///
    /// This method can fail if the file cannot be accessed or if it contains malformed
    /// configuration markup.
    pub fn load_from_path<T: AsRef<Path>>(path: T) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let config = Self::load_from_str(&text)?;
        Ok(config)
    }

    /// Merge this configuration struct with the default values.
    #[must_use]
    pub fn with_defaults(&self) -> Self {
        let default = Self::default();
        self.merge(&default)
    }

    /// Initial sort selection for a freshly loaded catalog.
    #[must_use]
    pub fn initial_sort(&self) -> SortState {
        SortState {
            field: self.browser.sort_field.unwrap_or(FALLBACK_SORT.field),
            order: self.browser.sort_order.unwrap_or(FALLBACK_SORT.order),
        }
    }

    /// Quiescence window for interactive search input.
    #[must_use]
    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.search.debounce_ms.unwrap_or(FALLBACK_DEBOUNCE_MS))
    }

    /// Path of the album library file.
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        self.library
            .data_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_PATH))
    }
}
