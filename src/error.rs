// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Error and result types.

use std::io;
use thiserror::Error;

/// Main error type.
#[derive(Error, Debug)]
pub enum ErrorType {
    /// Configuration error.
    #[error("Configuration Error ({0})")]
    Config(#[from] crate::config::ConfigError),
    /// I/O Error.
    #[error("Input/Output error ({:?})", .0)]
    Io(#[from] io::Error),
    /// The album library does not contain valid album records.
    #[error("Failed to parse album library ({0})")]
    LibraryFormat(#[from] serde_json::Error),
    /// A track length string could not be parsed, or a duration derived from track lengths is
    /// out of range.
    #[error("Invalid track length ({0})")]
    Duration(#[from] crate::util::DurationError),
    /// A sort field name that the catalog does not know.
    #[error("Unknown sort field {0:?}")]
    UnknownSortField(String),
    /// A sort order name that the catalog does not know.
    #[error("Unknown sort order {0:?}")]
    UnknownSortOrder(String),
}

/// Convenience type.
pub type Result<T> = std::result::Result<T, ErrorType>;
