// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The album and track data model.

use crate::stats::AlbumStats;
use crate::util::parse_duration;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

/// Unique identifier of an album in the catalog.
pub type AlbumId = u32;

/// A single track of an album.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Track {
    /// Track number (1-based, matches the tracklist position).
    pub number: u32,
    /// Track title.
    pub title: String,
    /// Track length as a display string, either `M:SS` or `H:MM:SS`.
    #[serde(rename = "trackLength")]
    pub length: String,
    /// Reference to an external resource where the track can be played.
    pub url: String,
}

impl Track {
    /// Parse the track length display string into a [`TimeDelta`].
    ///
    /// # Errors
    ///
    /// Returns an error if the length string is malformed.
    pub fn parsed_length(&self) -> crate::Result<TimeDelta> {
        Ok(parse_duration(&self.length)?)
    }
}

/// A catalog entry with metadata and an ordered tracklist.
///
/// Immutable once loaded; the catalog only repositions albums when sorting.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Album {
    /// Unique album id.
    pub id: AlbumId,
    /// Artist name.
    pub artist: String,
    /// Album title.
    #[serde(rename = "album")]
    pub title: String,
    /// File name of the cover thumbnail image.
    pub thumbnail: String,
    /// The tracklist, in track number order.
    pub tracklist: Vec<Track>,
}

impl Album {
    /// Number of tracks on this album.
    #[must_use]
    pub fn track_count(&self) -> usize {
        self.tracklist.len()
    }

    /// Compute the aggregate statistics for this album's tracklist.
    ///
    /// The statistics are derived on every call, never cached.
    ///
    /// # Errors
    ///
    /// Returns an error if any track length string is malformed.
    pub fn stats(&self) -> crate::Result<AlbumStats> {
        AlbumStats::compute(&self.tracklist)
    }

    /// URL of the first track, used as the album's play link.
    #[must_use]
    pub fn play_url(&self) -> Option<&str> {
        self.tracklist.first().map(|track| track.url.as_str())
    }
}
