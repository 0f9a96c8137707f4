// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! The in-memory album catalog and its query operations.

use crate::album::{Album, AlbumId};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use unidecode::unidecode;

/// Attribute that the catalog can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    /// Sort by artist name.
    Artist,
    /// Sort by album title.
    Album,
    /// Sort by number of tracks.
    Tracks,
}

impl FromStr for SortField {
    type Err = crate::ErrorType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "artist" => Ok(SortField::Artist),
            "album" => Ok(SortField::Album),
            "tracks" => Ok(SortField::Tracks),
            _ => Err(crate::ErrorType::UnknownSortField(value.to_string())),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Artist => "artist",
            SortField::Album => "album",
            SortField::Tracks => "tracks",
        })
    }
}

/// Direction of a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum SortOrder {
    /// Ascending order.
    #[serde(rename = "asc")]
    Ascending,
    /// Descending order.
    #[serde(rename = "desc")]
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

impl FromStr for SortOrder {
    type Err = crate::ErrorType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "asc" => Ok(SortOrder::Ascending),
            "desc" => Ok(SortOrder::Descending),
            _ => Err(crate::ErrorType::UnknownSortOrder(value.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        })
    }
}

/// The catalog's active sort selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    /// Active sort field.
    pub field: SortField,
    /// Active sort direction.
    pub order: SortOrder,
}

impl Default for SortState {
    fn default() -> Self {
        SortState {
            field: SortField::Artist,
            order: SortOrder::Ascending,
        }
    }
}

/// An in-memory collection of albums plus the active sort selection.
#[derive(Debug)]
pub struct Catalog {
    /// The albums, in their current order.
    albums: Vec<Album>,
    /// The active sort selection.
    sort_state: SortState,
}

impl Catalog {
    /// Creates a new catalog from a `Vec` of `Album` records.
    #[must_use]
    pub fn new(albums: Vec<Album>) -> Self {
        Self {
            albums,
            sort_state: SortState::default(),
        }
    }

    /// Load a catalog from a JSON file at the given path.
    ///
    /// Loading is a one-shot operation: a failure is returned to the caller and no retry is
    /// attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not deserialize into album records.
    pub async fn load_from_path<T: AsRef<Path>>(path: T) -> crate::Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let albums: Vec<Album> = serde_json::from_str(&text)?;
        log::info!("Loaded {} albums from {}", albums.len(), path.display());
        Ok(Self::new(albums))
    }

    /// Number of albums in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.albums.len()
    }

    /// Returns `true` if the catalog contains no albums.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
    }

    /// All albums in their current order.
    #[must_use]
    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    /// The active sort selection.
    #[must_use]
    pub fn sort_state(&self) -> SortState {
        self.sort_state
    }

    /// Look up an album by its id.
    #[must_use]
    pub fn find_by_id(&self, id: AlbumId) -> Option<&Album> {
        self.albums.iter().find(|album| album.id == id)
    }

    /// Returns the subsequence of albums whose artist or title contains the query.
    ///
    /// The query is trimmed and case-folded first; an empty or whitespace-only query returns
    /// every album in the current order. Pure: the catalog and its sort selection are unchanged.
    #[must_use]
    pub fn filter(&self, query: &str) -> Vec<&Album> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.albums.iter().collect();
        }
        self.albums
            .iter()
            .filter(|album| {
                album.artist.to_lowercase().contains(&needle)
                    || album.title.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Sort the catalog by the given field and direction, updating the sort selection.
    ///
    /// The sort is stable, and descending order reverses the comparator result rather than the
    /// output sequence, so equal keys keep their input order under both directions. String
    /// fields compare by [`sort_key`], track counts numerically.
    pub fn sort(&mut self, field: SortField, order: SortOrder) {
        self.albums.sort_by(|lhs, rhs| {
            let ordering = compare_albums(lhs, rhs, field);
            match order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        self.sort_state = SortState { field, order };
        log::debug!("Sorted {} albums by {field} ({order})", self.albums.len());
    }

    /// Handle a sort request for a field.
    ///
    /// Requesting the field that is already active flips the direction; requesting a new field
    /// resets to ascending. Returns the resulting selection so callers can display it.
    pub fn toggle_sort(&mut self, field: SortField) -> SortState {
        let order = if self.sort_state.field == field {
            self.sort_state.order.flipped()
        } else {
            SortOrder::Ascending
        };
        self.sort(field, order);
        self.sort_state
    }
}

impl IntoIterator for Catalog {
    type Item = Album;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.albums.into_iter()
    }
}

impl FromIterator<Album> for Catalog {
    fn from_iter<I: IntoIterator<Item = Album>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<Album>>())
    }
}

/// Compare two albums on the given field, ascending.
fn compare_albums(lhs: &Album, rhs: &Album, field: SortField) -> Ordering {
    match field {
        SortField::Artist => sort_key(&lhs.artist).cmp(&sort_key(&rhs.artist)),
        SortField::Album => sort_key(&lhs.title).cmp(&sort_key(&rhs.title)),
        SortField::Tracks => lhs.track_count().cmp(&rhs.track_count()),
    }
}

/// Normalize a string slice value into a sort key.
///
/// Transliterates Unicode to ASCII and lowercases it, so that accented characters collate next
/// to their plain forms instead of after `z`.
fn sort_key(value: &str) -> String {
    let mut key = unidecode(value);
    key.make_ascii_lowercase();
    key
}
