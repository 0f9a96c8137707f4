// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Aggregate statistics over an album's tracklist.

use crate::album::Track;
use crate::util::DurationError;
use chrono::TimeDelta;

/// A track singled out as an extreme (longest or shortest) of a tracklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackHighlight {
    /// Track title.
    pub title: String,
    /// Parsed track length.
    pub length: TimeDelta,
    /// The track's original length display string.
    pub display_length: String,
}

impl TrackHighlight {
    /// Create a highlight entry for the given track.
    fn new(track: &Track, length: TimeDelta) -> Self {
        TrackHighlight {
            title: track.title.clone(),
            length,
            display_length: track.length.clone(),
        }
    }
}

/// Aggregate statistics for one album's tracklist.
///
/// Derived on demand and never cached; see [`AlbumStats::compute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumStats {
    /// Number of tracks.
    pub track_count: usize,
    /// Sum of all track lengths.
    pub total_length: TimeDelta,
    /// Average track length in whole seconds, halves rounding up.
    pub average_length: TimeDelta,
    /// The first track with the maximum length, `None` for an empty tracklist.
    pub longest: Option<TrackHighlight>,
    /// The first track with the minimum length, `None` for an empty tracklist.
    pub shortest: Option<TrackHighlight>,
}

impl AlbumStats {
    /// Compute the statistics for a tracklist in a single pass.
    ///
    /// Extremes are tracked with strict comparisons, so on ties the first maximal and first
    /// minimal tracks in tracklist order win. An empty tracklist yields the zero state (zero
    /// lengths, no extremes) instead of a division error.
    ///
    /// # Errors
    ///
    /// Returns an error on the first track whose length string is malformed, or if the summed
    /// lengths exceed the representable duration range.
    pub fn compute(tracklist: &[Track]) -> crate::Result<Self> {
        let mut total_seconds: i64 = 0;
        let mut longest: Option<TrackHighlight> = None;
        let mut shortest: Option<TrackHighlight> = None;

        for track in tracklist {
            let length = track.parsed_length()?;
            total_seconds = total_seconds
                .checked_add(length.num_seconds())
                .ok_or(DurationError::OutOfRange)?;

            if longest
                .as_ref()
                .is_none_or(|current| length > current.length)
            {
                longest = Some(TrackHighlight::new(track, length));
            }
            if shortest
                .as_ref()
                .is_none_or(|current| length < current.length)
            {
                shortest = Some(TrackHighlight::new(track, length));
            }
        }

        let track_count = tracklist.len();
        let total_length =
            TimeDelta::try_seconds(total_seconds).ok_or(DurationError::OutOfRange)?;
        let average_length = if track_count == 0 {
            TimeDelta::zero()
        } else {
            TimeDelta::try_seconds(average_seconds(total_seconds, track_count))
                .ok_or(DurationError::OutOfRange)?
        };

        Ok(AlbumStats {
            track_count,
            total_length,
            average_length,
            longest,
            shortest,
        })
    }
}

/// Average length in whole seconds, rounded to the nearest integer with halves rounding up.
#[expect(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn average_seconds(total_seconds: i64, track_count: usize) -> i64 {
    (total_seconds as f64 / track_count as f64).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::FormattedDuration;
    use crate::ErrorType;

    fn track(number: u32, title: &str, length: &str) -> Track {
        Track {
            number,
            title: title.to_string(),
            length: length.to_string(),
            url: format!("https://example.com/play/{number}"),
        }
    }

    #[test]
    fn test_compute_aggregates_totals_and_extremes() {
        let tracklist = vec![
            track(1, "A", "3:45"),
            track(2, "B", "4:02"),
            track(3, "C", "2:58"),
        ];
        let stats = AlbumStats::compute(&tracklist).expect("stats should compute");

        assert_eq!(stats.track_count, 3);
        assert_eq!(stats.total_length.num_seconds(), 645);
        assert_eq!(stats.total_length.formatted_duration(), "10:45");
        assert_eq!(stats.average_length.num_seconds(), 215);
        assert_eq!(stats.average_length.formatted_duration(), "3:35");

        let longest = stats.longest.expect("longest track should exist");
        assert_eq!(longest.title, "B");
        assert_eq!(longest.display_length, "4:02");
        assert_eq!(longest.length.num_seconds(), 242);

        let shortest = stats.shortest.expect("shortest track should exist");
        assert_eq!(shortest.title, "C");
        assert_eq!(shortest.display_length, "2:58");
    }

    #[test]
    fn test_compute_ties_resolve_to_first_track() {
        let tracklist = vec![track(1, "First", "3:00"), track(2, "Second", "3:00")];
        let stats = AlbumStats::compute(&tracklist).expect("stats should compute");

        assert_eq!(
            stats.longest.expect("longest track should exist").title,
            "First"
        );
        assert_eq!(
            stats.shortest.expect("shortest track should exist").title,
            "First"
        );
    }

    #[test]
    fn test_compute_empty_tracklist_yields_zero_state() {
        let stats = AlbumStats::compute(&[]).expect("stats should compute");

        assert_eq!(stats.track_count, 0);
        assert_eq!(stats.total_length, TimeDelta::zero());
        assert_eq!(stats.average_length, TimeDelta::zero());
        assert_eq!(stats.longest, None);
        assert_eq!(stats.shortest, None);
    }

    #[test]
    fn test_compute_single_track_is_both_extremes() {
        let tracklist = vec![track(1, "Only", "4:20")];
        let stats = AlbumStats::compute(&tracklist).expect("stats should compute");

        assert_eq!(stats.average_length.num_seconds(), 260);
        assert_eq!(
            stats.longest.expect("longest track should exist").title,
            "Only"
        );
        assert_eq!(
            stats.shortest.expect("shortest track should exist").title,
            "Only"
        );
    }

    #[test]
    fn test_compute_rounds_half_up() {
        let tracklist = vec![track(1, "A", "0:01"), track(2, "B", "0:02")];
        let stats = AlbumStats::compute(&tracklist).expect("stats should compute");
        assert_eq!(stats.average_length.num_seconds(), 2);
    }

    #[test]
    fn test_compute_propagates_malformed_length() {
        let tracklist = vec![track(1, "A", "3:45"), track(2, "B", "3:4x")];
        let result = AlbumStats::compute(&tracklist);
        assert!(matches!(result, Err(ErrorType::Duration(_))));
    }

    #[test]
    fn test_compute_rejects_total_exceeding_duration_range() {
        // Each of these parses fine on its own; only the sum is unrepresentable.
        let tracklist: Vec<Track> = (1..=600)
            .map(|number| track(number, "Drone", "4294967295:59:59"))
            .collect();
        assert!(matches!(
            AlbumStats::compute(&tracklist),
            Err(ErrorType::Duration(DurationError::OutOfRange))
        ));
    }
}
