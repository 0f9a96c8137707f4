// Copyright (c) 2025 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Time-related utility functions.

use chrono::TimeDelta;
use thiserror::Error;

/// Encountered when a track length string cannot be parsed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    /// The string does not consist of two or three `:`-separated segments.
    #[error("Malformed duration {0:?}")]
    MalformedDuration(String),
    /// A segment of the duration string is not a base-10 integer.
    #[error("Malformed duration segment {0:?}")]
    MalformedSegment(String),
    /// The duration exceeds the representable range.
    #[error("Duration out of range")]
    OutOfRange,
}

/// Indicates that a value can be represent a duration as a formatted string.
pub trait FormattedDuration {
    /// Format the duration as a string, either in the form `M:SS` or `H:MM:SS`.
    fn formatted_duration(&self) -> String;
}

impl FormattedDuration for TimeDelta {
    fn formatted_duration(&self) -> String {
        let hours = self.num_hours();
        let minutes = self.num_minutes() - hours * 60;
        let seconds = self.num_seconds() - hours * 60 * 60 - minutes * 60;
        if hours > 0 {
            format!("{hours}:{minutes:02}:{seconds:02}")
        } else {
            format!("{minutes}:{seconds:02}")
        }
    }
}

/// Parse a track length string (`M:SS` or `H:MM:SS`) into a [`TimeDelta`].
///
/// Each segment must be a base-10 unsigned integer. Segments are not range-checked, so `3:75`
/// parses to the same length as `4:15`.
///
/// # Errors
///
/// Returns [`DurationError::MalformedSegment`] if a segment fails to parse as an integer and
/// [`DurationError::MalformedDuration`] if the segment count is not two or three.
pub fn parse_duration(value: &str) -> Result<TimeDelta, DurationError> {
    let segments = value
        .split(':')
        .map(|segment| {
            segment
                .parse::<u32>()
                .map_err(|_| DurationError::MalformedSegment(segment.to_string()))
        })
        .collect::<Result<Vec<u32>, DurationError>>()?;

    let seconds = match segments[..] {
        [minutes, seconds] => i64::from(minutes) * 60 + i64::from(seconds),
        [hours, minutes, seconds] => {
            i64::from(hours) * 3600 + i64::from(minutes) * 60 + i64::from(seconds)
        }
        _ => return Err(DurationError::MalformedDuration(value.to_string())),
    };
    Ok(TimeDelta::seconds(seconds))
}

#[cfg(test)]
mod tests {
    // Note this useful idiom: importing names from outer (for mod tests) scope.
    use super::*;
    use paste::paste;

    macro_rules! add_duration_roundtrip_test {
        ($name:ident, $text:expr, $seconds:expr) => {
            paste! {
                #[test]
                fn [<test_duration_roundtrip_ $name>]() {
                    let parsed = parse_duration($text).expect("duration should parse");
                    assert_eq!(parsed.num_seconds(), $seconds);
                    assert_eq!(parsed.formatted_duration(), $text);
                }
            }
        };
    }

    add_duration_roundtrip_test!(zero, "0:00", 0);
    add_duration_roundtrip_test!(typical, "3:45", 225);
    add_duration_roundtrip_test!(minute_boundary, "1:00", 60);
    add_duration_roundtrip_test!(last_before_hour, "59:59", 3599);
    add_duration_roundtrip_test!(hour_boundary, "1:00:00", 3600);
    add_duration_roundtrip_test!(with_hours, "1:01:01", 3661);
    add_duration_roundtrip_test!(double_digit_hours, "10:02:59", 36_179);

    #[test]
    fn test_formatted_duration_minutes_unpadded() {
        assert_eq!(TimeDelta::seconds(59).formatted_duration(), "0:59");
        assert_eq!(TimeDelta::seconds(645).formatted_duration(), "10:45");
    }

    #[test]
    fn test_formatted_duration_hours_unpadded() {
        assert_eq!(TimeDelta::seconds(36_000).formatted_duration(), "10:00:00");
    }

    #[test]
    fn test_parse_duration_does_not_range_check_segments() {
        let parsed = parse_duration("3:75").expect("duration should parse");
        assert_eq!(parsed.num_seconds(), 255);
        assert_eq!(parsed.formatted_duration(), "4:15");
    }

    #[test]
    fn test_parse_duration_rejects_single_segment() {
        assert_eq!(
            parse_duration("345"),
            Err(DurationError::MalformedDuration("345".to_string()))
        );
    }

    #[test]
    fn test_parse_duration_rejects_too_many_segments() {
        assert_eq!(
            parse_duration("1:2:3:4"),
            Err(DurationError::MalformedDuration("1:2:3:4".to_string()))
        );
    }

    #[test]
    fn test_parse_duration_rejects_empty_segment() {
        assert_eq!(
            parse_duration("3:"),
            Err(DurationError::MalformedSegment(String::new()))
        );
    }

    #[test]
    fn test_parse_duration_rejects_non_numeric_segment() {
        assert_eq!(
            parse_duration("a:10"),
            Err(DurationError::MalformedSegment("a".to_string()))
        );
    }

    #[test]
    fn test_parse_duration_rejects_negative_segment() {
        assert_eq!(
            parse_duration("-3:00"),
            Err(DurationError::MalformedSegment("-3".to_string()))
        );
    }

    #[test]
    fn test_parse_duration_rejects_empty_string() {
        assert_eq!(
            parse_duration(""),
            Err(DurationError::MalformedSegment(String::new()))
        );
    }
}
