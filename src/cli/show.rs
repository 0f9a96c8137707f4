// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `show` CLI subcommand.

use crate::album::{Album, AlbumId};
use crate::util::FormattedDuration;
use crate::{Catalog, Config};
use clap::Parser;

use super::list::count_label;

/// Command line arguments for the `show` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// Id of the album to show.
    id: AlbumId,
}

/// Run the `show` command.
pub fn run(_config: &Config, catalog: &Catalog, args: Args) -> crate::Result<()> {
    let Args { id } = args;
    let Some(album) = catalog.find_by_id(id) else {
        println!("No album with id {id}");
        return Ok(());
    };
    print_album(album)
}

/// Print one album in detail: the statistics header, the tracklist and a play link for the first
/// track.
pub(super) fn print_album(album: &Album) -> crate::Result<()> {
    let stats = album.stats()?;

    println!("{} - {}", album.artist, album.title);
    println!(
        "{}, total {}, average {}",
        count_label(stats.track_count, "track"),
        stats.total_length.formatted_duration(),
        stats.average_length.formatted_duration()
    );
    if let Some(longest) = &stats.longest {
        println!("Longest: {} ({})", longest.title, longest.display_length);
    }
    if let Some(shortest) = &stats.shortest {
        println!("Shortest: {} ({})", shortest.title, shortest.display_length);
    }

    println!();
    for track in &album.tracklist {
        println!("{:>3}. {} ({})", track.number, track.title, track.length);
    }

    if let Some(url) = album.play_url() {
        println!();
        println!("Play: {url}");
    }

    Ok(())
}
