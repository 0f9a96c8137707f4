// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `list` CLI subcommand.

use crate::catalog::{Catalog, SortField, SortOrder};
use crate::{Album, Config};
use clap::Parser;
use itertools::Itertools;

/// Command line arguments for the `list` CLI command.
#[derive(Parser, Debug)]
pub struct Args {
    /// Only list albums whose artist or title contains this text.
    #[arg(short, long)]
    query: Option<String>,
    /// Sort by this field (artist, album or tracks) instead of the configured one.
    #[arg(short, long)]
    sort: Option<SortField>,
    /// Sort direction (asc or desc).
    #[arg(short, long)]
    order: Option<SortOrder>,
}

/// Run the `list` command.
#[expect(clippy::unnecessary_wraps)]
pub fn run(_config: &Config, catalog: &mut Catalog, args: Args) -> crate::Result<()> {
    if let Some(field) = args.sort {
        catalog.sort(field, args.order.unwrap_or(SortOrder::Ascending));
    } else if let Some(order) = args.order {
        let field = catalog.sort_state().field;
        catalog.sort(field, order);
    }

    let query = args.query.unwrap_or_default();
    print_albums(&catalog.filter(&query));

    Ok(())
}

/// Print albums as one row each, followed by a count footer.
pub(super) fn print_albums(albums: &[&Album]) {
    if albums.is_empty() {
        println!("No albums found");
        return;
    }
    let rows = albums.iter().map(|album| format_row(album)).join("\n");
    println!("{rows}");
    println!();
    println!("{}", count_label(albums.len(), "album"));
}

/// Format one album row for the listing.
fn format_row(album: &Album) -> String {
    format!(
        "[{:>4}] {} - {} ({})",
        album.id,
        album.artist,
        album.title,
        count_label(album.track_count(), "track")
    )
}

/// Format a count followed by the pluralized noun, e.g. `1 album` or `3 albums`.
pub(super) fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
