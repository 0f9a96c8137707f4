// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Module for the `browse` CLI subcommand.

use crate::album::AlbumId;
use crate::catalog::{Catalog, SortField};
use crate::util::debounce;
use crate::Config;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use super::{list, show};

/// Command line arguments for the `browse` CLI command.
#[derive(Parser, Debug)]
pub struct Args;

/// One line of interactive input.
#[derive(Debug, PartialEq, Eq)]
enum Event {
    /// Leave the browse loop.
    Quit,
    /// Toggle sorting on a field.
    Sort(String),
    /// Show the album with the given id.
    Show(String),
    /// A `:`-prefixed command that the loop does not know.
    Unknown(String),
    /// A search query.
    Query(String),
}

/// Interpret one line of input.
fn parse_line(line: &str) -> Event {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix(':') {
        let (command, argument) = rest.split_once(' ').unwrap_or((rest, ""));
        return match command {
            "q" | "quit" => Event::Quit,
            "sort" => Event::Sort(argument.trim().to_string()),
            "show" => Event::Show(argument.trim().to_string()),
            _ => Event::Unknown(command.to_string()),
        };
    }
    Event::Query(line.to_string())
}

/// Render the albums matching the query.
fn render(catalog: &Catalog, query: &str) {
    list::print_albums(&catalog.filter(query));
}

/// Run the `browse` command.
///
/// Reads lines from standard input. Plain text is treated as a search query and applied once the
/// configured debounce window has passed without further input, while `:`-prefixed commands act
/// immediately.
///
/// # Errors
///
/// Returns an error if reading standard input fails or a shown album has a malformed track
/// length.
pub async fn run(config: &Config, mut catalog: Catalog, _args: Args) -> crate::Result<()> {
    let (query_tx, mut queries) = debounce::channel(config.debounce_window());
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut current_query = String::new();

    println!("{} loaded", list::count_label(catalog.len(), "album"));
    println!("Type to search. Commands: :sort FIELD, :show ID, :quit");
    println!();
    render(&catalog, &current_query);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_line(&line) {
                    Event::Quit => break,
                    Event::Sort(name) => handle_sort(&mut catalog, &current_query, &name),
                    Event::Show(id) => handle_show(&catalog, &id)?,
                    Event::Unknown(command) => println!("Unknown command :{command}"),
                    Event::Query(text) => {
                        if query_tx.send(text).is_err() {
                            break;
                        }
                    }
                }
            }
            Some(query) = queries.recv() => {
                current_query = query;
                render(&catalog, &current_query);
            }
        }
    }

    Ok(())
}

/// Toggle sorting on the named field and re-render with the current query.
fn handle_sort(catalog: &mut Catalog, current_query: &str, name: &str) {
    match name.parse::<SortField>() {
        Ok(field) => {
            let state = catalog.toggle_sort(field);
            println!("Sorted by {} ({})", state.field, state.order);
            render(catalog, current_query);
        }
        Err(err) => log::warn!("{err}, keeping current order"),
    }
}

/// Show the album with the given id, which must be numeric.
fn handle_show(catalog: &Catalog, id: &str) -> crate::Result<()> {
    let Ok(id) = id.parse::<AlbumId>() else {
        println!("Album ids are numeric, got {id:?}");
        return Ok(());
    };
    match catalog.find_by_id(id) {
        Some(album) => {
            println!();
            show::print_album(album)?;
        }
        None => println!("No album with id {id}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_commands() {
        assert_eq!(parse_line(":quit"), Event::Quit);
        assert_eq!(parse_line(":q"), Event::Quit);
        assert_eq!(parse_line(" :sort tracks "), Event::Sort("tracks".to_string()));
        assert_eq!(parse_line(":sort"), Event::Sort(String::new()));
        assert_eq!(parse_line(":show 3"), Event::Show("3".to_string()));
        assert_eq!(parse_line(":rewind"), Event::Unknown("rewind".to_string()));
    }

    #[test]
    fn test_parse_line_queries() {
        assert_eq!(parse_line("daft punk"), Event::Query("daft punk".to_string()));
        assert_eq!(parse_line("  Aphex  "), Event::Query("Aphex".to_string()));
        assert_eq!(parse_line(""), Event::Query(String::new()));
    }
}
