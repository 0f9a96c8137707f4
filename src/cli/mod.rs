// Copyright (c) 2026 Jan Holthuis <jan.holthuis@rub.de>
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0. If a copy
// of the MPL was not distributed with this file, You can obtain one at
// http://mozilla.org/MPL/2.0/.
//
// SPDX-License-Identifier: MPL-2.0

//! Command line interface.

mod browse;
mod list;
mod show;

use crate::{Catalog, Config};
use clap::{Parser, Subcommand};
use env_logger::{Builder, WriteStyle};
use log::LevelFilter;
use std::path::PathBuf;

/// Command line Arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The command to run.
    #[command(subcommand)]
    command: Command,
    /// Show debug information.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Path to configuration file.
    #[arg(short, long, global = true, required = false)]
    config_path: Option<PathBuf>,
    /// Path to the album library file (overrides the configured one).
    #[arg(short, long, global = true, required = false)]
    library: Option<PathBuf>,
}

/// The specific CLI command to run.
#[derive(Subcommand, Debug)]
enum Command {
    /// List the albums in the catalog.
    List(list::Args),
    /// Show a single album in detail, including tracklist statistics.
    Show(show::Args),
    /// Browse the catalog interactively.
    Browse(browse::Args),
}

impl Args {
    /// Get the desired log level, depending on the verbose flag passed on the command line.
    fn log_level_filter(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    /// Get the current configuration.
    fn config(&self) -> crate::Result<Config> {
        match &self.config_path {
            Some(path) => Config::load_from_path(path).map(|config| config.with_defaults()),
            None => Ok(Config::default()),
        }
    }

    /// Path of the album library file, preferring the command line over the configuration.
    fn library_path(&self, config: &Config) -> PathBuf {
        self.library.clone().unwrap_or_else(|| config.data_path())
    }
}

/// Main entry point.
///
/// # Errors
///
/// Can returns errors if the command line arguments are incorrect or the executed programs lead to
/// an error.
pub async fn main() -> crate::Result<()> {
    let args = Args::parse();
    let config = args.config()?;

    Builder::new()
        .filter(None, args.log_level_filter())
        .write_style(WriteStyle::Auto)
        .init();

    let path = args.library_path(&config);
    let mut catalog = match Catalog::load_from_path(&path).await {
        Ok(catalog) => catalog,
        Err(err) => {
            log::error!("Failed to load albums: {err}");
            return Err(err);
        }
    };
    let initial = config.initial_sort();
    catalog.sort(initial.field, initial.order);

    match args.command {
        Command::List(list_args) => list::run(&config, &mut catalog, list_args),
        Command::Show(show_args) => show::run(&config, &catalog, show_args),
        Command::Browse(browse_args) => browse::run(&config, catalog, browse_args).await,
    }
}
