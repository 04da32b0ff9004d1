// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use flatpak_remote::{
    config::{read_layout, StoreLayout},
    Resolver,
};

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::{path::PathBuf, process::exit};
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug, Clone, Parser)]
#[command(about, subcommand_help_heading = "Commands", version)]
struct Cli {
    /// Layout file naming user and system installation directories.
    #[arg(short, long, global = true, value_name = "path")]
    pub layout: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    fn run(self) -> Result<()> {
        let layout = match self.layout {
            Some(path) => read_layout(path)?,
            None => StoreLayout::try_default()?,
        };
        let resolver = Resolver::new(&layout);

        match self.command {
            Command::Show(opts) => run_show(&resolver, opts),
            Command::List(opts) => run_list(&resolver, opts),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Show settings of a remote.
    #[command(override_usage = "flatpak-remote show [options] <remote_name>")]
    Show(ShowOptions),

    /// List remotes of user and system installations.
    #[command(override_usage = "flatpak-remote list [options]")]
    List(ListOptions),
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct ShowOptions {
    /// Name of remote to show.
    #[arg(required = true, value_name = "remote_name")]
    pub remote_name: String,
}

#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
struct ListOptions {
    /// Include disabled remotes.
    #[arg(short = 'd', long)]
    pub show_disabled: bool,
}

/// Derived blurb printed after the remote snapshot.
#[derive(Serialize)]
struct About<'a> {
    about: &'a str,
}

fn main() {
    let layer = fmt::layer()
        .compact()
        .with_target(false)
        .without_time();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .init();

    if let Err(error) = run() {
        error!("{error:?}");
        exit(1);
    }

    exit(0)
}

fn run() -> Result<()> {
    Cli::parse().run()
}

fn run_show(resolver: &Resolver, opts: ShowOptions) -> Result<()> {
    let remote = resolver.resolve(opts.remote_name)?;
    print!("{remote}");
    print!(
        "{}",
        toml::ser::to_string(&About {
            about: remote.about()
        })?
    );

    Ok(())
}

fn run_list(resolver: &Resolver, opts: ListOptions) -> Result<()> {
    for remote in resolver.list()? {
        if !remote.enabled() && !opts.show_disabled {
            continue;
        }

        let state = if remote.enabled() { "" } else { " [disabled]" };
        println!(
            "{}\t{}\t{}\t{}{}",
            remote.name(),
            remote.scope(),
            remote.title(),
            remote.url(),
            state
        );
    }

    Ok(())
}
