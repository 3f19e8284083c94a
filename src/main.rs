//! repo-picker - fuzzy-pick a git checkout under ~/code
//!
//! Finds every git working directory below `~/code`, lets the user choose one
//! with fzf and prints its path without a trailing newline, e.g.
//! `cd "$(rp)"`.

mod config;
mod error;
mod repos;
mod selector;

use clap::Parser;
use color_eyre::eyre::Result;
use std::io::Write;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick a repository under ~/code and print its path
#[derive(Parser, Debug)]
#[command(name = "rp")]
#[command(author, version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();

    color_eyre::install()?;

    // stdout is reserved for the selected path
    tracing_subscriber::registry()
        .with(EnvFilter::new("warn"))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = config::Config::resolve()?;
    let entries = repos::Discoverer::new(&config).discover()?;
    let entry = selector::Selector::new(&config).choose(&entries)?;

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", entry.path.display())?;
    stdout.flush()?;

    Ok(())
}
