//! Quire command-line finder.
//!
//! Ranks the pages of a site listing or the headings of a Markdown document against a fuzzy
//! query, and replays key scripts through the interactive page finder.

mod cli;
mod commands;
mod config;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::config::Config;

fn main() -> Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let cwd = std::env::current_dir().context("failed to resolve working directory")?;
	let config = Config::discover(cli.config.as_deref(), &cwd)?;

	let stdout = io::stdout();
	let mut out = io::BufWriter::new(stdout.lock());
	match &cli.command {
		Command::Find { listing, output, query } => commands::find(&config, listing.as_deref(), query, output, &mut out)?,
		Command::Headings { file, output, query } => commands::headings(&config, file, query, output, &mut out)?,
		Command::Keys { listing, output, keys } => commands::keys(&config, listing.as_deref(), keys, output, &mut out)?,
	}
	out.flush()?;
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("quire=debug,quire_picker=debug,quire_matcher=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(false)
		.init();
}
