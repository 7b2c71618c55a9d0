use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "quire")]
#[command(about = "Fuzzy page and heading finder")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Configuration file (defaults to ./quire.toml when present)
	#[arg(long, global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Rank the pages of a listing against a query
	Find {
		/// Newline-delimited page listing (overrides the configured one)
		#[arg(long, short, value_name = "PATH")]
		listing: Option<PathBuf>,
		/// Output options.
		#[command(flatten)]
		output: OutputArgs,
		/// Query; empty lists every page
		#[arg(default_value = "")]
		query: String,
	},
	/// Rank the headings of a Markdown document against a query
	Headings {
		/// Markdown document
		file: PathBuf,
		/// Output options.
		#[command(flatten)]
		output: OutputArgs,
		/// Query; empty lists every heading
		#[arg(default_value = "")]
		query: String,
	},
	/// Replay a key script through the page finder
	Keys {
		/// Newline-delimited page listing (overrides the configured one)
		#[arg(long, short, value_name = "PATH")]
		listing: Option<PathBuf>,
		/// Output options.
		#[command(flatten)]
		output: OutputArgs,
		/// Keys: literal characters or <esc>, <enter>, <up>, <down>, <bs>, <space>, <C-x>
		#[arg(required = true)]
		keys: Vec<String>,
	},
}

/// Options shared by every listing subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
	/// Maximum number of results to print
	#[arg(long, short = 'n', value_name = "N")]
	pub limit: Option<usize>,

	/// Render highlights as HTML markup instead of [brackets]
	#[arg(long)]
	pub html: bool,
}
