//! Subcommand implementations. Each writes its report to the given sink.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use quire_picker::{Finder, FinderMode, HighlightMarkup, Highlighted, IncrementalPicker, Key, KeyOutcome, MoveOutcome, extract_headings, load_listing};

use crate::cli::OutputArgs;
use crate::config::Config;

/// How ranked entries are printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
	markup: HighlightMarkup,
	html: bool,
	limit: Option<usize>,
}

impl Render {
	/// Command-line flags take precedence over the configuration.
	pub fn new(config: &Config, output: &OutputArgs) -> Self {
		let markup = if output.html { config.highlight.clone() } else { HighlightMarkup::brackets() };
		Self {
			markup,
			html: output.html,
			limit: output.limit.or(config.limit),
		}
	}

	fn highlight(&self, highlighted: &Highlighted) -> String {
		if self.html { self.markup.render(highlighted) } else { self.markup.render_unescaped(highlighted) }
	}

	/// Writes `score<TAB>id<TAB>rendering` per ranked entry, marking the active one when `mark_active`.
	fn write_ranked(&self, picker: &IncrementalPicker, mark_active: bool, out: &mut impl Write) -> Result<()> {
		let shown = self.limit.unwrap_or(usize::MAX);
		for (index, entry) in picker.matches().iter().take(shown).enumerate() {
			if mark_active {
				let marker = if picker.selected() == Some(index) { '>' } else { ' ' };
				write!(out, "{marker} ")?;
			}
			writeln!(out, "{}\t{}\t{}", entry.score, entry.candidate.id, self.highlight(&entry.highlighted))?;
		}
		Ok(())
	}
}

fn picker_for(config: &Config) -> IncrementalPicker {
	IncrementalPicker::with_scoring(config.scoring.clone())
}

pub fn find(config: &Config, listing: Option<&Path>, query: &str, output: &OutputArgs, out: &mut impl Write) -> Result<()> {
	let listing = listing.unwrap_or(&config.listing);
	let mut picker = picker_for(config);
	picker.load(load_listing(listing)?);
	picker.set_query(query);
	tracing::debug!(listing = %listing.display(), query, matches = picker.len(), "Ranked pages");

	Render::new(config, output).write_ranked(&picker, false, out)
}

pub fn headings(config: &Config, file: &Path, query: &str, output: &OutputArgs, out: &mut impl Write) -> Result<()> {
	let markdown = fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))?;
	let mut picker = picker_for(config);
	picker.load(extract_headings(&markdown));
	picker.set_query(query);
	tracing::debug!(file = %file.display(), query, matches = picker.len(), "Ranked headings");

	Render::new(config, output).write_ranked(&picker, false, out)
}

/// Replays `keys` through a page finder, running the deferred re-filter after every key as a
/// host event loop would, then prints the finder if it is still visible.
pub fn keys(config: &Config, listing: Option<&Path>, keys: &[String], output: &OutputArgs, out: &mut impl Write) -> Result<()> {
	let listing = listing.unwrap_or(&config.listing);
	let mut picker = picker_for(config);
	picker.load(load_listing(listing)?);
	let mut finder = Finder::with_picker(FinderMode::Pages, picker);

	for token in keys {
		let key = Key::parse(token).with_context(|| format!("unrecognized key `{token}`"))?;
		let outcome = finder.handle_key(key);
		finder.run_deferred();
		tracing::trace!(token, ?outcome, "Replayed key");
		if let Some(line) = describe(&outcome) {
			writeln!(out, "{line}")?;
		}
	}

	if finder.is_visible() {
		writeln!(out, "query: {}", finder.input())?;
		Render::new(config, output).write_ranked(finder.picker(), true, out)?;
	}
	Ok(())
}

/// Outcomes worth reporting in a key replay; silent ones yield `None`.
fn describe(outcome: &KeyOutcome) -> Option<String> {
	match outcome {
		KeyOutcome::Opened => Some("opened".to_string()),
		KeyOutcome::Reload => Some("reload".to_string()),
		KeyOutcome::Cleared => Some("cleared".to_string()),
		KeyOutcome::Hidden => Some("hidden".to_string()),
		KeyOutcome::Navigate(id) => Some(format!("navigate {id}")),
		KeyOutcome::NothingSelected => Some("nothing selected".to_string()),
		KeyOutcome::Moved(MoveOutcome::ScrollToTop) => Some("scroll to top".to_string()),
		KeyOutcome::Ignored | KeyOutcome::Deferred | KeyOutcome::Moved(_) => None,
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use pretty_assertions::assert_eq;

	use super::*;

	fn listing(dir: &tempfile::TempDir) -> PathBuf {
		let path = dir.path().join("pages.txt");
		fs::write(&path, "./index.md\n./guides/setup.md\n./notes/setup-old.md\n./about.md\n").expect("write listing");
		path
	}

	fn run(command: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
		let mut out = Vec::new();
		command(&mut out).expect("command succeeds");
		String::from_utf8(out).expect("utf-8 output")
	}

	fn script(tokens: &[&str]) -> Vec<String> {
		tokens.iter().map(|token| token.to_string()).collect()
	}

	#[test]
	fn find_prints_ranked_pages_with_brackets() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = listing(&dir);
		let output = run(|out| find(&Config::default(), Some(&path), "setup", &OutputArgs::default(), out));

		assert_eq!(output, "177\tguides/setup.md\tguide[s]/s[etup].md\n176\tnotes/setup-old.md\tnote[s]/s[etup]-old.md\n");
	}

	#[test]
	fn find_honors_limit_and_html_markup() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = listing(&dir);
		let config = Config {
			highlight: HighlightMarkup::new("<b>", "<i>"),
			..Config::default()
		};
		let output = OutputArgs { limit: Some(1), html: true };
		let printed = run(|out| find(&config, Some(&path), "setup", &output, out));

		assert_eq!(printed.lines().count(), 1);
		assert!(printed.starts_with("177\tguides/setup.md\tguide<b>s<i>"));
		assert!(printed.ends_with("<b>etup<i>.md\n"));
	}

	#[test]
	fn configured_limit_applies_without_flag() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let config = Config {
			listing: listing(&dir),
			limit: Some(2),
			..Config::default()
		};
		let printed = run(|out| find(&config, None, "", &OutputArgs::default(), out));

		assert_eq!(printed.lines().count(), 2);
		assert!(printed.starts_with("1\tabout.md\tabout.md\n"));
	}

	#[test]
	fn oversized_scoring_config_ranks_without_overflow() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = listing(&dir);
		let config = Config::parse("[scoring]\nmatch_score = 3000000000\n").expect("parse config");
		let printed = run(|out| find(&config, Some(&path), "setup", &OutputArgs::default(), out));

		assert_eq!(
			printed.lines().map(|line| line.split('\t').take(2).collect::<Vec<_>>()).collect::<Vec<_>>(),
			vec![vec!["4294967295", "guides/setup.md"], vec!["4294967295", "notes/setup-old.md"]]
		);
	}

	#[test]
	fn missing_listing_is_an_error() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let missing = dir.path().join("missing.txt");
		let mut out = Vec::new();
		assert!(find(&Config::default(), Some(&missing), "x", &OutputArgs::default(), &mut out).is_err());
	}

	#[test]
	fn headings_are_ranked_by_display_text() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let file = dir.path().join("guide.md");
		fs::write(&file, "# Guide\n\n## Install\n\ntext\n\n## Usage {#use}\n").expect("write markdown");
		let printed = run(|out| headings(&Config::default(), &file, "us", &OutputArgs::default(), out));

		assert_eq!(printed.lines().collect::<Vec<_>>(), vec!["128\tuse\t[Us]age"]);
	}

	#[test]
	fn key_replay_navigates_to_selection() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = listing(&dir);
		let printed = run(|out| keys(&Config::default(), Some(&path), &script(&["f", "s", "e", "t", "<down>", "<enter>"]), &OutputArgs::default(), out));

		assert_eq!(printed, "opened\nnavigate notes/setup-old.md\n");
	}

	#[test]
	fn key_replay_prints_open_finder_with_active_marker() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = listing(&dir);
		let printed = run(|out| keys(&Config::default(), Some(&path), &script(&["f", "s", "e", "t", "<up>"]), &OutputArgs::default(), out));

		assert_eq!(
			printed,
			"opened\nscroll to top\nquery: set\n> 74\tguides/setup.md\tguide[s]/s[et]up.md\n  74\tnotes/setup-old.md\tnote[s]/s[et]up-old.md\n"
		);
	}

	#[test]
	fn unknown_key_token_is_rejected() {
		let dir = tempfile::tempdir().expect("create tempdir");
		let path = listing(&dir);
		let mut out = Vec::new();
		assert!(keys(&Config::default(), Some(&path), &script(&["f", "<nope>"]), &OutputArgs::default(), &mut out).is_err());
	}
}
