use std::collections::HashMap;

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use crate::Candidate;

const EMPTY_SLUG: &str = "section";

/// Collects the headings of a Markdown document as header-finder candidates.
///
/// The display text is the heading's plain text. The id is its explicit `{#anchor}` when one is
/// given, otherwise a slug of the text. Ids are unique within the document: an id an earlier
/// heading already uses, explicit or generated, is suffixed `-1`, `-2`, ... Headings without text
/// are skipped.
pub fn extract_headings(markdown: &str) -> Vec<Candidate> {
	let mut options = Options::empty();
	options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

	let mut headings = Vec::new();
	let mut slugs = SlugSet::default();
	let mut current: Option<(Option<String>, String)> = None;

	for event in Parser::new_ext(markdown, options) {
		match event {
			Event::Start(Tag::Heading { id, .. }) => {
				current = Some((id.map(|id| id.into_string()), String::new()));
			}
			Event::Text(text) | Event::Code(text) => {
				if let Some((_, buf)) = current.as_mut() {
					buf.push_str(&text);
				}
			}
			Event::SoftBreak | Event::HardBreak => {
				if let Some((_, buf)) = current.as_mut() {
					buf.push(' ');
				}
			}
			Event::End(TagEnd::Heading(_)) => {
				let Some((explicit_id, text)) = current.take() else {
					continue;
				};
				let text = text.trim();
				if text.is_empty() {
					continue;
				}
				let id = slugs.unique(explicit_id.unwrap_or_else(|| slugify(text)));
				headings.push(Candidate::new(id, text));
			}
			_ => {}
		}
	}

	tracing::debug!(count = headings.len(), "Extracted document headings");
	headings
}

/// Lowercases, keeps alphanumerics and `_`, turns whitespace and `-` into `-`, drops the rest.
pub fn slugify(text: &str) -> String {
	let mut slug = String::with_capacity(text.len());
	for ch in text.trim().chars() {
		if ch.is_alphanumeric() || ch == '_' {
			slug.extend(ch.to_lowercase());
		} else if ch.is_whitespace() || ch == '-' {
			slug.push('-');
		}
	}
	slug
}

#[derive(Default)]
struct SlugSet {
	seen: HashMap<String, usize>,
}

impl SlugSet {
	fn unique(&mut self, slug: String) -> String {
		let base = if slug.is_empty() { EMPTY_SLUG.to_string() } else { slug };
		let mut n = match self.seen.get(&base) {
			None => {
				self.seen.insert(base.clone(), 0);
				return base;
			}
			Some(&count) => count,
		};
		loop {
			n += 1;
			let candidate = format!("{base}-{n}");
			if !self.seen.contains_key(&candidate) {
				self.seen.insert(base, n);
				self.seen.insert(candidate.clone(), 0);
				return candidate;
			}
		}
	}
}
