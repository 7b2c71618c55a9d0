use v_htmlescape::escape;

use crate::Highlighted;

/// Markers wrapped around every highlighted run when rendering [`Highlighted`] text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct HighlightMarkup {
	pub open: String,
	pub close: String,
}

impl Default for HighlightMarkup {
	fn default() -> Self {
		Self::new("<span class=hl>", "</span>")
	}
}

impl HighlightMarkup {
	pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
		Self {
			open: open.into(),
			close: close.into(),
		}
	}

	/// `[`/`]` markers, for terminals and logs.
	pub fn brackets() -> Self {
		Self::new("[", "]")
	}

	/// Renders as HTML: segment text is escaped, markers are inserted verbatim.
	pub fn render(&self, highlighted: &Highlighted) -> String {
		self.render_with(highlighted, |out, text| out.push_str(&escape(text).to_string()))
	}

	/// Renders without escaping segment text.
	pub fn render_unescaped(&self, highlighted: &Highlighted) -> String {
		self.render_with(highlighted, |out, text| out.push_str(text))
	}

	fn render_with(&self, highlighted: &Highlighted, mut write: impl FnMut(&mut String, &str)) -> String {
		let mut out = String::new();
		for segment in highlighted.segments() {
			if segment.highlighted {
				out.push_str(&self.open);
				write(&mut out, &segment.text);
				out.push_str(&self.close);
			} else {
				write(&mut out, &segment.text);
			}
		}
		out
	}
}
