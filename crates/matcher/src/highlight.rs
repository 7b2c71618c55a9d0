use std::fmt;

/// A run of haystack text that is either entirely matched or entirely unmatched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
	pub text: String,
	pub highlighted: bool,
}

/// Haystack rendering as alternating matched and unmatched runs.
///
/// Adjacent segments never share the same `highlighted` flag and no segment is empty, so every
/// highlighted segment is a maximal run of consecutively matched characters. Concatenating the
/// segment texts yields the rendered haystack.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Highlighted {
	segments: Vec<Segment>,
}

impl Highlighted {
	/// Text without any highlighted run.
	pub fn plain(text: impl Into<String>) -> Self {
		let mut out = Self::default();
		out.push_str(&text.into(), false);
		out
	}

	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Concatenated text of all segments.
	pub fn text(&self) -> String {
		self.segments.iter().map(|segment| segment.text.as_str()).collect()
	}

	/// True when no run is highlighted.
	pub fn is_plain(&self) -> bool {
		self.segments.iter().all(|segment| !segment.highlighted)
	}

	/// Texts of the highlighted runs, in order.
	pub fn highlighted_text(&self) -> impl Iterator<Item = &str> {
		self.segments.iter().filter(|segment| segment.highlighted).map(|segment| segment.text.as_str())
	}

	pub(crate) fn push(&mut self, ch: char, highlighted: bool) {
		match self.segments.last_mut() {
			Some(last) if last.highlighted == highlighted => last.text.push(ch),
			_ => self.segments.push(Segment {
				text: ch.to_string(),
				highlighted,
			}),
		}
	}

	pub(crate) fn push_str(&mut self, text: &str, highlighted: bool) {
		if text.is_empty() {
			return;
		}
		match self.segments.last_mut() {
			Some(last) if last.highlighted == highlighted => last.text.push_str(text),
			_ => self.segments.push(Segment {
				text: text.to_string(),
				highlighted,
			}),
		}
	}
}

impl fmt::Display for Highlighted {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for segment in &self.segments {
			f.write_str(&segment.text)?;
		}
		Ok(())
	}
}
