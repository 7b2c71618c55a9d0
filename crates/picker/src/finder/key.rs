//! Key events understood by the finder.

/// Key modifiers (Ctrl, Alt, Shift, Meta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	/// Whether Ctrl is held.
	pub ctrl: bool,
	/// Whether Alt is held.
	pub alt: bool,
	/// Whether Shift is held.
	pub shift: bool,
	/// Whether Meta (Cmd/Super) is held.
	pub meta: bool,
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
		meta: false,
	};

	/// Only Ctrl pressed.
	pub const CTRL: Self = Self {
		ctrl: true,
		alt: false,
		shift: false,
		meta: false,
	};

	/// Only Shift pressed.
	pub const SHIFT: Self = Self {
		ctrl: false,
		alt: false,
		shift: true,
		meta: false,
	};

	/// Returns true if no modifiers are set.
	pub fn is_empty(self) -> bool {
		!self.ctrl && !self.alt && !self.shift && !self.meta
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	Char(char),
	Backspace,
	Enter,
	Escape,
	Up,
	Down,
	/// Keys that neither edit text nor navigate (modifier presses, function keys).
	Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	pub const fn char(ch: char) -> Self {
		Self::new(KeyCode::Char(ch))
	}

	pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
		self.modifiers = modifiers;
		self
	}

	/// Parses one token of a key script: `<esc>`, `<enter>`, `<up>`, `<down>`, `<bs>`, `<shift>`,
	/// `<C-x>` or a literal character.
	pub fn parse(token: &str) -> Option<Self> {
		let key = match token {
			"<esc>" => Self::new(KeyCode::Escape),
			"<enter>" | "<cr>" => Self::new(KeyCode::Enter),
			"<up>" => Self::new(KeyCode::Up),
			"<down>" => Self::new(KeyCode::Down),
			"<bs>" => Self::new(KeyCode::Backspace),
			"<space>" => Self::char(' '),
			"<shift>" => Self::new(KeyCode::Other).with_modifiers(Modifiers::SHIFT),
			_ => {
				if let Some(inner) = token.strip_prefix("<C-").and_then(|rest| rest.strip_suffix('>')) {
					let mut chars = inner.chars();
					return match (chars.next(), chars.next()) {
						(Some(ch), None) => Some(Self::char(ch).with_modifiers(Modifiers::CTRL)),
						_ => None,
					};
				}
				let mut chars = token.chars();
				match (chars.next(), chars.next()) {
					(Some(ch), None) => Self::char(ch),
					_ => return None,
				}
			}
		};
		Some(key)
	}
}
