use std::str::FromStr;

use crate::error::FormatError;

/// A 24bit truecolor foreground color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const BLACK: Color = Color::new(0, 0, 0);
	pub const WHITE: Color = Color::new(255, 255, 255);

	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// The truecolor SGR sequence that switches the terminal foreground to this color
	pub fn ansi(&self) -> String {
		format!("\x1b[38;2;{};{};{}m", self.r, self.g, self.b)
	}

	fn from_hex(digits: &str) -> Result<Self, FormatError> {
		let expanded;
		let digits = if digits.len() == 3 {
			// "abc" => "aabbcc"
			expanded = digits.chars().flat_map(|c| [c, c]).collect::<String>();
			expanded.as_str()
		} else {
			digits
		};

		if digits.len() != 6 {
			return Err(FormatError::HexLength {
				value: digits.to_string(),
			});
		}

		let bytes = hex::decode(digits).map_err(|source| FormatError::InvalidHex {
			value: digits.to_string(),
			source,
		})?;

		Ok(Self::new(bytes[0], bytes[1], bytes[2]))
	}
}

impl FromStr for Color {
	type Err = FormatError;

	/// Parses `#rgb`, `#rrggbb` or one of the named colors `black` and `white`
	fn from_str(value: &str) -> Result<Self, Self::Err> {
		if let Some(digits) = value.strip_prefix('#') {
			return Self::from_hex(digits);
		}

		if value.eq_ignore_ascii_case("black") {
			Ok(Self::BLACK)
		} else if value.eq_ignore_ascii_case("white") {
			Ok(Self::WHITE)
		} else {
			Err(FormatError::UnknownColor {
				value: value.to_string(),
			})
		}
	}
}

impl std::fmt::Display for Color {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
	}
}
