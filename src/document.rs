use crate::color::Color;

pub const RESET: &str = "\x1b[0m";

/// How quotes are escaped when ANSI output is embedded in a script string literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuoteEscape {
	/// `'` => `\x27`, `"` => `\x22`
	#[default]
	Hex,
	/// `'` => `\'`, `"` => `\"`
	Backslash,
}

/// Escapes text so it can sit inside either a single or double quoted script string
pub fn escape_js(text: &str, quotes: QuoteEscape) -> String {
	let mut escaped = String::with_capacity(text.len() * 2);

	// a single pass means backslashes we introduce are never escaped twice
	for c in text.chars() {
		match c {
			'\\' => escaped.push_str("\\\\"),
			'\'' => escaped.push_str(match quotes {
				QuoteEscape::Hex => "\\x27",
				QuoteEscape::Backslash => "\\'",
			}),
			'"' => escaped.push_str(match quotes {
				QuoteEscape::Hex => "\\x22",
				QuoteEscape::Backslash => "\\\"",
			}),
			'\n' => escaped.push_str("\\r\\n"),
			'\r' => escaped.push_str("\\r"),
			'\x1b' => escaped.push_str("\\x1b"),
			_ => escaped.push(c),
		}
	}

	escaped
}

/// A run of same colored text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
	pub text: String,
	pub color: Color,
}

impl Segment {
	pub fn new(text: impl Into<String>, color: Color) -> Self {
		Self {
			text: text.into(),
			color,
		}
	}

	pub fn is_blank(&self) -> bool {
		self.text.trim().is_empty()
	}
}

/// One row of terminal output
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
	pub segments: Vec<Segment>,
}

impl Line {
	pub fn new(segments: Vec<Segment>) -> Self {
		Self { segments }
	}

	/// Length of the text in bytes, not display width
	pub fn text_len(&self) -> usize {
		self.segments.iter().map(|segment| segment.text.len()).sum()
	}

	/// A line without segments, see [`Line::text_len`] for the text
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Prepends `n` spaces as a new default colored segment
	pub fn left_pad(&mut self, n: usize) {
		self.segments.insert(0, Segment::new(" ".repeat(n), Color::default()));
	}

	/// Each segment's color followed by its text.
	///
	/// There is no reset between segments since the next color overwrites the previous one.
	pub fn ansi(&self) -> String {
		let mut output = String::new();
		for segment in &self.segments {
			output.push_str(&segment.color.ansi());
			output.push_str(&segment.text);
		}
		output
	}

	pub fn js(&self) -> String {
		self.js_with(QuoteEscape::default())
	}

	/// The escaped ANSI output of this line followed by a reset so lines can be emitted independently
	pub fn js_with(&self, quotes: QuoteEscape) -> String {
		escape_js(&format!("{}{RESET}", self.ansi()), quotes)
	}
}

impl std::fmt::Display for Line {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for segment in &self.segments {
			f.write_str(&segment.text)?;
		}
		Ok(())
	}
}

/// The parsed HTML, see [`crate::convert`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
	pub lines: Vec<Line>,
}

impl Document {
	pub fn new(lines: Vec<Line>) -> Self {
		Self { lines }
	}

	/// The longest line in bytes
	pub fn max_length(&self) -> usize {
		self.lines.iter().map(Line::text_len).max().unwrap_or(0)
	}

	/// Centers all lines within `width` by left padding them.
	///
	/// Content wider than `width` is left untouched.
	pub fn pad(&mut self, width: usize) {
		let padding = width.saturating_sub(self.max_length()) / 2;
		if padding == 0 {
			return;
		}

		tracing::debug!(width, padding, "padding document");
		for line in &mut self.lines {
			line.left_pad(padding);
		}
	}

	/// Truecolor ANSI output with a single reset at the very end
	pub fn ansi(&self) -> String {
		let mut output = String::new();
		for line in &self.lines {
			output.push_str(&line.ansi());
			output.push('\n');
		}
		output.push_str(RESET);
		output
	}

	/// The ANSI output as an unquoted script string, see [`QuoteEscape::Hex`]
	pub fn js(&self) -> String {
		self.js_with(QuoteEscape::default())
	}

	pub fn js_with(&self, quotes: QuoteEscape) -> String {
		escape_js(&self.ansi(), quotes)
	}
}

/// Text only output without any escape sequences
impl std::fmt::Display for Document {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		for line in &self.lines {
			writeln!(f, "{line}")?;
		}
		Ok(())
	}
}
