//! Turns the colored HTML produced by ASCII art sites into terminal output.
//!
//! Known to work with the markup of:
//! - <http://patorjk.com/text-color-fader/>
//! - <https://asciiart.club/>
//! - <https://www.text-image.com/convert/>
//!
//! ```
//! let document = htmlterm::convert("<span style=\"color:#ff0000\">Hi</span>").unwrap();
//! assert_eq!(document.to_string(), "Hi\n");
//! assert_eq!(document.ansi(), "\x1b[38;2;255;0;0mHi\n\x1b[0m");
//! ```

pub mod center;
pub mod color;
pub mod document;
pub mod entities;
pub mod error;
pub mod normalize;
pub mod parser;
pub mod script;

pub use center::center;
pub use color::Color;
pub use document::{Document, Line, QuoteEscape, Segment};
pub use error::FormatError;
pub use script::ScriptOptions;

/// Converts HTML into a [`Document`] that renders as plain text, ANSI or an xterm.js string.
///
/// Looks for `<span>` and `<font>` tags with a `color` attribute or a `style` declaring a color.
/// Content of a `<div>` is one line, otherwise `<br>` starts a new line.
pub fn convert(html: &str) -> Result<Document, FormatError> {
	let html = normalize::normalize(html)?;
	let document = parser::parse(&html)?;

	tracing::debug!(
		lines = document.lines.len(),
		max_length = document.max_length(),
		"converted document"
	);

	Ok(document)
}
