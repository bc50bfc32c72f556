use crate::{
	color::Color,
	document::{Document, Line, Segment},
	entities,
	error::FormatError,
};

const DIV_OPEN: &str = "<div>";
const DIV_CLOSE: &str = "</div>";
const BREAK: &str = "<br>";

/// Splits normalized HTML into lines and each line into colored segments.
///
/// Everything inside a `<div>` block is one line, otherwise lines are separated by `<br>`.
/// Blank lines at the start and end of the document are dropped.
pub fn parse(html: &str) -> Result<Document, FormatError> {
	let mut document = Document::default();
	let mut cursor = 0;

	loop {
		let rest = &html[cursor..];

		let (fragment, next) = match rest.find(DIV_OPEN) {
			Some(start) => {
				let content_start = start + DIV_OPEN.len();
				let content = &rest[content_start..];
				let end = content.find(DIV_CLOSE).unwrap_or(content.len());
				let mut next = content_start + end + DIV_CLOSE.len();
				// the closing div already ended this line
				if rest.get(next..).is_some_and(|after| after.starts_with(BREAK)) {
					next += BREAK.len();
				}
				(&content[..end], next)
			},
			None => {
				let end = rest.find(BREAK).unwrap_or(rest.len());
				(&rest[..end], end + BREAK.len())
			},
		};

		let line = parse_line(fragment)?;
		tracing::trace!(line = document.lines.len(), segments = line.segments.len(), "parsed line");

		if !line.is_empty() || !document.lines.is_empty() {
			document.lines.push(line);
		}

		if next > rest.len() {
			break;
		}
		cursor += next;
	}

	while document.lines.last().is_some_and(Line::is_empty) {
		document.lines.pop();
	}

	Ok(document)
}

/// Parses the `<span>` or `<font>` runs of a single line
pub fn parse_line(fragment: &str) -> Result<Line, FormatError> {
	let mut line = Line::default();
	if fragment.is_empty() {
		return Ok(line);
	}

	let closing_tag = if fragment.contains("<span") {
		"</span>"
	} else if fragment.contains("<font") {
		"</font>"
	} else {
		return Err(FormatError::NoColorTag {
			fragment: fragment.to_string(),
		});
	};

	for piece in fragment.split_inclusive(closing_tag) {
		let piece = piece.trim();
		let piece = piece.strip_suffix("</font>").unwrap_or(piece);
		let piece = piece.strip_suffix("</span>").unwrap_or(piece);
		if piece.is_empty() {
			continue;
		}

		if !piece.starts_with("<font") && !piece.starts_with("<span") {
			return Err(FormatError::UnhandledTag {
				fragment: piece.to_string(),
			});
		}

		let tag_end = piece.find('>').ok_or_else(|| FormatError::MissingTagEnd {
			fragment: piece.to_string(),
		})?;

		let text = entities::decode(&piece[tag_end + 1..]);
		if text.is_empty() {
			continue;
		}

		// both tag names are five bytes long
		let color = parse_color(&piece[5..tag_end]).map_err(|source| FormatError::Fragment {
			fragment: piece.to_string(),
			source: Box::new(source),
		})?;

		if let Some(previous) = line.segments.last_mut() {
			if previous.color == color || (previous.is_blank() && text.trim().is_empty()) {
				previous.text.push_str(&text);
				continue;
			}
		}

		line.segments.push(Segment::new(text, color));
	}

	while line.segments.last().is_some_and(Segment::is_blank) {
		line.segments.pop();
	}

	Ok(line)
}

/// Finds the color in either a `color="..."` attribute or a `style="color:...;"` declaration
pub fn parse_color(attributes: &str) -> Result<Color, FormatError> {
	let start = attributes.find("color").ok_or_else(|| FormatError::MissingColor {
		attributes: attributes.to_string(),
	})?;

	let declaration = attributes[start..].replace('\'', "\"").replace("=\"", ":");
	let end = declaration.find([';', '"']).ok_or_else(|| FormatError::UnterminatedColor {
		attributes: attributes.to_string(),
	})?;

	let value = &declaration[..end];
	let value = value.strip_prefix("color:").unwrap_or(value).trim();

	value.parse()
}
