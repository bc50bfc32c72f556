use crate::error::FormatError;

const IMAGE_BEGIN: &str = "<!-- IMAGE BEGINS HERE -->";
const IMAGE_END: &str = "<!-- IMAGE ENDS HERE -->";

/// Literal rewrites applied in order before anything else is looked at
const REPLACEMENTS: &[(&str, &str)] = &[
	("\n", ""),
	("\r", ""),
	("</body>", ""),
	("</html>", ""),
	("<pre>", ""),
	("</pre>", ""),
	("&nbsp;", " "),
	("<DIV>", "<div>"),
	("</DIV>", "</div>"),
	("<SPAN", "<span"),
	("</SPAN", "</span"),
	("<FONT", "<font"),
	("</FONT>", "</font>"),
	("<br/>", "<br>"),
	("<br />", "<br>"),
	("<BR>", "<br>"),
	("<BR/>", "<br>"),
	("<BR />", "<br>"),
];

/// Canonicalizes tag variants and cuts the markup down to the fragment holding the colored text.
///
/// The result is a flat run of `<div>` blocks or `<span>`/`<font>` runs separated by `<br>`.
pub fn normalize(html: &str) -> Result<String, FormatError> {
	let mut html = REPLACEMENTS
		.iter()
		.fold(html.to_string(), |html, (from, to)| html.replace(from, to));

	if let Some(body_start) = html.find("<body") {
		let body_end = html[body_start..].find('>').ok_or(FormatError::UnterminatedBody)?;
		tracing::debug!("skipping markup before <body>");
		html.drain(..body_start + body_end + 1);
	}

	if let Some(begin) = html.find(IMAGE_BEGIN) {
		tracing::debug!("isolating image comment block");
		html.drain(..begin + IMAGE_BEGIN.len());
		if let Some(end) = html.find(IMAGE_END) {
			html.truncate(end);
		}
	}

	if html.starts_with("<font size=") {
		if let Some(tag_end) = html.find('>') {
			tracing::debug!("unwrapping <font size=...> wrapper");
			html.drain(..=tag_end);
			if html.ends_with("</font>") {
				html.truncate(html.len() - "</font>".len());
			}
		}
	}

	Ok(html)
}
