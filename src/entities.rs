use std::borrow::Cow;

/// Decodes HTML character references found in segment text.
///
/// Covers the full HTML5 named reference table and numeric references. `&#0;` becomes U+FFFD
/// since a NUL byte must never reach the terminal. Anything unknown is kept as written.
pub fn decode(text: &str) -> String {
	let text = if text.contains("&#") {
		Cow::Owned(text.replace("&#0;", "\u{FFFD}").replace("&#x0;", "\u{FFFD}").replace("&#X0;", "\u{FFFD}"))
	} else {
		Cow::Borrowed(text)
	};

	match html_escape::decode_html_entities(&text) {
		Cow::Borrowed(text) => text.to_string(),
		Cow::Owned(decoded) if decoded.contains('\0') => decoded.replace('\0', "\u{FFFD}"),
		Cow::Owned(decoded) => decoded,
	}
}
