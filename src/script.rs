use crate::document::{Document, QuoteEscape};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptOptions {
	/// Name of the variable holding the escaped string
	pub variable: String,
	pub quotes: QuoteEscape,
}

impl Default for ScriptOptions {
	fn default() -> Self {
		Self {
			variable: String::from("ansi"),
			quotes: QuoteEscape::default(),
		}
	}
}

/// Wraps documents into a snippet that writes them to an xterm.js terminal named `term`.
///
/// Documents are joined with an escaped `\r\n`.
pub fn render(documents: &[Document], options: &ScriptOptions) -> String {
	let text = documents
		.iter()
		.map(|document| document.js_with(options.quotes))
		.collect::<Vec<String>>()
		.join("\\r\\n");

	format!(
		"const {variable} = \"{text}\";\n\nterm.writeln({variable});\n",
		variable = options.variable
	)
}
