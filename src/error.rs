/// Raised whenever the input is not in the supported HTML dialect.
///
/// Every variant carries the text that could not be understood so the message
/// points at the offending markup.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
	#[error("found '<body' but could not find closing '>'")]
	UnterminatedBody,

	#[error("line: '{fragment}', can't find <span> or <font>")]
	NoColorTag { fragment: String },

	#[error("fragment: '{fragment} ...', unhandled html tag")]
	UnhandledTag { fragment: String },

	#[error("fragment: '{fragment} ...', missing '>'")]
	MissingTagEnd { fragment: String },

	#[error("can't find 'color' in '{attributes}'")]
	MissingColor { attributes: String },

	#[error("missing ';' or '\"' after color in '{attributes}'")]
	UnterminatedColor { attributes: String },

	#[error("unknown color '{value}', expected 3 or 6 hex digits")]
	HexLength { value: String },

	#[error("error decoding color '{value}': {source}")]
	InvalidHex {
		value: String,
		#[source]
		source: hex::FromHexError,
	},

	#[error("unknown color '{value}'")]
	UnknownColor { value: String },

	#[error("fragment: '{fragment} ...': {source}")]
	Fragment {
		fragment: String,
		#[source]
		source: Box<FormatError>,
	},
}
