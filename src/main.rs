use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use htmlterm::{Document, QuoteEscape, ScriptOptions};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Format {
	/// Truecolor ANSI escape sequences
	#[default]
	Ansi,
	/// A script writing the ANSI output to an xterm.js terminal
	Js,
	/// Text without colors
	Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
enum Quotes {
	#[default]
	Hex,
	Backslash,
}

impl From<Quotes> for QuoteEscape {
	fn from(quotes: Quotes) -> Self {
		match quotes {
			Quotes::Hex => QuoteEscape::Hex,
			Quotes::Backslash => QuoteEscape::Backslash,
		}
	}
}

/// Convert colored HTML ASCII art into terminal output
#[derive(Debug, Parser)]
#[command(name = "htmlterm", version, arg_required_else_help(true))]
struct Cli {
	/// HTML files to convert
	#[arg(required = true)]
	files: Vec<PathBuf>,

	#[arg(long, value_enum, default_value_t = Format::Ansi)]
	format: Format,

	/// Shorthand for `--format js`
	#[arg(long, conflicts_with = "format")]
	js: bool,

	/// Center all files using at least this width
	#[arg(long, default_value_t = 0)]
	width: usize,

	/// How quotes are escaped in js output
	#[arg(long, value_enum, default_value_t = Quotes::Hex)]
	quotes: Quotes,

	/// Variable name used in js output
	#[arg(long = "var", default_value = "ansi")]
	variable: String,

	/// Log to stderr, repeat for more detail
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	fn format(&self) -> Format {
		if self.js { Format::Js } else { self.format }
	}

	fn log_level(&self) -> tracing::Level {
		match self.verbose {
			0 => tracing::Level::WARN,
			1 => tracing::Level::INFO,
			2 => tracing::Level::DEBUG,
			_ => tracing::Level::TRACE,
		}
	}
}

fn render(documents: &[Document], cli: &Cli) -> String {
	match cli.format() {
		Format::Ansi => documents.iter().map(Document::ansi).collect(),
		Format::Plain => documents.iter().map(Document::to_string).collect(),
		Format::Js => htmlterm::script::render(
			documents,
			&ScriptOptions {
				variable: cli.variable.clone(),
				quotes: cli.quotes.into(),
			},
		),
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_max_level(cli.log_level())
		.init();

	let mut documents = cli
		.files
		.iter()
		.map(|path| {
			let html = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
			tracing::info!(file = %path.display(), "converting");
			htmlterm::convert(&html).with_context(|| format!("Failed to convert {}", path.display()))
		})
		.collect::<Result<Vec<Document>>>()?;

	if cli.width != 0 {
		let width = htmlterm::center(cli.width, &mut documents);
		tracing::info!(width, "centered documents");
	}

	print!("{}", render(&documents, &cli));

	Ok(())
}

#[cfg(test)]
mod test {
	use super::*;
	use htmlterm::{Color, Line, Segment};
	use pretty_assertions::assert_eq;

	fn documents() -> Vec<Document> {
		vec![
			Document::new(vec![Line::new(vec![Segment::new("a", Color::WHITE)])]),
			Document::new(vec![Line::new(vec![Segment::new("b'", Color::BLACK)])]),
		]
	}

	#[test]
	fn cli_defaults_test() {
		let cli = Cli::try_parse_from(["htmlterm", "a.html", "b.html"]).unwrap();

		assert_eq!(cli.files, vec![PathBuf::from("a.html"), PathBuf::from("b.html")]);
		assert_eq!(cli.format(), Format::Ansi);
		assert_eq!(cli.width, 0);
		assert_eq!(cli.quotes, Quotes::Hex);
		assert_eq!(cli.variable, "ansi");
		assert_eq!(cli.log_level(), tracing::Level::WARN);
	}

	#[test]
	fn cli_flags_test() {
		let cli = Cli::try_parse_from(["htmlterm", "--js", "--width", "80", "-vv", "a.html"]).unwrap();

		assert_eq!(cli.format(), Format::Js);
		assert_eq!(cli.width, 80);
		assert_eq!(cli.log_level(), tracing::Level::DEBUG);

		assert!(Cli::try_parse_from(["htmlterm"]).is_err());
		assert!(Cli::try_parse_from(["htmlterm", "--js", "--format", "plain", "a.html"]).is_err());
	}

	#[test]
	fn render_ansi_test() {
		let cli = Cli::try_parse_from(["htmlterm", "a.html"]).unwrap();

		assert_eq!(
			render(&documents(), &cli),
			"\x1b[38;2;255;255;255ma\n\x1b[0m\x1b[38;2;0;0;0mb'\n\x1b[0m"
		);
	}

	#[test]
	fn render_plain_test() {
		let cli = Cli::try_parse_from(["htmlterm", "--format", "plain", "a.html"]).unwrap();

		assert_eq!(render(&documents(), &cli), "a\nb'\n");
	}

	#[test]
	fn render_js_test() {
		let cli = Cli::try_parse_from(["htmlterm", "--js", "--quotes", "backslash", "--var", "art", "a.html"]).unwrap();

		assert_eq!(
			render(&documents(), &cli),
			"const art = \"\\x1b[38;2;255;255;255ma\\r\\n\\x1b[0m\\r\\n\\x1b[38;2;0;0;0mb\\'\\r\\n\\x1b[0m\";\n\nterm.writeln(art);\n"
		);
	}
}
