use crate::document::Document;

/// Pads all documents so they are centered on a shared width.
///
/// The width is the largest of `min_width` and every document's [`Document::max_length`], so
/// passing `0` centers the documents against the widest of them.
pub fn center(min_width: usize, documents: &mut [Document]) -> usize {
	let width = documents.iter().map(Document::max_length).fold(min_width, usize::max);

	for document in documents.iter_mut() {
		document.pad(width);
	}

	width
}

#[cfg(test)]
mod test {
	use super::*;
	use crate::{
		color::Color,
		document::{Line, Segment},
	};
	use pretty_assertions::assert_eq;

	fn document(lines: &[&str]) -> Document {
		Document::new(
			lines
				.iter()
				.map(|text| Line::new(vec![Segment::new(*text, Color::WHITE)]))
				.collect(),
		)
	}

	#[test]
	fn center_min_width_test() {
		let mut documents = [document(&["ab", "abcd"]), document(&["abcdef"])];

		assert_eq!(center(10, &mut documents), 10);
		assert_eq!(documents[0].to_string(), "   ab\n   abcd\n");
		assert_eq!(documents[1].to_string(), "  abcdef\n");
	}

	#[test]
	fn center_uniform_width_test() {
		let mut documents = [document(&["abcd"]), document(&["abcd", "ab"])];

		center(12, &mut documents);
		for document in &documents {
			assert_eq!(document.max_length(), 8);
		}

		let mut documents = [document(&["abcdef"]), document(&["ab"])];
		center(10, &mut documents);
		assert_eq!(documents[0].max_length() + 2, 10);
		assert_eq!(documents[1].max_length() + 4, 10);
	}

	#[test]
	fn center_widest_document_test() {
		let mut documents = [document(&["abcdefgh"]), document(&["ab"])];

		assert_eq!(center(0, &mut documents), 8);
		assert_eq!(documents[0], document(&["abcdefgh"]));
		assert_eq!(documents[1].to_string(), "   ab\n");
	}

	#[test]
	fn center_empty_test() {
		assert_eq!(center(5, &mut []), 5);
	}
}
