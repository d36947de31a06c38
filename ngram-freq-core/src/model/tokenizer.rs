use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;
use crate::io::read_file;

/// A maximal run of word characters, or one single non-word, non-space character.
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
	// Compiled from a constant, cannot fail
	Regex::new(r"\w+|[^\w\s]").expect("token pattern is valid")
});

/// Splits one line into tokens.
///
/// - Leading/trailing whitespace is trimmed
/// - A blank line yields nothing
/// - `"this, but"` yields `"this"`, `","`, `"but"`
///
/// Word characters follow Unicode `\w` (letters, marks, digits, connector punctuation),
/// so `"naïve_2"` is a single token. Combining marks count as word characters too:
/// a decomposed `"e\u{301}"` stays one token with its accent.
pub fn tokenize_line(line: &str) -> impl Iterator<Item = &str> {
	TOKEN_PATTERN.find_iter(line.trim()).map(|m| m.as_str())
}

/// Tokenizes a whole text, line by line, into one flat sequence.
///
/// No boundary token is inserted between lines: the last token of a line
/// and the first token of the next one are adjacent.
pub fn tokenize_text(text: &str) -> Vec<String> {
	text.lines()
		.flat_map(tokenize_line)
		.map(str::to_owned)
		.collect()
}

/// Reads a UTF-8 text file and returns its tokens in file order.
///
/// # Errors
/// - `FileAccess` if the file cannot be opened or read
/// - `Encoding` if its bytes are not valid UTF-8
pub fn read_tokens<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	let lines = read_file(&path)?;
	let tokens: Vec<String> = lines
		.iter()
		.flat_map(|line| tokenize_line(line))
		.map(str::to_owned)
		.collect();
	log::debug!("read {} tokens from {} lines of {}", tokens.len(), lines.len(), path.as_ref().display());
	Ok(tokens)
}
