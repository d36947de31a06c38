use std::iter::FusedIterator;
use std::slice::Windows;

use crate::error::{NgramError, Result};

/// An n-gram: `n` consecutive tokens borrowed from a token sequence.
///
/// Two n-grams are equal iff every position holds an equal token.
pub type NGram<'a> = &'a [String];

/// Single-pass iterator over the n-grams of a token sequence.
///
/// Windows are produced left to right and overlap by `n - 1` tokens.
/// Once exhausted it stays exhausted; call [`ngrams`] again to re-iterate.
#[derive(Debug, Clone)]
pub struct NGrams<'a> {
	windows: Windows<'a, String>,
}

/// Returns every contiguous window of `n` tokens.
///
/// A sequence of `L` tokens yields `L - n + 1` windows, or none when `n > L`.
///
/// # Errors
/// Returns `InvalidArgument` if `n == 0`, whatever the tokens are.
pub fn ngrams(tokens: &[String], n: usize) -> Result<NGrams<'_>> {
	NgramError::check_window(n)?;
	Ok(NGrams { windows: tokens.windows(n) })
}

/// Number of n-grams of size `n` in a sequence of `len` tokens.
pub fn ngram_count(len: usize, n: usize) -> usize {
	(len + 1).saturating_sub(n)
}

impl<'a> Iterator for NGrams<'a> {
	type Item = NGram<'a>;

	fn next(&mut self) -> Option<Self::Item> {
		self.windows.next()
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.windows.size_hint()
	}
}

impl ExactSizeIterator for NGrams<'_> {}

impl FusedIterator for NGrams<'_> {}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(words: &[&str]) -> Vec<String> {
		words.iter().map(|w| w.to_string()).collect()
	}

	#[test]
	fn windows_overlap() {
		let t = tokens(&["a", "b", "c", "d"]);
		let grams: Vec<_> = ngrams(&t, 2).unwrap().collect();
		assert_eq!(grams, [&t[0..2], &t[1..3], &t[2..4]]);
	}

	#[test]
	fn count_matches_formula() {
		let t = tokens(&["x", "y", "x", "y", "z"]);
		for n in 1..=7 {
			let grams = ngrams(&t, n).unwrap();
			assert_eq!(grams.len(), ngram_count(t.len(), n));
			assert_eq!(grams.count(), ngram_count(t.len(), n));
		}
		assert_eq!(ngram_count(5, 5), 1);
		assert_eq!(ngram_count(5, 6), 0);
	}

	#[test]
	fn zero_window_fails_even_on_empty_input() {
		assert!(matches!(ngrams(&[], 0), Err(NgramError::InvalidArgument(_))));
		assert!(matches!(ngrams(&tokens(&["a"]), 0), Err(NgramError::InvalidArgument(_))));
	}

	#[test]
	fn window_longer_than_input_is_empty() {
		let t = tokens(&["only", "two"]);
		assert_eq!(ngrams(&t, 3).unwrap().next(), None);
		assert_eq!(ngrams(&[], 1).unwrap().next(), None);
	}

	#[test]
	fn exhausted_iterator_stays_exhausted() {
		let t = tokens(&["a", "b"]);
		let mut grams = ngrams(&t, 2).unwrap();
		assert!(grams.next().is_some());
		assert!(grams.next().is_none());
		assert!(grams.next().is_none());
	}
}
