use std::cmp::Reverse;

use indexmap::IndexMap;

use super::ngram::{ngrams, NGram};
use crate::error::Result;

/// Occurrence counts of the distinct n-grams of a token sequence.
///
/// # Invariants
/// - Every stored count is >= 1 (absent keys count as zero)
/// - Keys are kept in first-occurrence order, which breaks ties in [`most_common`]
///
/// [`most_common`]: FrequencyTable::most_common
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrequencyTable<'a> {
	counts: IndexMap<NGram<'a>, usize>,
}

impl<'a> FrequencyTable<'a> {
	/// Counts all n-grams of size `n` in `tokens`.
	///
	/// # Errors
	/// Returns `InvalidArgument` if `n == 0`.
	pub fn from_tokens(tokens: &'a [String], n: usize) -> Result<Self> {
		let table = Self::from_ngrams(ngrams(tokens, n)?);
		log::debug!("n={n}: {} distinct of {} n-grams", table.len(), table.total());
		Ok(table)
	}

	/// Counts the n-grams of any stream, in stream order.
	pub fn from_ngrams<I>(grams: I) -> Self
	where
		I: IntoIterator<Item = NGram<'a>>,
	{
		let mut table = Self::default();
		for gram in grams {
			table.add(gram);
		}
		table
	}

	/// Records one occurrence of `gram`.
	pub fn add(&mut self, gram: NGram<'a>) {
		*self.counts.entry(gram).or_insert(0) += 1;
	}

	/// Count of `gram`, zero if never seen.
	pub fn get(&self, gram: &[String]) -> usize {
		self.counts.get(gram).copied().unwrap_or(0)
	}

	/// Number of distinct n-grams.
	pub fn len(&self) -> usize {
		self.counts.len()
	}

	pub fn is_empty(&self) -> bool {
		self.counts.is_empty()
	}

	/// Sum of all counts, i.e. the number of n-grams that were counted.
	pub fn total(&self) -> usize {
		self.counts.values().sum()
	}

	/// Entries in first-occurrence order.
	pub fn iter(&self) -> impl Iterator<Item = (NGram<'a>, usize)> + '_ {
		self.counts.iter().map(|(gram, count)| (*gram, *count))
	}

	/// Entries by descending count.
	///
	/// The sort is stable over first-occurrence order, so equal counts keep
	/// the order in which their n-grams were first seen.
	pub fn most_common(&self) -> Vec<(NGram<'a>, usize)> {
		let mut entries: Vec<_> = self.iter().collect();
		entries.sort_by_key(|&(_, count)| Reverse(count));
		entries
	}
}
