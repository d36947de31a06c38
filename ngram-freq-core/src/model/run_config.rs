use std::path::{Path, PathBuf};

use super::frequency_table::FrequencyTable;
use super::multi_resolution::write_ngrams_up_to;
use super::tokenizer::read_tokens;
use crate::error::{NgramError, Result};
use crate::io::write_table;

/// Window size used when none is given.
pub const DEFAULT_N: usize = 2;

/// The three validated inputs of a run.
///
/// # Invariants
/// - `input` was an existing regular file when the config was built
/// - `n >= 1`
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
	input: PathBuf,
	output: PathBuf,
	n: usize,
}

impl RunConfig {
	/// Validates raw command-line values.
	///
	/// `n` is taken signed so that `--n -1` is reported like `--n 0`.
	///
	/// # Errors
	/// Returns `Usage` if `n < 1` or if `input` is not an existing regular file.
	pub fn new<PI, PO>(input: PI, output: PO, n: i64) -> Result<Self>
	where
		PI: AsRef<Path>,
		PO: AsRef<Path>,
	{
		let n = usize::try_from(n)
			.ok()
			.filter(|n| *n >= 1)
			.ok_or_else(|| NgramError::Usage(format!("n must be >= 1, got {n}")))?;

		let input = input.as_ref();
		if !input.is_file() {
			return Err(NgramError::Usage(format!("input file does not exist: {}", input.display())));
		}

		Ok(Self { input: input.to_path_buf(), output: output.as_ref().to_path_buf(), n })
	}

	pub fn input(&self) -> &Path {
		&self.input
	}

	pub fn output(&self) -> &Path {
		&self.output
	}

	/// Window size, or maximum window size in multi-resolution runs.
	pub fn n(&self) -> usize {
		self.n
	}

	/// Tokenizes the input and writes the n-gram table of size `n` to `output`.
	pub fn run_single(&self) -> Result<()> {
		let tokens = read_tokens(&self.input)?;
		let table = FrequencyTable::from_tokens(&tokens, self.n)?;
		write_table(&table, &self.output)
	}

	/// Tokenizes the input and writes one table per size from 1 to `n`,
	/// using `output` as the base path.
	///
	/// Returns the written table paths in ascending size.
	pub fn run_multi(&self) -> Result<Vec<PathBuf>> {
		let tokens = read_tokens(&self.input)?;
		write_ngrams_up_to(&tokens, self.n, &self.output)
	}
}
