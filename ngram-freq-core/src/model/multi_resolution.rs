use std::fs;
use std::path::{Path, PathBuf};

use super::frequency_table::FrequencyTable;
use crate::error::{NgramError, Result};
use crate::io::{ensure_parent_dir, finished_marker_path, sized_output_path, write_table};

/// Content of every `_n<k>_finished.txt` marker.
pub const FINISHED_MESSAGE: &str = "finished\n";

/// Writes one frequency file per window size, from 1 to `max_n`.
///
/// For `base = out/result.tsv` and size `k` this writes:
/// - `out/result_n<k>.tsv`: the frequency table (see [`write_table`])
/// - `out/result_n<k>_finished.txt`: a one-line completion marker
///
/// # Returns
/// The table paths, in ascending `k`.
///
/// # Errors
/// - `InvalidArgument` if `max_n == 0` or `base` has no file name, before touching the filesystem
/// - `FileAccess` if the directory or a file cannot be written
///
/// # Notes
/// - The output directory and its ancestors are created first; an existing one is fine.
/// - No rollback: when size `k` fails, files of sizes below `k` stay on disk.
pub fn write_ngrams_up_to<P: AsRef<Path>>(tokens: &[String], max_n: usize, base: P) -> Result<Vec<PathBuf>> {
	let base = base.as_ref();
	if max_n < 1 {
		return Err(NgramError::InvalidArgument("max_n must be >= 1".to_owned()));
	}

	// Reject a base without a file name before creating any directory
	let first_path = sized_output_path(base, 1)?;
	ensure_parent_dir(&first_path)?;

	// Sizes past the token count only add empty tables; do not reserve for them
	let mut written = Vec::with_capacity(max_n.min(tokens.len() + 1));
	for k in 1..=max_n {
		let table_path = if k == 1 { first_path.clone() } else { sized_output_path(base, k)? };
		write_table(&FrequencyTable::from_tokens(tokens, k)?, &table_path)?;

		let marker_path = finished_marker_path(base, k)?;
		fs::write(&marker_path, FINISHED_MESSAGE).map_err(|e| NgramError::file_access(&marker_path, e))?;
		log::debug!("n={k} done, marker at {}", marker_path.display());

		written.push(table_path);
	}

	Ok(written)
}
