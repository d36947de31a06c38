use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{NgramError, Result};
use crate::model::frequency_table::FrequencyTable;

/// Extension used when the base output path has none.
pub const DEFAULT_EXTENSION: &str = "tsv";

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
/// - Fails with `Encoding` rather than replacing invalid bytes
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> Result<Vec<String>> {
	let path = filename.as_ref();
	let bytes = fs::read(path).map_err(|e| NgramError::file_access(path, e))?;
	let contents = String::from_utf8(bytes).map_err(|_| NgramError::Encoding { path: path.to_path_buf() })?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Builds the per-size output path by inserting `_n<k>` before the extension.
///
/// Example:
/// `out/result.tsv` + `2` → `out/result_n2.tsv`
/// `out/result` + `2` → `out/result_n2.tsv`
pub fn sized_output_path<P: AsRef<Path>>(base: P, k: usize) -> Result<PathBuf> {
	let base = base.as_ref();
	let extension = base
		.extension()
		.map(|e| e.to_string_lossy().into_owned())
		.unwrap_or_else(|| DEFAULT_EXTENSION.to_owned());
	with_stem_suffix(base, &format!("_n{k}.{extension}"))
}

/// Builds the completion marker path for size `k`.
///
/// Example:
/// `out/result.tsv` + `2` → `out/result_n2_finished.txt`
pub fn finished_marker_path<P: AsRef<Path>>(base: P, k: usize) -> Result<PathBuf> {
	with_stem_suffix(base.as_ref(), &format!("_n{k}_finished.txt"))
}

/// Replaces the file name of `base` with its stem followed by `suffix`.
fn with_stem_suffix(base: &Path, suffix: &str) -> Result<PathBuf> {
	let stem = base
		.file_stem()
		.ok_or_else(|| NgramError::InvalidArgument(format!("output path {} has no file name", base.display())))?;

	let mut name = OsString::from(stem);
	name.push(suffix);
	Ok(base.with_file_name(name))
}

/// Creates the parent directory of `path` and its missing ancestors.
///
/// Does nothing if it already exists or if `path` has no parent component.
pub fn ensure_parent_dir<P: AsRef<Path>>(path: P) -> Result<()> {
	match path.as_ref().parent() {
		Some(parent) if !parent.as_os_str().is_empty() => {
			fs::create_dir_all(parent).map_err(|e| NgramError::file_access(parent, e))
		}
		_ => Ok(()),
	}
}

/// Writes one `tokens<TAB>count` line per distinct n-gram, most common first.
///
/// Tokens are joined by a single space. No header, no trailing blank line.
pub fn write_records<W: Write>(table: &FrequencyTable<'_>, mut writer: W) -> io::Result<()> {
	for (gram, count) in table.most_common() {
		writeln!(writer, "{}\t{}", gram.join(" "), count)?;
	}
	writer.flush()
}

/// Writes a frequency table to `path`, replacing any existing file.
///
/// # Errors
/// Returns `FileAccess` if the file cannot be created or written,
/// e.g. when its parent directory is missing.
pub fn write_table<P: AsRef<Path>>(table: &FrequencyTable<'_>, path: P) -> Result<()> {
	let path = path.as_ref();
	let file = File::create(path).map_err(|e| NgramError::file_access(path, e))?;
	write_records(table, BufWriter::new(file)).map_err(|e| NgramError::file_access(path, e))?;
	log::info!("wrote {} n-grams to {}", table.len(), path.display());
	Ok(())
}

/// Reads back a file produced by [`write_table`].
///
/// Returns `(space-joined tokens, count)` pairs in file order.
///
/// # Errors
/// - `FileAccess` / `Encoding` as for any input file
/// - `MalformedRecord` if a line has no tab or a non-numeric count
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<(String, usize)>> {
	let path = path.as_ref();
	let malformed = |line: usize, reason: &str| NgramError::MalformedRecord {
		path: path.to_path_buf(),
		line,
		reason: reason.to_owned(),
	};

	read_file(path)?
		.into_iter()
		.enumerate()
		.map(|(i, line)| -> Result<(String, usize)> {
			// Split on the last tab: tokens never contain one, counts never do either
			let (gram, count) = line.rsplit_once('\t').ok_or_else(|| malformed(i + 1, "missing tab"))?;
			let count = count.parse().map_err(|_| malformed(i + 1, "count is not a number"))?;
			Ok((gram.to_owned(), count))
		})
		.collect()
}
