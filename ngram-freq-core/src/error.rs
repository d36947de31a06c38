use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = NgramError> = std::result::Result<T, E>;

/// Every failure a run can end with.
///
/// All variants are terminal: nothing in the crate retries.
#[derive(Debug, Error)]
pub enum NgramError {
	/// A window size or similar parameter was out of range.
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// Invalid or missing command-line input, detected before any output is produced.
	#[error("usage error: {0}")]
	Usage(String),

	/// The file (or directory) could not be opened, read, created or written.
	#[error("cannot access {}: {source}", path.display())]
	FileAccess {
		path: PathBuf,
		source: io::Error,
	},

	/// The input file is not valid UTF-8.
	#[error("{} is not valid UTF-8", path.display())]
	Encoding {
		path: PathBuf,
	},

	/// A line of a frequency file could not be parsed back.
	#[error("{}:{line}: malformed record ({reason})", path.display())]
	MalformedRecord {
		path: PathBuf,
		line: usize,
		reason: String,
	},
}

impl NgramError {
	/// Wraps an I/O error together with the path it happened on.
	pub fn file_access<P: AsRef<Path>>(path: P, source: io::Error) -> Self {
		Self::FileAccess { path: path.as_ref().to_path_buf(), source }
	}

	/// Checks a window size, failing with `InvalidArgument` when it is zero.
	pub(crate) fn check_window(n: usize) -> Result<()> {
		if n < 1 {
			return Err(Self::InvalidArgument("n must be >= 1".to_owned()));
		}
		Ok(())
	}
}
