//! Shared command-line layer for the `ngram-count` and `ngram-count-multi` binaries.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Args};
use env_logger::Env;
use log::{error, info};
use ngram_freq_core::{NgramError, RunConfig};
use ngram_freq_core::model::run_config::DEFAULT_N;

/// Exit status for invalid command-line input.
const USAGE_EXIT: u8 = 2;

/// Arguments common to both entry points.
#[derive(Args, Debug)]
pub struct CountArgs {
	/// Input text file (UTF-8)
	#[arg(long, value_name = "PATH")]
	pub input: PathBuf,

	/// Output TSV file (n-gram, count)
	#[arg(long, value_name = "PATH")]
	pub output: PathBuf,

	/// N-gram size
	#[arg(long, value_name = "N", default_value_t = DEFAULT_N as i64, allow_negative_numbers = true)]
	pub n: i64,

	/// Increase verbosity (-v, -vv)
	#[arg(short = 'v', long, action = ArgAction::Count)]
	pub verbose: u8,

	/// Decrease verbosity (-q, -qq)
	#[arg(short = 'q', long, action = ArgAction::Count)]
	pub quiet: u8,
}

impl CountArgs {
	/// Installs the logger, validates the arguments and runs `pipeline`.
	///
	/// Usage errors exit with status 2, any other failure with status 1.
	pub fn run<F, T>(self, pipeline: F) -> ExitCode
	where
		F: FnOnce(&RunConfig) -> ngram_freq_core::Result<T>,
	{
		init_logging(self.verbose, self.quiet);

		let result = RunConfig::new(&self.input, &self.output, self.n).and_then(|config| {
			info!("counting n-grams of {} (n={})", config.input().display(), config.n());
			pipeline(&config)
		});

		match result {
			Ok(_) => ExitCode::SUCCESS,
			Err(err @ NgramError::Usage(_)) => {
				error!("{err}");
				ExitCode::from(USAGE_EXIT)
			}
			Err(err) => {
				error!("{err}");
				ExitCode::FAILURE
			}
		}
	}
}

/// Sets up `env_logger` on stderr.
///
/// Defaults to `info`; `-q` lowers to warn/error, `-v` raises to debug/trace.
/// Without flags, `RUST_LOG` decides.
pub fn init_logging(verbose: u8, quiet: u8) {
	use log::LevelFilter;

	let level = match (quiet, verbose) {
		(0, 0) => None,
		(1, _) => Some(LevelFilter::Warn),
		(q, _) if q > 1 => Some(LevelFilter::Error),
		(_, 1) => Some(LevelFilter::Debug),
		_ => Some(LevelFilter::Trace),
	};

	let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
	builder.format_timestamp_millis();
	if let Some(level) = level {
		builder.filter_level(level);
	}
	let _ = builder.try_init();
}
