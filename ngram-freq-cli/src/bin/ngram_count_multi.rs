use std::process::ExitCode;

use clap::Parser;
use log::info;
use ngram_freq_cli::CountArgs;

/// Counts the n-grams of every size from 1 to `--n` and writes one TSV per size,
/// named after `--output` (`out.tsv` → `out_n1.tsv`, `out_n2.tsv`, ...).
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[command(flatten)]
	args: CountArgs,
}

fn main() -> ExitCode {
	Cli::parse().args.run(|config| {
		let written = config.run_multi()?;
		info!("done: {} files", written.len());
		Ok(written)
	})
}
