use std::process::ExitCode;

use clap::Parser;
use log::info;
use ngram_freq_cli::CountArgs;

/// Counts the n-grams of one size in a text file and writes them as TSV.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
	#[command(flatten)]
	args: CountArgs,
}

fn main() -> ExitCode {
	Cli::parse().args.run(|config| {
		config.run_single()?;
		info!("done: {}", config.output().display());
		Ok(())
	})
}
