use std::fs;

use ngram_freq_core::io::{read_records, write_table};
use ngram_freq_core::model::ngram::ngrams;
use ngram_freq_core::model::tokenizer::tokenize_text;
use ngram_freq_core::{FrequencyTable, NgramError, RunConfig};

const TEXT: &str = "\
I do not like this, but it is ok. Life goes on.
It is ok, it is.
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Tokens keep punctuation apart: "this," -> "this" ","
    let tokens = tokenize_text(TEXT);
    println!("{} tokens: {:?}", tokens.len(), tokens);

    // Windows of 3 consecutive tokens, left to right
    for gram in ngrams(&tokens, 3)?.take(3) {
        println!("trigram: {}", gram.join(" "));
    }

    // n = 0 is never clamped
    match ngrams(&tokens, 0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("{e}"),
    }

    // Most common bigrams, ties in first-seen order
    let table = FrequencyTable::from_tokens(&tokens, 2)?;
    for (gram, count) in table.most_common().into_iter().take(5) {
        println!("{}\t{}", gram.join(" "), count);
    }

    let workspace = tempfile::tempdir()?;
    let input = workspace.path().join("input.txt");
    fs::write(&input, TEXT)?;

    // Same table, written to disk and read back
    let bigrams = workspace.path().join("bigrams.tsv");
    write_table(&table, &bigrams)?;
    let total: usize = read_records(&bigrams)?.iter().map(|(_, count)| count).sum();
    println!("bigram total: {total} (tokens - 1 = {})", tokens.len() - 1);

    // Every size from 1 to 3 under out/
    let config = RunConfig::new(&input, workspace.path().join("out").join("result.tsv"), 3)?;
    for path in config.run_multi()? {
        println!("written: {}", path.display());
    }

    // Missing input files are rejected before anything is written
    match RunConfig::new(workspace.path().join("unknown.txt"), "result.tsv", 2) {
        Ok(_) => println!("Should not happen"),
        Err(NgramError::Usage(e)) => println!("{e}"),
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
