use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = "I do not like this, but it is ok. Life goes on.\n\n   \nIt is ok, it is.\n";

fn workspace_with_input() -> TempDir {
	let workspace = tempfile::tempdir().expect("create tempdir");
	fs::write(workspace.path().join("input.txt"), SAMPLE).expect("write input");
	workspace
}

fn command(bin: &str, dir: &Path) -> Command {
	let mut cmd = Command::cargo_bin(bin).expect("binary exists");
	cmd.current_dir(dir);
	cmd
}

#[test]
fn single_counts_bigrams_by_default() {
	let workspace = workspace_with_input();
	command("ngram-count", workspace.path())
		.args(["--input", "input.txt", "--output", "bigrams.tsv"])
		.assert()
		.success();

	let output = fs::read_to_string(workspace.path().join("bigrams.tsv")).expect("read output");
	let first: Vec<&str> = output.lines().take(2).collect();
	assert_eq!(first, ["it is\t2", "is ok\t2"]);
	assert!(output.ends_with('\n') && !output.ends_with("\n\n"));
}

#[test]
fn single_unigram_counts_sum_to_token_count() {
	let workspace = workspace_with_input();
	command("ngram-count", workspace.path())
		.args(["--input", "input.txt", "--output", "unigrams.tsv", "--n", "1"])
		.assert()
		.success();

	let records = ngram_freq_core::io::read_records(workspace.path().join("unigrams.tsv")).expect("read back");
	let total: usize = records.iter().map(|(_, count)| count).sum();
	assert_eq!(total, ngram_freq_core::model::tokenizer::tokenize_text(SAMPLE).len());
}

#[test]
fn single_overwrites_existing_output() {
	let workspace = workspace_with_input();
	let output = workspace.path().join("out.tsv");
	fs::write(&output, "old\t99\n".repeat(100)).expect("seed output");

	command("ngram-count", workspace.path())
		.args(["--input", "input.txt", "--output", "out.tsv", "--n", "20"])
		.assert()
		.success();
	assert_eq!(fs::read_to_string(&output).expect("read output"), "");
}

#[test]
fn multi_writes_every_size_with_markers() {
	let workspace = workspace_with_input();
	command("ngram-count-multi", workspace.path())
		.args(["--input", "input.txt", "--output", "res/out.tsv", "--n", "3"])
		.assert()
		.success();

	let mut names: Vec<String> = fs::read_dir(workspace.path().join("res"))
		.expect("output dir created")
		.map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
		.collect();
	names.sort();
	assert_eq!(
		names,
		[
			"out_n1.tsv",
			"out_n1_finished.txt",
			"out_n2.tsv",
			"out_n2_finished.txt",
			"out_n3.tsv",
			"out_n3_finished.txt"
		]
	);
}

#[test]
fn multi_is_deterministic() {
	let workspace = workspace_with_input();
	for output in ["a.tsv", "b.tsv"] {
		command("ngram-count-multi", workspace.path())
			.args(["--input", "input.txt", "--output", output, "--n", "2"])
			.assert()
			.success();
	}
	for n in 1..=2 {
		let a = fs::read(workspace.path().join(format!("a_n{n}.tsv"))).expect("read a");
		let b = fs::read(workspace.path().join(format!("b_n{n}.tsv"))).expect("read b");
		assert_eq!(a, b);
	}
}

#[test]
fn missing_input_is_a_usage_error() {
	let workspace = tempfile::tempdir().expect("create tempdir");
	for bin in ["ngram-count", "ngram-count-multi"] {
		command(bin, workspace.path())
			.args(["--input", "absent.txt", "--output", "out.tsv"])
			.assert()
			.failure()
			.code(2);
	}
	assert!(fs::read_dir(workspace.path()).expect("list dir").next().is_none());
}

#[test]
fn non_positive_n_is_a_usage_error() {
	let workspace = workspace_with_input();
	for n in ["0", "-3"] {
		command("ngram-count-multi", workspace.path())
			.args(["--input", "input.txt", "--output", "out/out.tsv", "--n", n])
			.assert()
			.failure()
			.code(2);
	}
	assert!(!workspace.path().join("out").exists());
}

#[test]
fn unwritable_output_fails() {
	let workspace = workspace_with_input();
	command("ngram-count", workspace.path())
		.args(["--input", "input.txt", "--output", "no/such/dir/out.tsv"])
		.assert()
		.failure()
		.code(1);
}

#[test]
fn required_arguments_are_enforced() {
	let workspace = workspace_with_input();
	command("ngram-count", workspace.path())
		.args(["--input", "input.txt"])
		.assert()
		.failure()
		.code(2);
}
