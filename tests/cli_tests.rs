//! End-to-end tests driving the `fasta2pansn` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{NamedTempFile, TempDir};

const TWO_CHROMOSOMES: &[u8] = b">Chr01\nACGTACGTACGTACGT\n>Chr02\nTACGTACGTACGTACG\n";

fn fasta_file(content: &[u8]) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".fa").expect("Failed to create temp file");
    temp.write_all(content).expect("Failed to write temp file");
    temp.flush().expect("Failed to flush temp file");
    temp
}

fn cmd() -> Command {
    Command::cargo_bin("fasta2pansn").expect("binary should be built")
}

#[test]
fn test_renames_records_with_haplotype() {
    let input = fasta_file(TWO_CHROMOSOMES);

    cmd()
        .arg("--fasta")
        .arg(input.path())
        .args(["--sample", "Sample1", "--haplotype-id", "Hap7", "--delimiter", "#"])
        .assert()
        .success()
        .stdout(">Sample1#Hap7#Chr01\nACGTACGTACGTACGT\n>Sample1#Hap7#Chr02\nTACGTACGTACGTACG\n");
}

#[test]
fn test_defaults_applied() {
    let input = fasta_file(b">ctg1\nAC\nGT\n");

    cmd()
        .arg("-f")
        .arg(input.path())
        .assert()
        .success()
        .stdout(">Sample1#1#ctg1\nACGT\n");
}

#[test]
fn test_missing_fasta_prints_usage_and_succeeds() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("--fasta"))
        .stdout(predicate::str::contains("--haplotype-id"));
}

#[test]
fn test_directory_input_exit_code() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("--fasta")
        .arg(dir.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn test_missing_file_exit_code() {
    let dir = TempDir::new().unwrap();

    cmd()
        .arg("--fasta")
        .arg(dir.path().join("absent.fa"))
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_non_utf8_header_round_trips() {
    let input = fasta_file(b">chr1 caf\xe9\nACGT\n");

    let output = cmd().arg("--fasta").arg(input.path()).output().unwrap();
    assert!(output.status.success());
    assert_eq!(output.stdout, b">Sample1#1#chr1 caf\xe9\nACGT\n");
}

#[test]
fn test_corrupt_gzip_exit_code() {
    let mut temp = NamedTempFile::with_suffix(".fa.gz").unwrap();
    temp.write_all(b">chr1\nACGT\n").unwrap();
    temp.flush().unwrap();

    cmd()
        .arg("--fasta")
        .arg(temp.path())
        .assert()
        .code(6)
        .stderr(predicate::str::contains("error decoding file"));
}

#[test]
fn test_reads_stdin() {
    cmd()
        .args(["--fasta", "-", "--sample", "HG002", "--haplotype-id", "2"])
        .write_stdin(">chr1\nAAAA\nCCCC\n>chr2\n")
        .assert()
        .success()
        .stdout(">HG002#2#chr1\nAAAACCCC\n>HG002#2#chr2\n\n");
}

#[test]
fn test_empty_input_emits_one_empty_record() {
    let input = fasta_file(b"");

    cmd()
        .arg("--fasta")
        .arg(input.path())
        .assert()
        .success()
        .stdout(">Sample1#1#\n\n");
}

#[test]
fn test_output_file_leaves_stdout_empty() {
    let input = fasta_file(TWO_CHROMOSOMES);
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("renamed.fa");

    cmd()
        .arg("--fasta")
        .arg(input.path())
        .arg("--output")
        .arg(&out)
        .args(["--delimiter", "|"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.starts_with(">Sample1|1|Chr01\n"));
    assert!(written.contains(">Sample1|1|Chr02\nTACGTACGTACGTACG\n"));
}

#[test]
fn test_same_input_gives_identical_output() {
    let input = fasta_file(TWO_CHROMOSOMES);

    let first = cmd().arg("--fasta").arg(input.path()).output().unwrap();
    let second = cmd().arg("--fasta").arg(input.path()).output().unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}
