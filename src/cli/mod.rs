//! Command-line interface for fasta2pansn.
//!
//! ## Usage
//!
//! ```text
//! # Rename contigs of a haplotype-resolved assembly
//! fasta2pansn --fasta hap2.fa --sample HG002 --haplotype-id 2 > hap2.pansn.fa
//!
//! # Compressed input, custom delimiter, output to a file
//! fasta2pansn -f asm.fa.gz -d '|' -o asm.pansn.fa
//!
//! # Read from stdin
//! zcat asm.fa.gz | fasta2pansn --fasta -
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::pansn::encoder::{DEFAULT_DELIMITER, DEFAULT_HAPLOTYPE_ID, DEFAULT_SAMPLE_NAME};

pub mod convert;

#[derive(Parser)]
#[command(name = "fasta2pansn")]
#[command(version)]
#[command(about = "Rename FASTA records to the PanSN naming convention")]
#[command(
    long_about = "fasta2pansn rewrites every FASTA header as sample<delimiter>haplotype<delimiter>contig, following the pangenome sequence naming (PanSN) convention.\n\nSequence lines are joined so each record is written as exactly two lines."
)]
pub struct Cli {
    /// Path to the input FASTA file (required; '-' reads stdin, .gz/.bgz are decompressed)
    #[arg(short, long)]
    pub fasta: Option<PathBuf>,

    /// Delimiter to use between fields in the PanSN output
    #[arg(short, long, default_value = DEFAULT_DELIMITER)]
    pub delimiter: String,

    /// Haplotype ID to use in the PanSN output
    #[arg(long, default_value = DEFAULT_HAPLOTYPE_ID)]
    pub haplotype_id: String,

    /// Sample name to use in the PanSN output
    #[arg(short, long, default_value = DEFAULT_SAMPLE_NAME)]
    pub sample: String,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
