//! Encoder for the PanSN (pangenome sequence naming) convention.
//!
//! PanSN names a contig as `sample#haplotype#contig`, with `#` replaceable by any
//! delimiter string.
//!
//! ## Example
//!
//! ```rust
//! use fasta2pansn::pansn::{Encoder, EncoderOption};
//! use fasta2pansn::Record;
//!
//! let mut out = Vec::new();
//! let mut encoder = Encoder::new(
//!     &mut out,
//!     [EncoderOption::SampleName("HG002".to_string()), EncoderOption::HaplotypeId("2".to_string())],
//! )
//! .unwrap();
//! encoder.encode(&Record::new("chr1", "ACGT")).unwrap();
//! assert_eq!(out, b">HG002#2#chr1\nACGT\n");
//! ```

pub mod encoder;

pub use encoder::{EncodeError, EncodeInput, Encoder, EncoderConfig, EncoderOption};
