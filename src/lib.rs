//! # fasta2pansn
//!
//! Rename FASTA records to the PanSN (pangenome sequence naming) convention.
//!
//! Pangenome tools expect every contig name to carry the sample and haplotype it
//! came from, as `sample#haplotype#contig`. `fasta2pansn` reads an assembly FASTA,
//! joins each record's sequence lines, and writes it back under the PanSN name.
//!
//! ## Example
//!
//! ```rust
//! use fasta2pansn::{Decoder, Encoder, EncoderOption};
//!
//! let fasta = ">Chr01\nACGTACGT\nACGTACGT\n>Chr02\nTACGTACGTACGTACG\n";
//!
//! let mut records = Vec::new();
//! Decoder::new(fasta.as_bytes()).decode(&mut records).unwrap();
//!
//! let mut out = Vec::new();
//! let mut encoder = Encoder::new(
//!     &mut out,
//!     [EncoderOption::HaplotypeId("Hap7".to_string())],
//! )
//! .unwrap();
//! encoder.encode(&records).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     ">Sample1#Hap7#Chr01\nACGTACGTACGTACGT\n>Sample1#Hap7#Chr02\nTACGTACGTACGTACG\n"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`core`]: The [`Record`] type shared by decoder and encoder
//! - [`parsing`]: FASTA decoder
//! - [`pansn`]: PanSN encoder and its options
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input file checks

pub mod cli;
pub mod core;
pub mod pansn;
pub mod parsing;
pub mod utils;

// Re-export commonly used types for convenience
pub use core::record::Record;
pub use pansn::encoder::{EncodeError, EncodeInput, Encoder, EncoderConfig, EncoderOption};
pub use parsing::fasta::{DecodeError, Decoder};
