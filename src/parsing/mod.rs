//! Parsers for input sequence files.
//!
//! - **FASTA**: [`fasta::Decoder`] turns `>`-headed text into ordered [`Record`]s
//!
//! ## Example
//!
//! ```rust
//! use fasta2pansn::parsing::fasta::decode_str;
//!
//! let records = decode_str(">chr1\nACGT\nACGT\n").unwrap();
//! assert_eq!(records[0].header, b"chr1");
//! assert_eq!(records[0].sequence, b"ACGTACGT");
//! ```
//!
//! [`Record`]: crate::core::record::Record

pub mod fasta;
