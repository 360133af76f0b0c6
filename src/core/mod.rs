//! Core data types shared by the FASTA decoder and the PanSN encoder.
//!
//! - [`Record`]: a header/sequence pair in input order

pub mod record;

pub use record::Record;
