//! # Input/Output for SNP-to-gene annotation.
//!
//! Loaders for the two JSON input catalogs (genome annotation features
//! and GWAS association results) and CSV export of the two output tables.
//! The loaders normalize the sources into the `snp2gene-core` record
//! types; everything downstream of them is free of parsing concerns.
//!
pub mod association_study;
pub mod error;
pub mod export;
pub mod gene_catalog;

// re-expose core functions
pub use association_study::*;
pub use error::*;
pub use export::*;
pub use gene_catalog::*;
