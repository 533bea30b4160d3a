//! Core data model for SNP-to-gene proximity annotation.
//!
//! This crate holds the shared record types that flow through the
//! annotation pipeline: the gene and variant catalogs on the input side,
//! and the variant-centric / gene-centric association records on the
//! output side. It performs no I/O; loading and export live in
//! `snp2gene-io`, the annotation algorithms in `snp2gene-annotate`.

pub mod models;

// re-export for cleaner imports
pub use models::{Gene, GeneCentricRecord, PositionCategory, Strand, Variant, VariantGeneAssociation};
