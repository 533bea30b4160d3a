//! Proximity annotation of GWAS SNPs against a gene catalog.
//!
//! This crate is the algorithmic core of snp2gene:
//!
//! - [GeneIndex] — per-chromosome candidate lookup over an immutable
//!   gene catalog
//! - [annotate_variants] — one association record per (variant, nearby
//!   gene) pair within a distance threshold, with strand-relative
//!   positional classification
//! - [aggregate_by_gene] — the gene-centric fold over the association
//!   table
//! - [run_analysis] — the driver tying filtering, annotation, and
//!   aggregation together for one run
//!
//! Everything here is a pure function of the loaded catalogs plus the
//! thresholds; no I/O happens inside this crate.
//!
//! # Example
//!
//! ```
//! use snp2gene_core::models::{Gene, Strand, Variant};
//! use snp2gene_annotate::{AnalysisConfig, run_analysis};
//!
//! let genes = vec![Gene::from_location(
//!     "g1".to_string(), "Chr01".to_string(), 1001, Strand::Forward, 1000, None, None,
//! )];
//! let variants = vec![Variant {
//!     chr: "Chr01".to_string(),
//!     snp_id: "rs1".to_string(),
//!     position: 1500,
//!     pvalue: Some(1e-6),
//!     aux_value: None,
//! }];
//!
//! let result = run_analysis(&genes, variants, 0, &AnalysisConfig::default());
//! assert_eq!(result.associations.len(), 1);
//! assert!(result.associations[0].is_within_gene);
//! ```

pub mod aggregate;
pub mod analysis;
pub mod annotator;
pub mod gene_index;

// re-exports
pub use aggregate::aggregate_by_gene;
pub use analysis::{AnalysisConfig, AnalysisResult, RunSummary, filter_by_pvalue, run_analysis};
pub use annotator::annotate_variants;
pub use gene_index::{GeneIndex, NearbyGene};
