use std::fmt::{self, Display};

use serde::Serialize;

use super::gene::Strand;
use super::variant::Variant;

/// Strand-relative classification of a SNP against a gene.
///
/// For a `-` strand gene the sense is flipped relative to genome
/// coordinates: the higher-coordinate end is the transcription start, so
/// a SNP past `end` sits 5' of the gene.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum PositionCategory {
    #[serde(rename = "within gene")]
    WithinGene,
    #[serde(rename = "5'")]
    FivePrime,
    #[serde(rename = "3'")]
    ThreePrime,
}

impl Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionCategory::WithinGene => write!(f, "within gene"),
            PositionCategory::FivePrime => write!(f, "5'"),
            PositionCategory::ThreePrime => write!(f, "3'"),
        }
    }
}

///
/// One (variant, nearby gene) pair, or a variant with no gene within the
/// distance threshold (all gene fields `None`).
///
/// Field names match the variant-centric output table columns, so a row
/// serializes directly into the CSV export.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantGeneAssociation {
    pub snp_chr: String,
    pub snp_id: String,
    pub snp_pos: u64,
    pub pvalue: Option<f64>,
    pub gene_id: Option<String>,
    pub gene_start: Option<u64>,
    pub gene_end: Option<u64>,
    pub gene_orientation: Option<Strand>,
    /// `0` iff the SNP falls inside the gene body.
    pub distance: Option<u64>,
    pub is_within_gene: bool,
    pub snp_position_category: Option<PositionCategory>,
    pub gene_function: Option<String>,
    pub gene_go_terms: Option<String>,
}

impl VariantGeneAssociation {
    /// The association emitted when no gene is within the distance
    /// threshold on the variant's chromosome.
    pub fn unmatched(variant: &Variant) -> Self {
        VariantGeneAssociation {
            snp_chr: variant.chr.clone(),
            snp_id: variant.snp_id.clone(),
            snp_pos: variant.position,
            pvalue: variant.pvalue,
            gene_id: None,
            gene_start: None,
            gene_end: None,
            gene_orientation: None,
            distance: None,
            is_within_gene: false,
            snp_position_category: None,
            gene_function: None,
            gene_go_terms: None,
        }
    }
}

///
/// The gene-centric view: one record per gene with at least one
/// associated variant, built by folding over the association table.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GeneCentricRecord {
    pub gene_id: String,
    pub chr: String,
    pub gene_start: u64,
    pub gene_end: u64,
    pub gene_orientation: Strand,
    pub gene_function: Option<String>,
    pub gene_go_terms: Option<String>,
    /// Formatted SNP labels in order of first encounter.
    pub associated_snps: Vec<String>,
    pub snp_count: u64,
    /// Minimum over the non-null p-values of the associated variants;
    /// `None` when no associated variant carries one.
    pub min_pvalue: Option<f64>,
}
