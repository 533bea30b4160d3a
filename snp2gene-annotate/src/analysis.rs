use std::fmt::{self, Display};

use tracing::info;

use snp2gene_core::models::{Gene, GeneCentricRecord, Variant, VariantGeneAssociation};

use crate::aggregate::aggregate_by_gene;
use crate::annotator::annotate_variants;
use crate::gene_index::GeneIndex;

/// Thresholds and naming for one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Maximum SNP-to-gene distance in base pairs.
    pub distance_threshold: u64,
    /// Keep only SNPs with `pvalue <= pvalue_threshold`; `1.0` disables
    /// the filter.
    pub pvalue_threshold: f64,
    /// Prefix for the output file names.
    pub output_prefix: String,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            distance_threshold: 5000,
            pvalue_threshold: 1.0,
            output_prefix: "snp2gene".to_string(),
        }
    }
}

/// Run-level counts reported alongside the output tables.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub total_snps: u64,
    pub filtered_snps: u64,
    /// Result tuples dropped at load time for having fewer than five
    /// fields.
    pub skipped_records: u64,
    pub total_genes: u64,
    pub snp_gene_associations: u64,
    pub gene_centric_records: u64,
    pub distance_threshold: u64,
    pub pvalue_threshold: f64,
}

impl Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} of {} SNPs retained ({} malformed results skipped), {} genes, \
             {} SNP-gene associations, {} gene-centric records \
             (distance <= {} bp, p-value <= {})",
            self.filtered_snps,
            self.total_snps,
            self.skipped_records,
            self.total_genes,
            self.snp_gene_associations,
            self.gene_centric_records,
            self.distance_threshold,
            self.pvalue_threshold,
        )
    }
}

/// Everything produced by one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub associations: Vec<VariantGeneAssociation>,
    pub gene_records: Vec<GeneCentricRecord>,
    pub summary: RunSummary,
}

///
/// Filter variants by p-value when the threshold is below 1.0.
///
/// Variants without a p-value are dropped by an active filter, matching
/// a `<=` comparison against a missing value. Raising the threshold can
/// only grow the retained set.
///
pub fn filter_by_pvalue(variants: Vec<Variant>, threshold: f64) -> Vec<Variant> {
    if threshold >= 1.0 {
        return variants;
    }
    variants
        .into_iter()
        .filter(|v| v.pvalue.is_some_and(|p| p <= threshold))
        .collect()
}

///
/// Run the full annotation pipeline over loaded catalogs: p-value
/// filtering, the proximity join, and the gene-centric fold.
///
/// `skipped_records` is the loader's count of dropped malformed result
/// tuples, carried through into the [RunSummary]. The gene catalog is
/// shared read-only; concurrent runs over different variant files need
/// no coordination.
///
pub fn run_analysis(
    genes: &[Gene],
    variants: Vec<Variant>,
    skipped_records: u64,
    config: &AnalysisConfig,
) -> AnalysisResult {
    let total_snps = variants.len() as u64;
    let variants = filter_by_pvalue(variants, config.pvalue_threshold);
    let filtered_snps = variants.len() as u64;
    if config.pvalue_threshold < 1.0 {
        info!(
            total = total_snps,
            kept = filtered_snps,
            threshold = config.pvalue_threshold,
            "filtered SNPs by p-value"
        );
    }

    let index = GeneIndex::build(genes);
    let associations = annotate_variants(&index, &variants, config.distance_threshold);
    let gene_records = aggregate_by_gene(&associations);

    let summary = RunSummary {
        total_snps,
        filtered_snps,
        skipped_records,
        total_genes: genes.len() as u64,
        snp_gene_associations: associations.len() as u64,
        gene_centric_records: gene_records.len() as u64,
        distance_threshold: config.distance_threshold,
        pvalue_threshold: config.pvalue_threshold,
    };

    AnalysisResult {
        associations,
        gene_records,
        summary,
    }
}
