use rayon::prelude::*;

use snp2gene_core::models::{
    Gene, PositionCategory, Strand, Variant, VariantGeneAssociation,
};

use crate::gene_index::{GeneIndex, NearbyGene};

///
/// Annotate every variant with its nearby genes.
///
/// For each variant, all genes within `distance_threshold` base pairs on
/// the same chromosome are emitted as one association each, ordered by
/// ascending distance (ties in catalog order). A variant with no nearby
/// gene yields a single association with all gene fields empty. Absence
/// of a match is a valid output, never an error.
///
/// The per-variant searches are independent and run in parallel; results
/// are concatenated in input variant order, so output is reproducible.
///
pub fn annotate_variants(
    index: &GeneIndex,
    variants: &[Variant],
    distance_threshold: u64,
) -> Vec<VariantGeneAssociation> {
    variants
        .par_iter()
        .flat_map_iter(|variant| annotate_one(index, variant, distance_threshold))
        .collect()
}

fn annotate_one(
    index: &GeneIndex,
    variant: &Variant,
    distance_threshold: u64,
) -> Vec<VariantGeneAssociation> {
    let hits = index.nearby(&variant.chr, variant.position, distance_threshold);
    if hits.is_empty() {
        return vec![VariantGeneAssociation::unmatched(variant)];
    }

    hits.into_iter()
        .map(|hit| associate(variant, &hit))
        .collect()
}

fn associate(variant: &Variant, hit: &NearbyGene) -> VariantGeneAssociation {
    let gene = hit.gene;
    let within = gene.contains(variant.position);
    let category = if within {
        PositionCategory::WithinGene
    } else {
        classify(gene, variant.position)
    };

    VariantGeneAssociation {
        snp_chr: variant.chr.clone(),
        snp_id: variant.snp_id.clone(),
        snp_pos: variant.position,
        pvalue: variant.pvalue,
        gene_id: Some(gene.gene_id.clone()),
        gene_start: Some(gene.start),
        gene_end: Some(gene.end),
        gene_orientation: Some(gene.strand),
        distance: Some(hit.distance),
        is_within_gene: within,
        snp_position_category: Some(category),
        gene_function: gene.function.clone(),
        gene_go_terms: gene.go_terms.clone(),
    }
}

/// Strand-relative classification for a SNP outside the gene body.
fn classify(gene: &Gene, position: u64) -> PositionCategory {
    match gene.strand {
        Strand::Forward => {
            if position < gene.start {
                PositionCategory::FivePrime
            } else {
                PositionCategory::ThreePrime
            }
        }
        Strand::Reverse => {
            if position > gene.end {
                PositionCategory::FivePrime
            } else {
                PositionCategory::ThreePrime
            }
        }
    }
}
