use std::collections::HashMap;

use snp2gene_core::models::{GeneCentricRecord, VariantGeneAssociation};

///
/// Fold the association table into one record per gene, in order of each
/// gene's first appearance. Associations without a gene are skipped.
///
/// Per association the fold appends a formatted SNP label, bumps the
/// count, and tracks the running minimum over non-null p-values (the
/// minimum stays `None` when no association in the group carries one).
/// Gene metadata comes from the first association seen for the gene; the
/// annotator only ever emits one set of metadata per gene id, so later
/// rows cannot disagree.
///
pub fn aggregate_by_gene(associations: &[VariantGeneAssociation]) -> Vec<GeneCentricRecord> {
    let mut records: Vec<GeneCentricRecord> = Vec::new();
    let mut index_of: HashMap<String, usize> = HashMap::new();

    for assoc in associations {
        let (Some(gene_id), Some(gene_start), Some(gene_end), Some(gene_orientation)) = (
            assoc.gene_id.as_ref(),
            assoc.gene_start,
            assoc.gene_end,
            assoc.gene_orientation,
        ) else {
            continue;
        };

        let idx = *index_of.entry(gene_id.clone()).or_insert_with(|| {
            records.push(GeneCentricRecord {
                gene_id: gene_id.clone(),
                chr: assoc.snp_chr.clone(),
                gene_start,
                gene_end,
                gene_orientation,
                gene_function: assoc.gene_function.clone(),
                gene_go_terms: assoc.gene_go_terms.clone(),
                associated_snps: Vec::new(),
                snp_count: 0,
                min_pvalue: None,
            });
            records.len() - 1
        });

        let record = &mut records[idx];
        record.associated_snps.push(snp_label(assoc));
        record.snp_count += 1;
        if let Some(pvalue) = assoc.pvalue {
            record.min_pvalue = Some(match record.min_pvalue {
                Some(current) => current.min(pvalue),
                None => pvalue,
            });
        }
    }

    records
}

/// `"{snp_id}"`, plus `" (p={pvalue})"` when a p-value is present, plus
/// either `" [within gene]"` or `" [{distance}, {category}]"`.
fn snp_label(assoc: &VariantGeneAssociation) -> String {
    let mut label = assoc.snp_id.clone();
    if let Some(pvalue) = assoc.pvalue {
        label.push_str(&format!(" (p={pvalue})"));
    }
    if assoc.is_within_gene {
        label.push_str(" [within gene]");
    } else if let (Some(distance), Some(category)) =
        (assoc.distance, assoc.snp_position_category)
    {
        label.push_str(&format!(" [{distance}, {category}]"));
    }
    label
}
