use std::path::{Path, PathBuf};

use csv::Writer;
use serde::Serialize;
use tracing::debug;

use snp2gene_core::models::{Gene, GeneCentricRecord, Strand, VariantGeneAssociation};

use crate::error::ExportError;

/// Threshold metadata encoded into output file names: `_d<distance>`,
/// plus `_p<pvalue>` (scientific notation) when a p-value filter below
/// 1.0 was applied.
pub fn threshold_suffix(distance_threshold: u64, pvalue_threshold: f64) -> String {
    let mut suffix = format!("_d{distance_threshold}");
    if pvalue_threshold < 1.0 {
        suffix.push_str(&format!("_p{pvalue_threshold:e}"));
    }
    suffix
}

/// Path of the variant-centric association table.
pub fn snp_analysis_path(
    dir: &Path,
    prefix: &str,
    distance_threshold: u64,
    pvalue_threshold: f64,
) -> PathBuf {
    dir.join(format!(
        "{prefix}_SNP_GWAS_analysis{}.csv",
        threshold_suffix(distance_threshold, pvalue_threshold)
    ))
}

/// Path of the gene-centric table.
pub fn gene_centric_path(
    dir: &Path,
    prefix: &str,
    distance_threshold: u64,
    pvalue_threshold: f64,
) -> PathBuf {
    dir.join(format!(
        "{prefix}_gene_centric_GWAS{}.csv",
        threshold_suffix(distance_threshold, pvalue_threshold)
    ))
}

/// Path of the optional whole-genome gene function table.
pub fn gene_function_path(dir: &Path, prefix: &str) -> PathBuf {
    dir.join(format!("{prefix}_gene_function.csv"))
}

///
/// Write the variant-centric association table.
///
/// Column order follows the [VariantGeneAssociation] field order; `None`
/// fields serialize as empty cells.
///
pub fn write_snp_gene_table(
    path: &Path,
    associations: &[VariantGeneAssociation],
) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(path)?;
    for row in associations {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = associations.len(), "wrote SNP-gene table");
    Ok(())
}

/// Gene-centric CSV row with `associated_snps` collapsed to one
/// `", "`-joined cell.
#[derive(Serialize)]
struct GeneCentricRow<'a> {
    gene_id: &'a str,
    chr: &'a str,
    gene_start: u64,
    gene_end: u64,
    gene_orientation: Strand,
    gene_function: Option<&'a str>,
    gene_go_terms: Option<&'a str>,
    associated_snps: String,
    snp_count: u64,
    min_pvalue: Option<f64>,
}

/// Write the gene-centric table.
pub fn write_gene_centric_table(
    path: &Path,
    records: &[GeneCentricRecord],
) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(path)?;
    for record in records {
        writer.serialize(GeneCentricRow {
            gene_id: &record.gene_id,
            chr: &record.chr,
            gene_start: record.gene_start,
            gene_end: record.gene_end,
            gene_orientation: record.gene_orientation,
            gene_function: record.gene_function.as_deref(),
            gene_go_terms: record.gene_go_terms.as_deref(),
            associated_snps: record.associated_snps.join(", "),
            snp_count: record.snp_count,
            min_pvalue: record.min_pvalue,
        })?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = records.len(), "wrote gene-centric table");
    Ok(())
}

#[derive(Serialize)]
struct GeneFunctionRow<'a> {
    gene_id: &'a str,
    chr: &'a str,
    start: u64,
    end: u64,
    orientation: Strand,
    function: Option<&'a str>,
    go_terms: Option<&'a str>,
}

/// Write the whole-genome gene function table (one row per catalog gene).
pub fn write_gene_function_table(path: &Path, genes: &[Gene]) -> Result<(), ExportError> {
    let mut writer = Writer::from_path(path)?;
    for gene in genes {
        writer.serialize(GeneFunctionRow {
            gene_id: &gene.gene_id,
            chr: &gene.chr,
            start: gene.start,
            end: gene.end,
            orientation: gene.strand,
            function: gene.function.as_deref(),
            go_terms: gene.go_terms.as_deref(),
        })?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use snp2gene_core::models::PositionCategory;
    use tempfile::tempdir;

    #[rstest]
    fn test_threshold_suffix_without_filter() {
        assert_eq!(threshold_suffix(5000, 1.0), "_d5000");
    }

    #[rstest]
    fn test_threshold_suffix_with_filter() {
        assert_eq!(threshold_suffix(10000, 1e-5), "_d10000_p1e-5");
    }

    #[rstest]
    fn test_output_paths_encode_thresholds() {
        let dir = Path::new("/tmp/out");
        assert_eq!(
            snp_analysis_path(dir, "Ptrichocarpa", 10000, 1e-5),
            Path::new("/tmp/out/Ptrichocarpa_SNP_GWAS_analysis_d10000_p1e-5.csv")
        );
        assert_eq!(
            gene_centric_path(dir, "Ptrichocarpa", 5000, 1.0),
            Path::new("/tmp/out/Ptrichocarpa_gene_centric_GWAS_d5000.csv")
        );
        assert_eq!(
            gene_function_path(dir, "Ptrichocarpa"),
            Path::new("/tmp/out/Ptrichocarpa_gene_function.csv")
        );
    }

    #[rstest]
    fn test_snp_gene_table_headers_and_null_cells() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let matched = VariantGeneAssociation {
            snp_chr: "Chr01".to_string(),
            snp_id: "rs1".to_string(),
            snp_pos: 1500,
            pvalue: Some(0.001),
            gene_id: Some("g1".to_string()),
            gene_start: Some(1000),
            gene_end: Some(2000),
            gene_orientation: Some(Strand::Forward),
            distance: Some(0),
            is_within_gene: true,
            snp_position_category: Some(PositionCategory::WithinGene),
            gene_function: Some("kinase".to_string()),
            gene_go_terms: None,
        };
        let unmatched = VariantGeneAssociation {
            snp_chr: "Chr02".to_string(),
            snp_id: "rs2".to_string(),
            snp_pos: 99,
            pvalue: None,
            gene_id: None,
            gene_start: None,
            gene_end: None,
            gene_orientation: None,
            distance: None,
            is_within_gene: false,
            snp_position_category: None,
            gene_function: None,
            gene_go_terms: None,
        };

        write_snp_gene_table(&path, &[matched, unmatched]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();

        assert_eq!(
            lines[0],
            "snp_chr,snp_id,snp_pos,pvalue,gene_id,gene_start,gene_end,\
             gene_orientation,distance,is_within_gene,snp_position_category,\
             gene_function,gene_go_terms"
        );
        assert_eq!(
            lines[1],
            "Chr01,rs1,1500,0.001,g1,1000,2000,+,0,true,within gene,kinase,"
        );
        assert_eq!(lines[2], "Chr02,rs2,99,,,,,,,false,,,");
    }

    #[rstest]
    fn test_gene_centric_table_joins_snp_labels() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let record = GeneCentricRecord {
            gene_id: "g1".to_string(),
            chr: "Chr01".to_string(),
            gene_start: 1000,
            gene_end: 2000,
            gene_orientation: Strand::Reverse,
            gene_function: None,
            gene_go_terms: Some("GO:0016301".to_string()),
            associated_snps: vec![
                "rs1 (p=0.001) [within gene]".to_string(),
                "rs2 [500, 3']".to_string(),
            ],
            snp_count: 2,
            min_pvalue: Some(0.001),
        };

        write_gene_centric_table(&path, &[record]).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();

        assert_eq!(
            lines[0],
            "gene_id,chr,gene_start,gene_end,gene_orientation,gene_function,\
             gene_go_terms,associated_snps,snp_count,min_pvalue"
        );
        assert_eq!(
            lines[1],
            "g1,Chr01,1000,2000,-,,GO:0016301,\
             \"rs1 (p=0.001) [within gene], rs2 [500, 3']\",2,0.001"
        );
    }
}
