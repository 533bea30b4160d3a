use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use tracing::{error, info};

use snp2gene_annotate::{AnalysisConfig, run_analysis};
use snp2gene_core::models::Gene;
use snp2gene_io::{
    gene_centric_path, gene_function_path, load_gene_catalog, load_variant_catalog,
    snp_analysis_path, write_gene_centric_table, write_gene_function_table, write_snp_gene_table,
};

pub fn run_annotate(matches: &ArgMatches) -> Result<()> {
    let gene_path = matches
        .get_one::<String>("genes")
        .expect("--genes is required");
    let snp_paths: Vec<&String> = matches
        .get_many::<String>("snps")
        .expect("--snps is required")
        .collect();
    let distance_threshold: u64 = matches
        .get_one::<String>("distance")
        .unwrap()
        .parse()
        .context("--distance must be a non-negative integer")?;
    let pvalue_threshold: f64 = matches
        .get_one::<String>("pvalue")
        .unwrap()
        .parse()
        .context("--pvalue must be a number")?;
    let prefix = matches.get_one::<String>("output-prefix").unwrap();
    let output_dir = Path::new(matches.get_one::<String>("output-dir").unwrap());
    let save_gene_function = matches.get_flag("save-gene-function");

    let genes = load_gene_catalog(Path::new(gene_path))
        .with_context(|| format!("Failed to load gene catalog from {gene_path}"))?;
    info!(genes = genes.len(), source = %gene_path, "loaded gene catalog");

    if save_gene_function {
        let path = gene_function_path(output_dir, prefix);
        write_gene_function_table(&path, &genes)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "wrote gene function table");
    }

    // each SNP file is an independent run over the shared gene catalog;
    // one failing file must not sink the others
    let mut failures = 0usize;
    for (i, snp_path) in snp_paths.iter().enumerate() {
        let run_prefix = if snp_paths.len() > 1 {
            format!("{prefix}_{i}")
        } else {
            prefix.clone()
        };
        let config = AnalysisConfig {
            distance_threshold,
            pvalue_threshold,
            output_prefix: run_prefix,
        };

        if let Err(e) = run_one(&genes, Path::new(snp_path), output_dir, &config) {
            error!(file = %snp_path, error = %e, "analysis failed");
            failures += 1;
        }
    }

    if failures == snp_paths.len() {
        bail!("all {} input file(s) failed", failures);
    }
    Ok(())
}

fn run_one(
    genes: &[Gene],
    snp_path: &Path,
    output_dir: &Path,
    config: &AnalysisConfig,
) -> Result<()> {
    let load = load_variant_catalog(snp_path)
        .with_context(|| format!("Failed to load variants from {}", snp_path.display()))?;

    let result = run_analysis(genes, load.variants, load.skipped, config);

    let snp_table = snp_analysis_path(
        output_dir,
        &config.output_prefix,
        config.distance_threshold,
        config.pvalue_threshold,
    );
    write_snp_gene_table(&snp_table, &result.associations)
        .with_context(|| format!("Failed to write {}", snp_table.display()))?;

    let gene_table = gene_centric_path(
        output_dir,
        &config.output_prefix,
        config.distance_threshold,
        config.pvalue_threshold,
    );
    write_gene_centric_table(&gene_table, &result.gene_records)
        .with_context(|| format!("Failed to write {}", gene_table.display()))?;

    info!(
        file = %snp_path.display(),
        snp_table = %snp_table.display(),
        gene_table = %gene_table.display(),
        "{}", result.summary
    );
    Ok(())
}
