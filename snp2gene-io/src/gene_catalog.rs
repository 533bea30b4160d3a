use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use snp2gene_core::models::{Gene, Strand};

use crate::error::LoadError;

/// Top-level shape of a genome annotation source.
#[derive(Deserialize)]
struct GenomeSource {
    features: Vec<Feature>,
}

#[derive(Deserialize)]
struct Feature {
    id: String,
    /// `[chromosome, coordinate, strand, length]`
    location: Option<(String, u64, Strand, u64)>,
    functions: Option<Vec<String>>,
    ontology_terms: Option<OntologyTerms>,
}

/// Only the GO category is consumed; other ontologies are ignored.
#[derive(Deserialize)]
struct OntologyTerms {
    #[serde(rename = "GO")]
    go: Option<Map<String, Value>>,
}

///
/// Load the gene catalog from a genome annotation JSON file.
///
/// One [Gene] per feature, input order preserved, no deduplication of
/// gene ids. A feature without `functions` or without `GO` ontology
/// terms degrades those fields to `None`; a feature without a location
/// descriptor, or a source that does not parse into the expected shape,
/// fails the whole load with [LoadError::MalformedInput].
///
pub fn load_gene_catalog(path: &Path) -> Result<Vec<Gene>, LoadError> {
    let file = File::open(path)?;
    let source: GenomeSource = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LoadError::MalformedInput(format!("{}: {}", path.display(), e)))?;

    let mut genes = Vec::with_capacity(source.features.len());
    for feature in source.features {
        let (chr, coordinate, strand, length) = feature.location.ok_or_else(|| {
            LoadError::MalformedInput(format!("feature {} has no location", feature.id))
        })?;

        let function = feature.functions.map(|f| f.join(" "));
        // GO keys keep their source-file order so reruns are byte-identical
        let go_terms = feature
            .ontology_terms
            .and_then(|t| t.go)
            .map(|go| go.keys().cloned().collect::<Vec<_>>().join(", "));

        genes.push(Gene::from_location(
            feature.id,
            chr,
            coordinate,
            strand,
            length,
            function,
            go_terms,
        ));
    }

    debug!(genes = genes.len(), "loaded gene catalog");
    Ok(genes)
}
