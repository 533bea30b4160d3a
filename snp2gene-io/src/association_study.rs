use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use snp2gene_core::models::Variant;

use crate::error::LoadError;

/// A result tuple needs at least this many positional fields:
/// chromosome, SNP id, position, p-value, auxiliary value.
const MIN_RESULT_FIELDS: usize = 5;

/// Top-level shape of an association study source.
#[derive(Deserialize)]
struct StudySource {
    #[serde(default)]
    association_details: Vec<AssociationDetail>,
}

#[derive(Deserialize)]
struct AssociationDetail {
    #[serde(default)]
    association_results: Vec<Vec<Value>>,
}

/// Outcome of loading an association study.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantLoad {
    /// Variants in source order, flattened across association groups.
    pub variants: Vec<Variant>,
    /// Result tuples dropped for having fewer than five fields. Dropping
    /// them is long-standing defined behavior; the count is kept so the
    /// run summary can surface it.
    pub skipped: u64,
}

///
/// Load the variant catalog from an association study JSON file.
///
/// Result tuples with fewer than five fields are skipped without error
/// (and counted in [VariantLoad::skipped]). A tuple with enough fields
/// but an incompatible field type fails the load with
/// [LoadError::InvalidRecord]; null p-values and auxiliary values
/// degrade to `None`.
///
pub fn load_variant_catalog(path: &Path) -> Result<VariantLoad, LoadError> {
    let file = File::open(path)?;
    let source: StudySource = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| LoadError::MalformedInput(format!("{}: {}", path.display(), e)))?;

    let mut variants = Vec::new();
    let mut skipped: u64 = 0;
    for detail in source.association_details {
        for result in detail.association_results {
            if result.len() < MIN_RESULT_FIELDS {
                skipped += 1;
                continue;
            }
            variants.push(variant_from_result(&result)?);
        }
    }

    if skipped > 0 {
        warn!(skipped, "dropped association results with fewer than 5 fields");
    }
    debug!(variants = variants.len(), "loaded variant catalog");

    Ok(VariantLoad { variants, skipped })
}

fn variant_from_result(result: &[Value]) -> Result<Variant, LoadError> {
    let chr = result[0]
        .as_str()
        .ok_or_else(|| {
            LoadError::InvalidRecord(format!("chromosome field is not a string: {}", result[0]))
        })?
        .to_string();
    let snp_id = string_field(&result[1], "SNP id")?;
    let position = position_field(&result[2])?;
    let pvalue = numeric_field(&result[3], "p-value")?;
    let aux_value = numeric_field(&result[4], "auxiliary value")?;

    Ok(Variant {
        chr,
        snp_id,
        position,
        pvalue,
        aux_value,
    })
}

/// SNP ids are usually strings but show up as bare numbers in some
/// study exports.
fn string_field(value: &Value, name: &str) -> Result<String, LoadError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(LoadError::InvalidRecord(format!(
            "{name} field is not a string: {other}"
        ))),
    }
}

fn position_field(value: &Value) -> Result<u64, LoadError> {
    value
        .as_u64()
        .or_else(|| {
            value
                .as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 0.0)
                .map(|f| f as u64)
        })
        .ok_or_else(|| {
            LoadError::InvalidRecord(format!("position field is not a valid coordinate: {value}"))
        })
}

fn numeric_field(value: &Value, name: &str) -> Result<Option<f64>, LoadError> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(LoadError::InvalidRecord(format!(
            "{name} field is not numeric: {other}"
        ))),
    }
}
