use serde::{Deserialize, Serialize};

///
/// One SNP from a GWAS association study.
///
/// `(chr, snp_id)` is expected to be unique within a study file but is
/// not enforced. The p-value is an input carried through from the study,
/// never computed here; it may be absent.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variant {
    pub chr: String,
    pub snp_id: String,
    pub position: u64,
    pub pvalue: Option<f64>,
    /// Auxiliary numeric field from the study, passed through untouched.
    pub aux_value: Option<f64>,
}
