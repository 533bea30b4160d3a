use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Orientation of a gene on the reference genome.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Strand {
    #[serde(rename = "+")]
    Forward,
    #[serde(rename = "-")]
    Reverse,
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => write!(f, "+"),
            Strand::Reverse => write!(f, "-"),
        }
    }
}

///
/// One gene from the annotation catalog.
///
/// Coordinates are 0-based and normalized so that `end - start` always
/// equals the annotated feature length, regardless of strand. A gene is
/// constructed once at load time and is immutable for the rest of the run.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Gene {
    pub gene_id: String,
    pub chr: String,
    pub start: u64,
    pub end: u64,
    pub strand: Strand,
    /// Free-text function annotation, `None` when the source carries none.
    pub function: Option<String>,
    /// `", "`-joined GO term identifiers, `None` when the source carries none.
    pub go_terms: Option<String>,
}

impl Gene {
    /// Build a gene from a source location descriptor.
    ///
    /// The annotation source describes a gene as `(coordinate, strand,
    /// length)` in 1-based coordinates. For a `+` strand gene the
    /// coordinate is its left edge; for a `-` strand gene it is its right
    /// edge (the transcription start sits at the higher coordinate).
    pub fn from_location(
        gene_id: String,
        chr: String,
        coordinate: u64,
        strand: Strand,
        length: u64,
        function: Option<String>,
        go_terms: Option<String>,
    ) -> Self {
        let (start, end) = match strand {
            Strand::Forward => {
                let start = coordinate.saturating_sub(1);
                (start, start + length)
            }
            Strand::Reverse => (coordinate.saturating_sub(length), coordinate),
        };

        Gene {
            gene_id,
            chr,
            start,
            end,
            strand,
            function,
            go_terms,
        }
    }

    /// Feature length in base pairs.
    #[inline]
    pub fn length(&self) -> u64 {
        self.end - self.start
    }

    /// Whether `position` falls inside the gene body (inclusive bounds).
    #[inline]
    pub fn contains(&self, position: u64) -> bool {
        position >= self.start && position <= self.end
    }

    /// Distance from `position` to this gene: `0` inside the gene body,
    /// otherwise the smaller gap to either boundary.
    #[inline]
    pub fn distance_to(&self, position: u64) -> u64 {
        if self.contains(position) {
            0
        } else {
            self.start.abs_diff(position).min(self.end.abs_diff(position))
        }
    }
}
