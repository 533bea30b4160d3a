use std::collections::HashMap;

use snp2gene_core::models::Gene;

/// A candidate gene retained by a proximity query, with its distance to
/// the query position.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyGene<'a> {
    pub gene: &'a Gene,
    pub distance: u64,
    /// Position of the gene in the source catalog; the tie-break when
    /// two candidates sit at the same distance.
    ordinal: usize,
}

struct ChromIndex<'a> {
    /// Genes sorted by start position, each with its catalog ordinal.
    genes: Vec<(usize, &'a Gene)>,
    /// Length of the longest gene on this chromosome, used to bound the
    /// lower end of a query scan.
    max_len: u64,
}

///
/// Per-chromosome candidate lookup over an immutable gene catalog.
///
/// Genes are bucketed by chromosome and kept sorted by start, so a query
/// binary-searches a lower bound and scans a bounded window instead of
/// walking the whole chromosome. The candidate ordering of a linear scan
/// over the catalog is reproduced exactly: ascending distance, ties
/// broken by catalog order.
///
pub struct GeneIndex<'a> {
    chroms: HashMap<&'a str, ChromIndex<'a>>,
}

impl<'a> GeneIndex<'a> {
    /// Build the index. Catalog order is remembered per gene so query
    /// results can reproduce the source tie-break.
    pub fn build(catalog: &'a [Gene]) -> Self {
        let mut chroms: HashMap<&str, ChromIndex> = HashMap::new();
        for (ordinal, gene) in catalog.iter().enumerate() {
            let chrom = chroms
                .entry(gene.chr.as_str())
                .or_insert_with(|| ChromIndex {
                    genes: Vec::new(),
                    max_len: 0,
                });
            chrom.genes.push((ordinal, gene));
            chrom.max_len = chrom.max_len.max(gene.length());
        }

        for chrom in chroms.values_mut() {
            chrom.genes.sort_by_key(|&(ordinal, gene)| (gene.start, ordinal));
        }

        GeneIndex { chroms }
    }

    /// Whether the catalog has any gene on `chr`.
    pub fn has_chrom(&self, chr: &str) -> bool {
        self.chroms.contains_key(chr)
    }

    /// All genes on `chr` within `threshold` base pairs of `position`,
    /// ordered by ascending distance with ties in catalog order. Empty
    /// when the chromosome is absent or nothing is close enough.
    pub fn nearby(&self, chr: &str, position: u64, threshold: u64) -> Vec<NearbyGene<'a>> {
        let Some(chrom) = self.chroms.get(chr) else {
            return Vec::new();
        };

        // a gene can only qualify if its start is within threshold +
        // max gene length below the position
        let low = position.saturating_sub(threshold.saturating_add(chrom.max_len));
        let high = position.saturating_add(threshold);
        let begin = chrom.genes.partition_point(|&(_, gene)| gene.start < low);

        let mut hits = Vec::new();
        for &(ordinal, gene) in &chrom.genes[begin..] {
            if gene.start > high {
                break;
            }
            let distance = gene.distance_to(position);
            if distance <= threshold {
                hits.push(NearbyGene {
                    gene,
                    distance,
                    ordinal,
                });
            }
        }

        hits.sort_by_key(|hit| (hit.distance, hit.ordinal));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};
    use snp2gene_core::models::Strand;

    fn gene(id: &str, chr: &str, start: u64, end: u64, strand: Strand) -> Gene {
        Gene {
            gene_id: id.to_string(),
            chr: chr.to_string(),
            start,
            end,
            strand,
            function: None,
            go_terms: None,
        }
    }

    #[fixture]
    fn catalog() -> Vec<Gene> {
        vec![
            gene("g1", "Chr01", 1000, 2000, Strand::Forward),
            gene("g2", "Chr01", 5000, 6000, Strand::Reverse),
            gene("g3", "Chr01", 9000, 9500, Strand::Forward),
            gene("g4", "Chr02", 1000, 2000, Strand::Forward),
        ]
    }

    #[rstest]
    fn test_nearby_orders_by_distance(catalog: Vec<Gene>) {
        let index = GeneIndex::build(&catalog);

        // position 4000: g2 at distance 1000, g1 at distance 2000
        let hits = index.nearby("Chr01", 4000, 3000);
        let ids: Vec<&str> = hits.iter().map(|h| h.gene.gene_id.as_str()).collect();
        assert_eq!(ids, vec!["g2", "g1"]);
        assert_eq!(hits[0].distance, 1000);
        assert_eq!(hits[1].distance, 2000);
    }

    #[rstest]
    fn test_nearby_breaks_ties_by_catalog_order() {
        // two genes equidistant from the query position
        let catalog = vec![
            gene("second", "Chr01", 3000, 4000, Strand::Forward),
            gene("first", "Chr01", 1000, 2000, Strand::Forward),
        ];
        let index = GeneIndex::build(&catalog);

        // position 2500 is 500 bp from both
        let hits = index.nearby("Chr01", 2500, 5000);
        let ids: Vec<&str> = hits.iter().map(|h| h.gene.gene_id.as_str()).collect();
        assert_eq!(ids, vec!["second", "first"]);
    }

    #[rstest]
    fn test_nearby_respects_threshold(catalog: Vec<Gene>) {
        let index = GeneIndex::build(&catalog);

        let hits = index.nearby("Chr01", 4000, 999);
        assert_eq!(hits, vec![]);

        let hits = index.nearby("Chr01", 4000, 1000);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].gene.gene_id, "g2");
    }

    #[rstest]
    fn test_nearby_is_chromosome_scoped(catalog: Vec<Gene>) {
        let index = GeneIndex::build(&catalog);

        assert!(index.has_chrom("Chr02"));
        assert!(!index.has_chrom("Chr03"));

        let hits = index.nearby("Chr02", 1500, 5000);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].gene.gene_id, "g4");

        assert_eq!(index.nearby("Chr03", 1500, 5000), vec![]);
    }

    #[rstest]
    fn test_within_gene_has_distance_zero(catalog: Vec<Gene>) {
        let index = GeneIndex::build(&catalog);

        let hits = index.nearby("Chr01", 9200, 0);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].gene.gene_id, "g3");
        assert_eq!(hits[0].distance, 0);
    }

    #[rstest]
    fn test_long_gene_is_not_missed_by_lower_bound(catalog: Vec<Gene>) {
        // a gene spanning far past later starts must still be found when
        // the query lands deep inside it
        let mut catalog = catalog;
        catalog.push(gene("giant", "Chr01", 0, 50000, Strand::Forward));
        let index = GeneIndex::build(&catalog);

        let hits = index.nearby("Chr01", 40000, 100);
        let ids: Vec<&str> = hits.iter().map(|h| h.gene.gene_id.as_str()).collect();
        assert_eq!(ids, vec!["giant"]);
    }
}
