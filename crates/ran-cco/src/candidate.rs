//! One candidate solution: a gene vector index-aligned with the site list.

use ran_core::{AntennaConfig, SimRng, TunableParams};

/// An ordered sequence of gene triples, one per antenna site.
///
/// Index alignment with the input antenna slice is the crate's central
/// invariant: entry `i` always belongs to antenna `i`.  The gene vector is
/// private so a candidate can never be reordered or resized after
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate {
    genes: Vec<TunableParams>,
}

impl Candidate {
    /// Wrap an existing gene vector.
    pub fn from_genes(genes: Vec<TunableParams>) -> Self {
        Self { genes }
    }

    /// Sample a candidate of `site_count` genes uniformly on the step grid.
    pub fn sample(site_count: usize, rng: &mut SimRng) -> Self {
        Self {
            genes: (0..site_count).map(|_| TunableParams::sample(rng)).collect(),
        }
    }

    #[inline]
    pub fn genes(&self) -> &[TunableParams] {
        &self.genes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Derive the antenna set this candidate describes.
    ///
    /// # Panics
    ///
    /// Panics if the gene count does not match `antennas.len()` — that is a
    /// broken contract, not a runtime condition.
    pub fn apply_to(&self, antennas: &[AntennaConfig]) -> Vec<AntennaConfig> {
        assert_eq!(
            self.genes.len(),
            antennas.len(),
            "candidate gene count does not match antenna count"
        );
        antennas
            .iter()
            .zip(&self.genes)
            .map(|(antenna, &params)| antenna.with_params(params))
            .collect()
    }
}
