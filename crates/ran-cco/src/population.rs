//! One generation of candidates.

use ran_core::SimRng;

use crate::Candidate;

/// A fixed-size set of candidates forming one generation.
///
/// Immutable once formed: breeding produces a whole new `Population`, the
/// old one is dropped.  There is no in-place mutation anywhere in the
/// generation cycle.
#[derive(Clone, Debug)]
pub struct Population {
    candidates: Vec<Candidate>,
}

impl Population {
    /// Wrap an existing candidate vector (used by REPLACE).
    pub fn from_candidates(candidates: Vec<Candidate>) -> Self {
        Self { candidates }
    }

    /// INIT: sample `size` candidates of `site_count` genes each.
    pub fn sample(size: usize, site_count: usize, rng: &mut SimRng) -> Self {
        Self {
            candidates: (0..size).map(|_| Candidate::sample(site_count, rng)).collect(),
        }
    }

    #[inline]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Candidate indices ordered by descending fitness.
    ///
    /// `fitness[i]` must correspond to `candidates()[i]`.  Ties keep the
    /// lower index first so ranking is fully deterministic.
    pub fn ranked(&self, fitness: &[f64]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.candidates.len()).collect();
        order.sort_by(|&a, &b| fitness[b].total_cmp(&fitness[a]).then(a.cmp(&b)));
        order
    }
}
