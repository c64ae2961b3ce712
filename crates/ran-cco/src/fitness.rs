//! Candidate fitness: nominal coverage area minus aggregate interference.

use ran_core::AntennaConfig;
use ran_propagation::{DEFAULT_MIN_SIGNAL_DBM, coverage_radius, interference};

use crate::{Candidate, Population};

/// Reduces a candidate to a scalar fitness against a fixed site list.
///
/// `fitness = Σ π·r_i² − |Σ_{i≠j} interference(i, j)|`
///
/// The coverage term sums nominal per-antenna disks; overlapping disks are
/// counted twice.  That double-count is part of the fitness definition — it
/// keeps scores comparable across runs and with the historical fixtures, so
/// it must not be "corrected" to a union area.  The interference term sums
/// over ordered pairs, i.e. each unordered pair contributes twice.
///
/// Pure: two calls on the same candidate return the identical scalar.
pub struct FitnessEvaluator {
    antennas:       Vec<AntennaConfig>,
    min_signal_dbm: f64,
}

impl FitnessEvaluator {
    /// Evaluator over `antennas` at the default −95 dBm coverage threshold.
    pub fn new(antennas: Vec<AntennaConfig>) -> Self {
        Self::with_min_signal(antennas, DEFAULT_MIN_SIGNAL_DBM)
    }

    /// Evaluator with an explicit coverage threshold.
    pub fn with_min_signal(antennas: Vec<AntennaConfig>, min_signal_dbm: f64) -> Self {
        Self { antennas, min_signal_dbm }
    }

    #[inline]
    pub fn antennas(&self) -> &[AntennaConfig] {
        &self.antennas
    }

    #[inline]
    pub fn site_count(&self) -> usize {
        self.antennas.len()
    }

    /// Fitness of one candidate.  Higher is better.
    ///
    /// An empty site list scores 0.
    ///
    /// # Panics
    ///
    /// Panics if the candidate's gene count does not match the site count.
    pub fn fitness(&self, candidate: &Candidate) -> f64 {
        let derived = candidate.apply_to(&self.antennas);

        let mut coverage = 0.0;
        let mut total_interference = 0.0;

        for (i, antenna) in derived.iter().enumerate() {
            let radius = coverage_radius(antenna, self.min_signal_dbm) as f64;
            coverage += std::f64::consts::PI * radius * radius;

            for (j, other) in derived.iter().enumerate() {
                if i != j {
                    total_interference += interference(antenna, other);
                }
            }
        }

        coverage - total_interference.abs()
    }

    /// Fitness of every candidate in a population, in candidate order.
    ///
    /// With the `parallel` feature the evaluations run on Rayon's thread
    /// pool; the result vector is identical either way.
    pub fn evaluate_population(&self, population: &Population) -> Vec<f64> {
        #[cfg(not(feature = "parallel"))]
        {
            population.candidates().iter().map(|c| self.fitness(c)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            population.candidates().par_iter().map(|c| self.fitness(c)).collect()
        }
    }
}
