//! The genetic optimizer: INIT → EVALUATE → SELECT → CROSSOVER → MUTATE →
//! REPLACE, looped for a fixed generation count.

use log::debug;

use ran_core::{AntennaConfig, SimRng, TunableParams};
use ran_propagation::DEFAULT_MIN_SIGNAL_DBM;

use crate::{Candidate, CcoError, CcoObserver, CcoResult, FitnessEvaluator, Population};

// ── Config ───────────────────────────────────────────────────────────────────

/// Genetic-algorithm parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CcoConfig {
    /// Number of generations to run.
    pub generations: u32,

    /// Candidates per generation.  Odd sizes are legal: the leftover ranked
    /// candidate pairs with the top-ranked one.
    pub population_size: usize,

    /// Per-child probability of mutating every gene.  Must be in [0, 1].
    pub mutation_rate: f64,

    /// Per-pair probability of uniform crossover (otherwise children are
    /// plain copies of the parents).  Must be in [0, 1].
    pub crossover_rate: f64,

    /// Coverage threshold fed to the fitness evaluator, in dBm.
    pub min_signal_dbm: f64,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,
}

impl Default for CcoConfig {
    fn default() -> Self {
        Self {
            generations:     100,
            population_size: 50,
            mutation_rate:   0.1,
            crossover_rate:  0.8,
            min_signal_dbm:  DEFAULT_MIN_SIGNAL_DBM,
            seed:            0,
        }
    }
}

impl CcoConfig {
    fn validate(&self) -> CcoResult<()> {
        if self.population_size == 0 {
            return Err(CcoError::Config("population_size must be at least 1".into()));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(CcoError::Config(format!(
                "mutation_rate {} outside [0, 1]",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(CcoError::Config(format!(
                "crossover_rate {} outside [0, 1]",
                self.crossover_rate
            )));
        }
        Ok(())
    }
}

// ── Outcome ──────────────────────────────────────────────────────────────────

/// The optimizer's result.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CcoOutcome {
    /// Input antennas with the tunable triple replaced by the best
    /// candidate's genes, index-aligned with the input slice.
    pub optimized_antennas: Vec<AntennaConfig>,

    /// Fitness of the best candidate seen across all generations.
    pub fitness: f64,

    /// Generations actually run (0 for an empty site list).
    pub iterations: u32,
}

// ── Optimizer ────────────────────────────────────────────────────────────────

/// Evolves antenna tunables to maximize coverage minus interference.
///
/// Deterministic: all stochastic draws flow through one `SimRng` seeded
/// from [`CcoConfig::seed`].  Each generation is an immutable
/// [`Population`]; breeding builds the next one from scratch, so sibling
/// candidates can never share gene storage.
pub struct GeneticOptimizer {
    config:    CcoConfig,
    evaluator: FitnessEvaluator,
}

impl GeneticOptimizer {
    /// Validate `config` and build an optimizer over `antennas`.
    pub fn new(antennas: Vec<AntennaConfig>, config: CcoConfig) -> CcoResult<Self> {
        config.validate()?;
        let evaluator = FitnessEvaluator::with_min_signal(antennas, config.min_signal_dbm);
        Ok(Self { config, evaluator })
    }

    #[inline]
    pub fn config(&self) -> &CcoConfig {
        &self.config
    }

    /// Run the full generation loop and return the global best.
    pub fn run<O: CcoObserver>(&self, observer: &mut O) -> CcoOutcome {
        let site_count = self.evaluator.site_count();
        if site_count == 0 {
            let outcome = CcoOutcome {
                optimized_antennas: Vec::new(),
                fitness:            0.0,
                iterations:         0,
            };
            observer.on_done(&outcome);
            return outcome;
        }

        let mut rng = SimRng::new(self.config.seed);
        let mut population = Population::sample(self.config.population_size, site_count, &mut rng);

        let mut best_candidate: Option<Candidate> = None;
        let mut best_fitness = f64::NEG_INFINITY;

        for generation in 0..self.config.generations {
            let fitness = self.evaluator.evaluate_population(&population);
            let ranked = population.ranked(&fitness);

            let leader = ranked[0];
            if fitness[leader] > best_fitness {
                best_fitness = fitness[leader];
                best_candidate = Some(population.candidates()[leader].clone());
                debug!("generation {generation}: new global best fitness {best_fitness:.1}");
            }
            observer.on_generation(generation, fitness[leader], best_fitness);

            // REPLACE is pointless after the last evaluated generation.
            if generation + 1 < self.config.generations {
                population = self.breed(&population, &ranked, &mut rng);
            }
        }

        let outcome = match best_candidate {
            Some(candidate) => CcoOutcome {
                optimized_antennas: candidate.apply_to(self.evaluator.antennas()),
                fitness:            best_fitness,
                iterations:         self.config.generations,
            },
            // generations == 0: nothing was evaluated, return the input as-is.
            None => CcoOutcome {
                optimized_antennas: self.evaluator.antennas().to_vec(),
                fitness:            0.0,
                iterations:         0,
            },
        };
        observer.on_done(&outcome);
        outcome
    }

    /// SELECT + CROSSOVER + MUTATE + REPLACE: build the next generation.
    ///
    /// Adjacent ranked candidates pair up (rank-elitist).  An odd population
    /// leaves the last ranked candidate to pair with rank 0; the surplus
    /// child from that extra pair is truncated so the new generation has
    /// exactly `population_size` members.
    fn breed(&self, population: &Population, ranked: &[usize], rng: &mut SimRng) -> Population {
        let size = self.config.population_size;
        let candidates = population.candidates();
        let mut children: Vec<Candidate> = Vec::with_capacity(size + 1);

        for pair in ranked.chunks(2) {
            let parent_a = &candidates[pair[0]];
            let parent_b = &candidates[*pair.get(1).unwrap_or(&ranked[0])];

            let (mut child_a, mut child_b) = if rng.gen_bool(self.config.crossover_rate) {
                (
                    cross_genes(parent_a.genes(), parent_b.genes(), rng),
                    cross_genes(parent_a.genes(), parent_b.genes(), rng),
                )
            } else {
                (parent_a.genes().to_vec(), parent_b.genes().to_vec())
            };

            mutate_genes(&mut child_a, self.config.mutation_rate, rng);
            mutate_genes(&mut child_b, self.config.mutation_rate, rng);

            children.push(Candidate::from_genes(child_a));
            children.push(Candidate::from_genes(child_b));
            if children.len() >= size {
                break;
            }
        }
        children.truncate(size);

        Population::from_candidates(children)
    }
}

// ── Genetic operators ────────────────────────────────────────────────────────

/// Uniform per-gene crossover: every field of every gene is inherited from
/// one parent chosen with 50 % probability.  Genes are `Copy`, so the child
/// owns fresh values — no aliasing with either parent.
pub(crate) fn cross_genes(
    a: &[TunableParams],
    b: &[TunableParams],
    rng: &mut SimRng,
) -> Vec<TunableParams> {
    a.iter()
        .zip(b)
        .map(|(&ga, &gb)| TunableParams {
            power_dbm:   if rng.gen_bool(0.5) { ga.power_dbm } else { gb.power_dbm },
            tilt_deg:    if rng.gen_bool(0.5) { ga.tilt_deg } else { gb.tilt_deg },
            azimuth_deg: if rng.gen_bool(0.5) { ga.azimuth_deg } else { gb.azimuth_deg },
        })
        .collect()
}

/// With probability `rate`, perturb every gene by a uniform delta within
/// ±half its step, clamped to bounds.
pub(crate) fn mutate_genes(genes: &mut [TunableParams], rate: f64, rng: &mut SimRng) {
    if rng.gen_bool(rate) {
        for gene in genes.iter_mut() {
            *gene = gene.perturbed(rng);
        }
    }
}
