//! Unit tests for ran-cco.

use ran_core::{AntennaConfig, AntennaId, Point, SimRng, TunableParams};

use crate::{Candidate, CcoConfig, CcoObserver, FitnessEvaluator, GeneticOptimizer, NoopCcoObserver, Population};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// The three-site layout used across the engine's fixtures.
fn three_sites() -> Vec<AntennaConfig> {
    vec![
        AntennaConfig::new(AntennaId(0), Point::new(200.0, 150.0), 20.0, 0.0, 0.0),
        AntennaConfig::new(AntennaId(1), Point::new(400.0, 300.0), 20.0, 0.0, 0.0),
        AntennaConfig::new(AntennaId(2), Point::new(600.0, 200.0), 20.0, 0.0, 0.0),
    ]
}

fn small_config(generations: u32, population_size: usize) -> CcoConfig {
    CcoConfig {
        generations,
        population_size,
        seed: 42,
        ..CcoConfig::default()
    }
}

fn uniform_candidate(site_count: usize, power: f64) -> Candidate {
    Candidate::from_genes(vec![TunableParams::new(power, 0.0, 0.0); site_count])
}

// ── Config validation ─────────────────────────────────────────────────────────

#[cfg(test)]
mod config {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(GeneticOptimizer::new(three_sites(), CcoConfig::default()).is_ok());
    }

    #[test]
    fn zero_population_rejected() {
        let cfg = small_config(10, 0);
        assert!(GeneticOptimizer::new(three_sites(), cfg).is_err());
    }

    #[test]
    fn out_of_range_rates_rejected() {
        let mut cfg = small_config(10, 4);
        cfg.mutation_rate = 1.5;
        assert!(GeneticOptimizer::new(three_sites(), cfg).is_err());

        let mut cfg = small_config(10, 4);
        cfg.crossover_rate = -0.1;
        assert!(GeneticOptimizer::new(three_sites(), cfg).is_err());
    }
}

// ── Candidate / Population ────────────────────────────────────────────────────

#[cfg(test)]
mod candidate {
    use super::*;

    #[test]
    fn sample_matches_site_count_and_bounds() {
        let mut rng = SimRng::new(7);
        let c = Candidate::sample(5, &mut rng);
        assert_eq!(c.len(), 5);
        assert!(c.genes().iter().all(|g| g.in_bounds()));
    }

    #[test]
    fn apply_preserves_fixed_fields_and_order() {
        let sites = three_sites();
        let c = uniform_candidate(3, 10.0);
        let derived = c.apply_to(&sites);
        assert_eq!(derived.len(), 3);
        for (d, s) in derived.iter().zip(&sites) {
            assert_eq!(d.id, s.id);
            assert_eq!(d.position, s.position);
            assert_eq!(d.frequency_mhz, s.frequency_mhz);
            assert_eq!(d.power_dbm, 10.0);
        }
    }

    #[test]
    #[should_panic(expected = "candidate gene count")]
    fn length_mismatch_is_a_contract_failure() {
        uniform_candidate(2, 10.0).apply_to(&three_sites());
    }

    #[test]
    fn ranked_orders_by_descending_fitness() {
        let mut rng = SimRng::new(1);
        let pop = Population::sample(4, 1, &mut rng);
        let order = pop.ranked(&[1.0, 4.0, -2.0, 4.0]);
        // Tie between indices 1 and 3 keeps the lower index first.
        assert_eq!(order, vec![1, 3, 0, 2]);
    }
}

// ── Fitness ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod fitness {
    use super::*;
    use ran_propagation::{coverage_radius, interference};

    #[test]
    fn idempotent_on_same_candidate() {
        let evaluator = FitnessEvaluator::new(three_sites());
        let c = uniform_candidate(3, 20.0);
        assert_eq!(evaluator.fitness(&c), evaluator.fitness(&c));
    }

    #[test]
    fn single_site_is_pure_coverage() {
        let site = vec![AntennaConfig::new(AntennaId(0), Point::new(0.0, 0.0), 20.0, 0.0, 0.0)];
        let evaluator = FitnessEvaluator::new(site.clone());
        let c = uniform_candidate(1, 20.0);

        let radius = coverage_radius(&site[0], -95.0) as f64;
        let expected = std::f64::consts::PI * radius * radius;
        assert_eq!(evaluator.fitness(&c), expected);
    }

    #[test]
    fn matches_hand_computed_three_site_value() {
        let sites = three_sites();
        let evaluator = FitnessEvaluator::new(sites.clone());
        let c = uniform_candidate(3, 20.0);

        let derived = c.apply_to(&sites);
        let mut coverage = 0.0;
        let mut interf = 0.0;
        for (i, a) in derived.iter().enumerate() {
            let r = coverage_radius(a, -95.0) as f64;
            coverage += std::f64::consts::PI * r * r;
            for (j, b) in derived.iter().enumerate() {
                if i != j {
                    interf += interference(a, b);
                }
            }
        }
        assert_eq!(evaluator.fitness(&c), coverage - interf.abs());
    }

    #[test]
    fn empty_site_list_scores_zero() {
        let evaluator = FitnessEvaluator::new(Vec::new());
        assert_eq!(evaluator.fitness(&Candidate::from_genes(Vec::new())), 0.0);
    }

    #[test]
    fn population_evaluation_matches_single_calls() {
        let evaluator = FitnessEvaluator::new(three_sites());
        let mut rng = SimRng::new(3);
        let pop = Population::sample(6, 3, &mut rng);
        let batch = evaluator.evaluate_population(&pop);
        for (candidate, &f) in pop.candidates().iter().zip(&batch) {
            assert_eq!(evaluator.fitness(candidate), f);
        }
    }
}

// ── Genetic operators ─────────────────────────────────────────────────────────

#[cfg(test)]
mod operators {
    use super::*;
    use crate::optimizer::{cross_genes, mutate_genes};

    #[test]
    fn crossover_inherits_every_field_from_a_parent() {
        let mut rng = SimRng::new(5);
        let a = vec![TunableParams::new(20.0, 5.0, 100.0); 4];
        let b = vec![TunableParams::new(-10.0, -5.0, 200.0); 4];
        let child = cross_genes(&a, &b, &mut rng);
        assert_eq!(child.len(), 4);
        for gene in &child {
            assert!(gene.power_dbm == 20.0 || gene.power_dbm == -10.0);
            assert!(gene.tilt_deg == 5.0 || gene.tilt_deg == -5.0);
            assert!(gene.azimuth_deg == 100.0 || gene.azimuth_deg == 200.0);
        }
    }

    #[test]
    fn mutation_keeps_genes_in_bounds_across_seeds() {
        for seed in 0..100 {
            let mut rng = SimRng::new(seed);
            let mut genes = vec![TunableParams::new(30.0, 10.0, 359.0); 3];
            for _ in 0..50 {
                mutate_genes(&mut genes, 1.0, &mut rng);
                assert!(genes.iter().all(|g| g.in_bounds()), "seed {seed} escaped bounds");
            }
        }
    }

    #[test]
    fn zero_rate_never_mutates() {
        let mut rng = SimRng::new(9);
        let original = vec![TunableParams::new(10.0, 2.0, 45.0); 3];
        let mut genes = original.clone();
        for _ in 0..100 {
            mutate_genes(&mut genes, 0.0, &mut rng);
        }
        assert_eq!(genes, original);
    }
}

// ── Full runs ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod runs {
    use super::*;

    /// Observer that records the global best after every generation.
    struct BestTracker(Vec<f64>);
    impl CcoObserver for BestTracker {
        fn on_generation(&mut self, _g: u32, _gen_best: f64, global_best: f64) {
            self.0.push(global_best);
        }
    }

    #[test]
    fn global_best_is_non_decreasing() {
        let optimizer = GeneticOptimizer::new(three_sites(), small_config(30, 8)).unwrap();
        let mut tracker = BestTracker(Vec::new());
        let outcome = optimizer.run(&mut tracker);

        assert_eq!(tracker.0.len(), 30);
        for window in tracker.0.windows(2) {
            assert!(window[1] >= window[0], "global best regressed: {window:?}");
        }
        assert_eq!(outcome.fitness, *tracker.0.last().unwrap());
    }

    #[test]
    fn outcome_is_index_aligned_and_in_bounds() {
        let sites = three_sites();
        let optimizer = GeneticOptimizer::new(sites.clone(), small_config(10, 6)).unwrap();
        let outcome = optimizer.run(&mut NoopCcoObserver);

        assert_eq!(outcome.optimized_antennas.len(), sites.len());
        assert_eq!(outcome.iterations, 10);
        for (optimized, input) in outcome.optimized_antennas.iter().zip(&sites) {
            assert_eq!(optimized.id, input.id);
            assert_eq!(optimized.position, input.position);
            assert_eq!(optimized.frequency_mhz, input.frequency_mhz);
            assert!(optimized.params().in_bounds());
        }
    }

    #[test]
    fn same_seed_reproduces_the_outcome() {
        let a = GeneticOptimizer::new(three_sites(), small_config(15, 7))
            .unwrap()
            .run(&mut NoopCcoObserver);
        let b = GeneticOptimizer::new(three_sites(), small_config(15, 7))
            .unwrap()
            .run(&mut NoopCcoObserver);
        assert_eq!(a.fitness, b.fitness);
        assert_eq!(a.optimized_antennas, b.optimized_antennas);
    }

    #[test]
    fn different_seeds_usually_diverge() {
        let mut cfg_a = small_config(5, 6);
        cfg_a.seed = 1;
        let mut cfg_b = small_config(5, 6);
        cfg_b.seed = 2;
        let a = GeneticOptimizer::new(three_sites(), cfg_a).unwrap().run(&mut NoopCcoObserver);
        let b = GeneticOptimizer::new(three_sites(), cfg_b).unwrap().run(&mut NoopCcoObserver);
        assert_ne!(a.optimized_antennas, b.optimized_antennas);
    }

    #[test]
    fn empty_site_list_yields_neutral_outcome() {
        let optimizer = GeneticOptimizer::new(Vec::new(), small_config(10, 4)).unwrap();
        let outcome = optimizer.run(&mut NoopCcoObserver);
        assert!(outcome.optimized_antennas.is_empty());
        assert_eq!(outcome.fitness, 0.0);
        assert_eq!(outcome.iterations, 0);
    }

    #[test]
    fn odd_population_size_runs() {
        let optimizer = GeneticOptimizer::new(three_sites(), small_config(12, 5)).unwrap();
        let outcome = optimizer.run(&mut NoopCcoObserver);
        assert!(outcome.fitness.is_finite());
        assert_eq!(outcome.iterations, 12);
    }

    #[test]
    fn zero_generations_returns_input_unchanged() {
        let sites = three_sites();
        let optimizer = GeneticOptimizer::new(sites.clone(), small_config(0, 4)).unwrap();
        let outcome = optimizer.run(&mut NoopCcoObserver);
        assert_eq!(outcome.optimized_antennas, sites);
        assert_eq!(outcome.iterations, 0);
    }
}
