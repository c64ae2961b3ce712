//! Optimizer observer trait for progress reporting.

use crate::CcoOutcome;

/// Callbacks invoked by [`GeneticOptimizer::run`][crate::GeneticOptimizer::run]
/// once per generation and once at the end.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u32 }
///
/// impl CcoObserver for ProgressPrinter {
///     fn on_generation(&mut self, generation: u32, generation_best: f64, global_best: f64) {
///         if generation % self.interval == 0 {
///             println!("gen {generation}: best {generation_best:.0} (global {global_best:.0})");
///         }
///     }
/// }
/// ```
pub trait CcoObserver {
    /// Called after each generation has been evaluated.
    ///
    /// `generation_best` is this generation's top fitness; `global_best` is
    /// the best fitness seen so far across all generations.
    fn on_generation(&mut self, _generation: u32, _generation_best: f64, _global_best: f64) {}

    /// Called once with the final outcome before `run` returns.
    fn on_done(&mut self, _outcome: &CcoOutcome) {}
}

/// A [`CcoObserver`] that does nothing.
pub struct NoopCcoObserver;

impl CcoObserver for NoopCcoObserver {}
