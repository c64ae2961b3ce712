//! smallcell — end-to-end demo for the rust_ran engine.
//!
//! Optimizes a three-site layout with the genetic CCO optimizer, then runs
//! the MRO mobility simulation over the optimized network and writes the
//! replay log plus per-tick metrics to CSV.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use ran_cco::{CcoConfig, CcoObserver, GeneticOptimizer};
use ran_core::{AntennaConfig, AntennaId, Area, Point};
use ran_metrics::Metrics;
use ran_mro::{MroBuilder, MroConfig};
use ran_output::{CsvWriter, MroOutputObserver};
use ran_propagation::coverage_radius;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64   = 42;
const USER_COUNT:    usize = 100;
const DURATION_SECS: f64   = 60.0;
const AREA_WIDTH:    f64   = 800.0;
const AREA_HEIGHT:   f64   = 600.0;

// ── Progress observer ─────────────────────────────────────────────────────────

struct GenerationPrinter {
    interval: u32,
}

impl CcoObserver for GenerationPrinter {
    fn on_generation(&mut self, generation: u32, generation_best: f64, global_best: f64) {
        if generation % self.interval == 0 {
            println!(
                "  gen {generation:>3}: best {generation_best:>14.0}  (global {global_best:>14.0})"
            );
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== smallcell — rust_ran radio-network engine ===");
    println!("Sites: 3  |  Users: {USER_COUNT}  |  Seed: {SEED}");
    println!();

    // 1. The site layout.
    let area = Area::new(AREA_WIDTH, AREA_HEIGHT);
    let antennas = vec![
        AntennaConfig::new(AntennaId(0), Point::new(200.0, 150.0), 20.0, 0.0, 0.0),
        AntennaConfig::new(AntennaId(1), Point::new(400.0, 300.0), 20.0, 0.0, 120.0),
        AntennaConfig::new(AntennaId(2), Point::new(600.0, 200.0), 20.0, 0.0, 240.0),
    ];

    // 2. CCO: evolve power/tilt/azimuth.
    let cco_config = CcoConfig { seed: SEED, ..CcoConfig::default() };
    println!(
        "CCO: {} generations, population {}",
        cco_config.generations, cco_config.population_size
    );
    let optimizer = GeneticOptimizer::new(antennas.clone(), cco_config)?;

    let t0 = Instant::now();
    let outcome = optimizer.run(&mut GenerationPrinter { interval: 20 });
    println!(
        "CCO complete in {:.3} s — fitness {:.0} after {} generations",
        t0.elapsed().as_secs_f64(),
        outcome.fitness,
        outcome.iterations
    );
    println!();

    println!("{:<10} {:>10} {:>8} {:>9} {:>12}", "Antenna", "Power dBm", "Tilt", "Azimuth", "Radius m");
    println!("{}", "-".repeat(54));
    for antenna in &outcome.optimized_antennas {
        println!(
            "{:<10} {:>10.1} {:>8.1} {:>9.1} {:>12}",
            antenna.id.0,
            antenna.power_dbm,
            antenna.tilt_deg,
            antenna.azimuth_deg,
            coverage_radius(antenna, -95.0)
        );
    }
    println!();

    // 3. MRO: simulate users moving across the optimized network.
    let mro_config = MroConfig {
        duration_secs: DURATION_SECS,
        seed:          SEED,
        ..MroConfig::default()
    };
    println!(
        "MRO: {} ticks of {:.1} s over {:.0}×{:.0} m",
        mro_config.total_ticks(),
        mro_config.update_interval_secs,
        area.width,
        area.height
    );

    let mut sim = MroBuilder::new(mro_config.clone(), outcome.optimized_antennas.clone(), area)
        .scatter(USER_COUNT)
        .build()?;

    std::fs::create_dir_all("output/smallcell")?;
    let writer = CsvWriter::new(Path::new("output/smallcell"))?;
    let mut obs = MroOutputObserver::new(writer, &mro_config, sim.antennas());

    let t1 = Instant::now();
    sim.run(&mut obs);
    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }
    println!(
        "MRO complete in {:.3} s — {} replay records in output/smallcell/",
        t1.elapsed().as_secs_f64(),
        sim.steps().len()
    );
    println!();

    // 4. Final metrics.
    let metrics = Metrics::compute(sim.users(), sim.antennas());
    println!("Coverage ratio         : {:.1} %", metrics.coverage_ratio * 100.0);
    println!("Avg signal (connected) : {:.1} dBm", metrics.avg_signal_dbm);
    println!("Handover success rate  : {:.1} %", metrics.handover_success_rate * 100.0);
    println!("Load per antenna       :");
    for load in &metrics.load_distribution {
        println!("  antenna {:<3} {:>4} users", load.antenna.0, load.connected_users);
    }

    Ok(())
}
