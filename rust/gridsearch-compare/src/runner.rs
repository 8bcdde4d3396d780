use std::panic;
use std::thread;
use std::time::Instant;

use gridsearch_core::{Algorithm, BeamParams, Grid, SearchEngine};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use crate::report::{AlgorithmReport, ComparisonReport};

/// Run A*, greedy best-first and beam search side by side on scoped threads
/// against the same grid. With a seed the beam tie-breaks are reproducible.
pub fn run_comparison(grid: &Grid, beam: BeamParams, seed: Option<u64>) -> ComparisonReport {
    let engine = SearchEngine::new(grid);
    let algorithms = [Algorithm::AStar, Algorithm::Greedy, Algorithm::Beam(beam)];

    let reports: Vec<AlgorithmReport> = thread::scope(|s| {
        let handles: Vec<_> = algorithms
            .iter()
            .map(|&algorithm| {
                s.spawn(move || {
                    let mut rng = match seed {
                        Some(seed) => StdRng::seed_from_u64(seed),
                        None => StdRng::from_entropy(),
                    };
                    let started = Instant::now();
                    let result = engine.run_with_rng(algorithm, &mut rng);
                    let elapsed_us = started.elapsed().as_micros() as u64;
                    info!(
                        algorithm = algorithm.name(),
                        expansions = result.expansions,
                        path_len = result.path_len(),
                        elapsed_us,
                        "algorithm finished"
                    );
                    AlgorithmReport::from_result(algorithm.name(), grid, &result)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_else(|e| panic::resume_unwind(e)))
            .collect()
    });

    ComparisonReport::new(grid, beam, reports)
}
