pub mod astar;
pub mod beam;
pub mod frontier;
pub mod greedy;
pub mod path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::models::SearchResult;
use crate::options::BeamParams;

pub use beam::{adaptive_beam_width, widen_stalled, MAX_BEAM_WIDTH};
pub use frontier::{Frontier, FrontierEntry};
pub use path::{reconstruct_path, Predecessors};

/// Runs searches against a borrowed, read-only [`Grid`].
///
/// Every call owns its own frontier, explored set and predecessor map, so one
/// grid can back any number of concurrent engines.
#[derive(Clone, Copy, Debug)]
pub struct SearchEngine<'a> {
    grid: &'a Grid,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "snake_case")]
pub enum Algorithm {
    AStar,
    Greedy,
    Beam(BeamParams),
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::AStar => "A*",
            Algorithm::Greedy => "Greedy Best-First",
            Algorithm::Beam(_) => "Beam Search",
        }
    }
}

impl<'a> SearchEngine<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    /// Dispatch to one of the three searches. Beam search draws a fresh
    /// entropy-seeded generator; use [`SearchEngine::run_with_rng`] to pin it.
    pub fn run(&self, algorithm: Algorithm) -> SearchResult {
        let mut rng = StdRng::from_entropy();
        self.run_with_rng(algorithm, &mut rng)
    }

    pub fn run_with_rng<R: rand::Rng + ?Sized>(&self, algorithm: Algorithm, rng: &mut R) -> SearchResult {
        match algorithm {
            Algorithm::AStar => self.astar_search(),
            Algorithm::Greedy => self.greedy_search(),
            Algorithm::Beam(params) => self.beam_search_with_rng(params.beam_width, params.adaptive, rng),
        }
    }
}
