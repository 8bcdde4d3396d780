use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::grid::{generate, Grid};

pub const DEFAULT_WIDTH: usize = 20;
pub const DEFAULT_HEIGHT: usize = 20;
pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.3;
pub const DEFAULT_BEAM_WIDTH: usize = 5;
/// Largest width or height accepted for a generated grid.
pub const MAX_DIMENSION: usize = 100;

/// Parameters for a randomly populated grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridOptions {
    pub width: usize,
    pub height: usize,
    pub obstacle_density: f64,
    /// Fixed seed for obstacle placement; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            obstacle_density: DEFAULT_OBSTACLE_DENSITY,
            seed: None,
        }
    }
}

impl GridOptions {
    pub fn validate(&self) -> Result<(), GridError> {
        if self.width == 0 || self.height == 0 {
            return Err(GridError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(GridError::TooLarge { width: self.width, height: self.height, max: MAX_DIMENSION });
        }
        generate::check_density(self.obstacle_density)
    }

    pub fn build(&self) -> Result<Grid, GridError> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        generate::random_grid(self.width, self.height, self.obstacle_density, &mut rng)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BeamParams {
    pub beam_width: usize,
    /// Scale the width from the grid's obstacle density before searching.
    pub adaptive: bool,
}

impl Default for BeamParams {
    fn default() -> Self {
        Self { beam_width: DEFAULT_BEAM_WIDTH, adaptive: true }
    }
}

impl BeamParams {
    pub fn new(beam_width: usize, adaptive: bool) -> Self {
        Self { beam_width, adaptive }
    }

    pub fn validate(&self) -> Result<(), GridError> {
        if self.beam_width == 0 {
            return Err(GridError::InvalidBeamWidth);
        }
        Ok(())
    }
}
