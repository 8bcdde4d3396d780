pub mod engine;
pub mod error;
pub mod grid;
pub mod models;
pub mod options;

pub use engine::{Algorithm, SearchEngine};
pub use error::GridError;
pub use grid::Grid;
pub use models::{Position, PositionSet, SearchResult};
pub use options::{BeamParams, GridOptions};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
