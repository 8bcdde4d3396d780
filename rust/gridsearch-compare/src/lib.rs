pub mod config;
pub mod errors;
pub mod report;
pub mod runner;

pub use config::Config;
pub use errors::CompareError;
pub use report::{AlgorithmReport, ComparisonReport, ShortestPath, Summary};
pub use runner::run_comparison;
