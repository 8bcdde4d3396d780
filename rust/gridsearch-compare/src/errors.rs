use gridsearch_core::GridError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("invalid value {value:?} for {name}")]
    InvalidSetting { name: &'static str, value: String },
    #[error(transparent)]
    Grid(#[from] GridError),
}
