use thiserror::Error;

/// Rejections raised at the grid/engine construction boundary.
///
/// Search operations themselves never fail; an unreachable goal is reported
/// through the returned path.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },
    #[error("grid of {width}x{height} exceeds the {max}x{max} limit")]
    TooLarge { width: usize, height: usize, max: usize },
    #[error("obstacle density must be in [0, 1), got {0}")]
    InvalidDensity(f64),
    #[error("beam width must be positive")]
    InvalidBeamWidth,
    #[error("cell ({row}, {col}) is outside the {width}x{height} grid")]
    OutOfBounds { row: i32, col: i32, width: usize, height: usize },
    #[error("malformed grid layout: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_values() {
        let e = GridError::InvalidDimensions { width: 0, height: 4 };
        assert_eq!(e.to_string(), "grid dimensions must be positive, got 0x4");
        let e = GridError::OutOfBounds { row: 7, col: -1, width: 5, height: 5 };
        assert_eq!(e.to_string(), "cell (7, -1) is outside the 5x5 grid");
        let e = GridError::TooLarge { width: 101, height: 20, max: 100 };
        assert_eq!(e.to_string(), "grid of 101x20 exceeds the 100x100 limit");
    }
}
