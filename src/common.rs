//! Error type shared by coordinate and direction construction.

use crate::config::GRID_SIZE;

/// Errors returned when building coordinates or directions from raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployError {
    /// Column letter is outside the grid.
    InvalidColumn(char),
    /// Row number is outside the grid.
    InvalidRow(u8),
    /// Direction value does not name one of the four directions.
    InvalidDirection(u8),
    /// Coordinate text is not a letter followed by a number.
    MalformedCoordinate,
}

impl core::fmt::Display for DeployError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let last = (b'A' + GRID_SIZE as u8 - 1) as char;
        match self {
            DeployError::InvalidColumn(c) => write!(
                f,
                "Letter '{}' not available on the grid. Use any letter between A and {}.",
                c, last
            ),
            DeployError::InvalidRow(n) => write!(
                f,
                "Number {} not available on the grid. Use any number between 1 and {}.",
                n, GRID_SIZE
            ),
            DeployError::InvalidDirection(d) => write!(
                f,
                "Direction {} does not exist. Use 1 (left), 2 (up), 3 (right) or 4 (down).",
                d
            ),
            DeployError::MalformedCoordinate => {
                write!(f, "Coordinate must be a column letter followed by a row number, e.g. C7")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DeployError {}
