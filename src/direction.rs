//! The four directions a ship can extend in from its anchor.

use core::fmt;
use rand::Rng;

use crate::common::DeployError;
use crate::coordinate::Coordinate;

/// Direction a ship extends from its anchor coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Up,
    Right,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];

    /// Uniformly random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Unit step `(dx, dy)`. Rows grow downward.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }

    /// Indices `n` cells from `anchor` in this direction, which may lie off the grid.
    pub fn step(self, anchor: &Coordinate, n: usize) -> (isize, isize) {
        let (dx, dy) = self.delta();
        let n = n as isize;
        (anchor.x() as isize + dx * n, anchor.y() as isize + dy * n)
    }
}

/// Numeric form used by the classic layout tools: 1 left, 2 up, 3 right, 4 down.
impl TryFrom<u8> for Direction {
    type Error = DeployError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Left),
            2 => Ok(Direction::Up),
            3 => Ok(Direction::Right),
            4 => Ok(Direction::Down),
            other => Err(DeployError::InvalidDirection(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> u8 {
        match d {
            Direction::Left => 1,
            Direction::Up => 2,
            Direction::Right => 3,
            Direction::Down => 4,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Left => "left",
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
        };
        f.write_str(name)
    }
}
