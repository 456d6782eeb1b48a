//! The deployment grid: a `GRID_SIZE`×`GRID_SIZE` matrix of ship ids.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use crate::config::{FLEET, GRID_SIZE, PLACEHOLDER};
use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::ship::Ship;

/// Cell matrix indexed `[y][x]` plus the ships deployed so far, in deployment order.
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[Option<char>; GRID_SIZE]; GRID_SIZE],
    deployed: Vec<Ship>,
}

impl Grid {
    /// Create an empty grid with no ships deployed.
    pub fn new() -> Self {
        Grid {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            deployed: Vec::new(),
        }
    }

    /// Ships deployed so far.
    pub fn deployed(&self) -> &[Ship] {
        &self.deployed
    }

    /// Returns `true` once every ship of the fleet is on the grid.
    pub fn has_deployed_all(&self) -> bool {
        FLEET.iter().all(|ship| self.deployed.contains(ship))
    }

    /// Id stored at `(x, y)`, or `None` when the cell is empty or off the grid.
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.cells.get(y).and_then(|row| row.get(x)).copied().flatten()
    }

    /// Number of non-empty cells.
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }

    /// Cells holding `ship`'s id, in row-major order.
    pub fn cells_of(&self, ship: &Ship) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for (y, row) in self.cells.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                if *cell == Some(ship.id()) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    /// Whether `ship` laid from `point` towards `direction` stays on the grid.
    pub fn fits_at(&self, ship: &Ship, point: &Coordinate, direction: Direction) -> bool {
        let (x, y) = direction.step(point, ship.length().saturating_sub(1));
        on_grid(x) && on_grid(y)
    }

    /// Whether any cell of the span is already taken.
    ///
    /// Only meaningful once [`Grid::fits_at`] has accepted the same placement.
    pub fn exists_at(&self, ship: &Ship, point: &Coordinate, direction: Direction) -> bool {
        debug_assert!(self.fits_at(ship, point, direction));
        span(ship, point, direction).any(|(x, y)| self.cells[y][x].is_some())
    }

    /// Write `ship` into the grid and record it as deployed.
    ///
    /// The caller must have checked the placement with [`Grid::fits_at`] and
    /// [`Grid::exists_at`]; nothing is re-checked here and nothing is undone.
    pub fn deploy(&mut self, ship: Ship, point: &Coordinate, direction: Direction) {
        debug_assert!(!self.deployed.contains(&ship), "{} deployed twice", ship);
        debug_assert!(self.fits_at(&ship, point, direction));
        for (x, y) in span(&ship, point, direction) {
            self.cells[y][x] = Some(ship.id());
        }
        self.deployed.push(ship);
    }

    /// Text listing with column letters across the top and row numbers down the side.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

fn on_grid(i: isize) -> bool {
    (0..GRID_SIZE as isize).contains(&i)
}

/// On-grid cells covered by `ship` from `point` towards `direction`.
fn span<'a>(
    ship: &Ship,
    point: &'a Coordinate,
    direction: Direction,
) -> impl Iterator<Item = (usize, usize)> + 'a {
    (0..ship.length())
        .map(move |n| direction.step(point, n))
        .filter(|&(x, y)| on_grid(x) && on_grid(y))
        .map(|(x, y)| (x as usize, y as usize))
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("   ")?;
        for c in 0..GRID_SIZE {
            write!(f, " {}", (b'A' + c as u8) as char)?;
            if c + 1 < GRID_SIZE {
                f.write_str(" ")?;
            }
        }
        writeln!(f)?;
        for (y, row) in self.cells.iter().enumerate() {
            write!(f, "{:>2}  ", y + 1)?;
            for (x, cell) in row.iter().enumerate() {
                write!(f, "{}", cell.unwrap_or(PLACEHOLDER))?;
                if x + 1 < GRID_SIZE {
                    f.write_str("  ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {{ deployed: {:?} }}", self.deployed)?;
        fmt::Display::fmt(self, f)
    }
}
