//! Rejection-sampling search for a legal anchor and direction.

use rand::Rng;

use crate::coordinate::Coordinate;
use crate::direction::Direction;
use crate::grid::Grid;
use crate::ship::Ship;

/// Supplies candidate `(anchor, direction)` pairs to [`find_placement`].
///
/// Every random number generator is a source; tests can script their own.
pub trait CandidateSource {
    /// Next candidate. Both halves are drawn fresh on every call.
    fn next_candidate(&mut self) -> (Coordinate, Direction);
}

impl<R: Rng + ?Sized> CandidateSource for R {
    fn next_candidate(&mut self) -> (Coordinate, Direction) {
        let point = Coordinate::random(self);
        let direction = Direction::random(self);
        (point, direction)
    }
}

/// A placement accepted by [`find_placement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub coordinate: Coordinate,
    pub direction: Direction,
    /// Candidates drawn, including the accepted one.
    pub attempts: usize,
}

/// Draw candidates until one fits on the grid without touching another ship.
///
/// There is no retry limit; with the standard fleet at most 17 of 100 cells
/// are ever taken, so a free span turns up quickly.
pub fn find_placement<C: CandidateSource + ?Sized>(
    ship: &Ship,
    grid: &Grid,
    candidates: &mut C,
) -> Placement {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let (coordinate, direction) = candidates.next_candidate();
        if grid.fits_at(ship, &coordinate, direction)
            && !grid.exists_at(ship, &coordinate, direction)
        {
            return Placement {
                coordinate,
                direction,
                attempts,
            };
        }
        log::trace!(
            "rejected {} at {} going {} (attempt {})",
            ship,
            coordinate,
            direction,
            attempts
        );
    }
}
