//! Ship types and the fleet catalog.

use core::fmt;
use rand::Rng;

use crate::config::FLEET;

/// Type of ship: board symbol, name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ship {
    id: char,
    name: &'static str,
    length: usize,
}

impl Ship {
    /// Create a new ship type.
    pub const fn new(id: char, name: &'static str, length: usize) -> Self {
        Self { id, name, length }
    }

    /// Symbol written into every cell the ship occupies.
    pub fn id(&self) -> char {
        self.id
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl fmt::Display for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// The full catalog, always in the same order.
pub fn all_ships() -> &'static [Ship] {
    &FLEET
}

/// Draw a ship uniformly from the catalog, redrawing while the pick is in `excluding`.
///
/// `excluding` must leave at least one ship available, otherwise this never returns.
pub fn random_ship<R: Rng + ?Sized>(rng: &mut R, excluding: &[Ship]) -> Ship {
    debug_assert!(
        FLEET.iter().any(|s| !excluding.contains(s)),
        "every ship is excluded"
    );
    let mut ship = FLEET[rng.random_range(0..FLEET.len())];
    while excluding.contains(&ship) {
        ship = FLEET[rng.random_range(0..FLEET.len())];
    }
    ship
}
