//! Deploys the whole fleet one randomly chosen ship at a time.

use alloc::string::String;
use rand::Rng;

use crate::grid::Grid;
use crate::placement::{find_placement, CandidateSource};
use crate::ship::{random_ship, Ship};

/// Place every ship of the fleet on a fresh grid using `rng` for all choices.
pub fn deploy_fleet<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    while !grid.has_deployed_all() {
        let ship = random_ship(rng, grid.deployed());
        deploy_one(&mut grid, ship, rng);
    }
    grid
}

/// Like [`deploy_fleet`], but anchors and directions come from `candidates`.
/// Ships are still picked with `rng`.
pub fn deploy_fleet_with<R, C>(rng: &mut R, candidates: &mut C) -> Grid
where
    R: Rng + ?Sized,
    C: CandidateSource + ?Sized,
{
    let mut grid = Grid::new();
    while !grid.has_deployed_all() {
        let ship = random_ship(rng, grid.deployed());
        deploy_one(&mut grid, ship, candidates);
    }
    grid
}

/// Deploy the fleet and return the rendered grid.
pub fn deploy_and_render<R: Rng + ?Sized>(rng: &mut R) -> String {
    deploy_fleet(rng).render()
}

fn deploy_one<C: CandidateSource + ?Sized>(grid: &mut Grid, ship: Ship, candidates: &mut C) {
    let placement = find_placement(&ship, grid, candidates);
    log::debug!(
        "deployed {} at {} going {} after {} attempt(s)",
        ship,
        placement.coordinate,
        placement.direction,
        placement.attempts
    );
    grid.deploy(ship, &placement.coordinate, placement.direction);
}
