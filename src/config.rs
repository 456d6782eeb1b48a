use crate::ship::Ship;

/// Width and height of the square grid. Columns run `A..` and rows `1..` up to this.
pub const GRID_SIZE: usize = 10;
/// Character shown for a cell no ship occupies.
pub const PLACEHOLDER: char = '_';
pub const NUM_SHIPS: usize = 5;
pub const FLEET: [Ship; NUM_SHIPS] = [
    Ship::new('c', "carrier", 5),
    Ship::new('b', "battleship", 4),
    Ship::new('r', "cruiser", 3),
    Ship::new('s', "submarine", 3),
    Ship::new('d', "destroyer", 2),
];

/// Total number of cells the full fleet occupies once deployed.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 3 + 2;
