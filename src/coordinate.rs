//! Grid coordinates in letter/number form (`A1` .. `J10`) and their zero-based indices.

use core::fmt;
use core::str::FromStr;
use rand::Rng;

use crate::common::DeployError;
use crate::config::GRID_SIZE;

/// A validated grid position: column letter and one-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    letter: char,
    number: u8,
}

impl Coordinate {
    /// Build a coordinate from a column letter (any case) and a row number.
    pub fn from_letter_and_number(letter: char, number: u8) -> Result<Self, DeployError> {
        let letter = letter.to_ascii_uppercase();
        if Self::letter_to_number(letter).is_none() {
            return Err(DeployError::InvalidColumn(letter));
        }
        // rows share the column range
        if Self::number_to_letter(number).is_none() {
            return Err(DeployError::InvalidRow(number));
        }
        Ok(Coordinate { letter, number })
    }

    /// Uniformly random coordinate on the grid.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let number = rng.random_range(1..=GRID_SIZE as u8);
        let letter = (b'A' + rng.random_range(0..GRID_SIZE as u8)) as char;
        Coordinate { letter, number }
    }

    /// `A` maps to 1, `B` to 2 and so on up to the grid size. Expects uppercase.
    pub fn letter_to_number(letter: char) -> Option<u8> {
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let n = letter as u8 - b'A' + 1;
        ((n as usize) <= GRID_SIZE).then_some(n)
    }

    /// Inverse of [`Coordinate::letter_to_number`].
    pub fn number_to_letter(number: u8) -> Option<char> {
        (1..=GRID_SIZE as u8)
            .contains(&number)
            .then(|| (b'A' + number - 1) as char)
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Zero-based column index.
    pub fn x(&self) -> usize {
        (self.letter as u8 - b'A') as usize
    }

    /// Zero-based row index.
    pub fn y(&self) -> usize {
        self.number as usize - 1
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter, self.number)
    }
}

impl FromStr for Coordinate {
    type Err = DeployError;

    /// Parses `"C7"`, `"c7"` or `"J10"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(DeployError::MalformedCoordinate)?;
        if !letter.is_ascii_alphabetic() {
            return Err(DeployError::MalformedCoordinate);
        }
        let number = chars
            .as_str()
            .parse::<u8>()
            .map_err(|_| DeployError::MalformedCoordinate)?;
        Self::from_letter_and_number(letter, number)
    }
}
