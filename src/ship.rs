//! Coordinates and vessels.

use core::fmt;
use rand::Rng;

use crate::common::BoardError;

/// A cell position, zero-based. Signed so that neighbours of edge cells can
/// be expressed and rejected as out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The 3x3 block centred on this coordinate, itself included.
    pub fn neighborhood(self) -> impl Iterator<Item = Coordinate> {
        (-1..=1).flat_map(move |dr| {
            (-1..=1).map(move |dc| Coordinate::new(self.row + dr, self.col + dc))
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Segments extend along the row, column increasing.
    Horizontal,
    /// Segments extend down the column, row increasing.
    Vertical,
}

impl Orientation {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// A ship occupying `length` contiguous cells starting at `bow`.
///
/// The occupied cells are always derived from `bow`, `length` and
/// `orientation`; only `remaining_hits` changes after construction, and only
/// through [`Grid::fire_at`](crate::Grid::fire_at).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Vessel {
    bow: Coordinate,
    length: usize,
    orientation: Orientation,
    remaining_hits: usize,
}

impl Vessel {
    /// Build an undamaged vessel. Bounds are checked by the grid on placement.
    ///
    /// Fails with [`BoardError::InvalidLength`] for an empty vessel or one
    /// longer than `i32::MAX`, and with [`BoardError::WrongPlacement`] when the
    /// stern would not be representable as a [`Coordinate`].
    pub fn new(bow: Coordinate, length: usize, orientation: Orientation) -> Result<Self, BoardError> {
        let span = i32::try_from(length).map_err(|_| BoardError::InvalidLength)?;
        if span == 0 {
            return Err(BoardError::InvalidLength);
        }
        let start = match orientation {
            Orientation::Horizontal => bow.col,
            Orientation::Vertical => bow.row,
        };
        if start.checked_add(span - 1).is_none() {
            return Err(BoardError::WrongPlacement);
        }
        Ok(Vessel {
            bow,
            length,
            orientation,
            remaining_hits: length,
        })
    }

    pub fn bow(&self) -> Coordinate {
        self.bow
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Segments not yet hit.
    pub fn remaining_hits(&self) -> usize {
        self.remaining_hits
    }

    pub fn is_sunk(&self) -> bool {
        self.remaining_hits == 0
    }

    /// Cells covered by the vessel, bow first. Always exactly `length` cells.
    pub fn occupied_coordinates(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length as i32).map(move |i| match self.orientation {
            Orientation::Horizontal => Coordinate::new(self.bow.row, self.bow.col + i),
            Orientation::Vertical => Coordinate::new(self.bow.row + i, self.bow.col),
        })
    }

    pub fn is_hit_by(&self, target: Coordinate) -> bool {
        self.occupied_coordinates().any(|c| c == target)
    }

    /// Take one segment of damage. Returns `true` if this sank the vessel.
    pub(crate) fn register_hit(&mut self) -> bool {
        self.remaining_hits = self.remaining_hits.saturating_sub(1);
        self.remaining_hits == 0
    }
}
