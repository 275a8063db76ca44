//! Grid state: vessel placement with buffer zones and shot resolution.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Phase, ShotOutcome};
use crate::config::MAX_BOARD_SIZE;
use crate::ship::{Coordinate, Vessel};

/// Display state of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Empty,
    /// Undamaged vessel segment.
    Ship,
    /// Damaged vessel segment.
    Hit,
    /// Fired at and empty, or revealed around a sunk vessel.
    Explored,
}

impl Cell {
    fn symbol(self, hidden: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship if hidden => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Explored => 'T',
        }
    }
}

/// One side's square board.
///
/// During [`Phase::Setup`] the exclusion set holds every vessel cell and its
/// buffer zone, so placements can neither overlap nor touch. Leaving setup
/// clears it; from then on it holds fired-at cells and the revealed buffer
/// zones of sunk vessels. A buffer cell of a vessel that still floats is
/// therefore a legal target, while one around a sunk vessel is reported as
/// [`BoardError::AlreadyTargeted`] since it is already shown as explored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    hidden: bool,
    phase: Phase,
    sunk_count: usize,
    cells: Vec<Cell>,
    excluded: BTreeSet<Coordinate>,
    vessels: Vec<Vessel>,
}

impl Grid {
    /// Create an empty `size`×`size` grid in [`Phase::Setup`].
    ///
    /// # Panics
    ///
    /// If `size` exceeds [`MAX_BOARD_SIZE`]; use [`Grid::try_new`] for
    /// untrusted sizes.
    pub fn new(size: usize) -> Self {
        match Self::try_new(size) {
            Ok(grid) => grid,
            Err(_) => panic!("board size {} exceeds {}", size, MAX_BOARD_SIZE),
        }
    }

    /// Like [`Grid::new`], returning [`BoardError::InvalidSize`] for oversized
    /// boards.
    pub fn try_new(size: usize) -> Result<Self, BoardError> {
        if size > MAX_BOARD_SIZE {
            return Err(BoardError::InvalidSize);
        }
        Ok(Grid {
            size,
            hidden: false,
            phase: Phase::Setup,
            sunk_count: 0,
            cells: vec![Cell::Empty; size * size],
            excluded: BTreeSet::new(),
            vessels: Vec::new(),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether undamaged vessel cells are masked when rendered.
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    pub fn vessel_count(&self) -> usize {
        self.vessels.len()
    }

    pub fn sunk_count(&self) -> usize {
        self.sunk_count
    }

    /// Returns `true` once every placed vessel is sunk.
    pub fn is_defeated(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Whether `coord` lies inside `[0, size)²`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        let size = self.size as i64;
        (0..size).contains(&(coord.row as i64)) && (0..size).contains(&(coord.col as i64))
    }

    /// State of the cell at `coord`, or `None` outside the grid.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    fn mark(&mut self, coord: Coordinate, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.cells[i] = cell;
        }
    }

    /// In-bounds cells within one step of any of the vessel's cells.
    fn buffer_zone(&self, vessel: &Vessel) -> BTreeSet<Coordinate> {
        vessel
            .occupied_coordinates()
            .flat_map(Coordinate::neighborhood)
            .filter(|c| self.contains(*c))
            .collect()
    }

    /// Place a vessel, blocking its buffer zone for later placements.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.phase != Phase::Setup {
            return Err(BoardError::WrongPhase(self.phase));
        }
        for coord in vessel.occupied_coordinates() {
            if !self.contains(coord) || self.excluded.contains(&coord) {
                return Err(BoardError::WrongPlacement);
            }
        }
        for coord in vessel.occupied_coordinates() {
            self.mark(coord, Cell::Ship);
        }
        let zone = self.buffer_zone(&vessel);
        self.excluded.extend(zone);
        log::debug!(
            "placed vessel of length {} at {} ({:?})",
            vessel.length(),
            vessel.bow(),
            vessel.orientation()
        );
        self.vessels.push(vessel);
        Ok(())
    }

    /// Close setup and open the grid for shots.
    ///
    /// Drops the placement exclusion set; vessel occupation is still known
    /// from the placed vessels.
    pub fn reset_transient_state(&mut self) -> Result<(), BoardError> {
        if self.phase != Phase::Setup {
            return Err(BoardError::WrongPhase(self.phase));
        }
        self.excluded.clear();
        self.phase = if self.vessels.is_empty() {
            Phase::Finished
        } else {
            Phase::Active
        };
        Ok(())
    }

    /// Resolve a shot at `target`.
    ///
    /// Failed shots leave the grid untouched.
    pub fn fire_at(&mut self, target: Coordinate) -> Result<ShotOutcome, BoardError> {
        if self.phase != Phase::Active {
            return Err(BoardError::WrongPhase(self.phase));
        }
        if !self.contains(target) {
            return Err(BoardError::OutOfBounds);
        }
        if !self.excluded.insert(target) {
            return Err(BoardError::AlreadyTargeted);
        }

        let Some(idx) = self.vessels.iter().position(|v| v.is_hit_by(target)) else {
            self.mark(target, Cell::Explored);
            log::debug!("shot at {} missed", target);
            return Ok(ShotOutcome::Miss);
        };

        self.mark(target, Cell::Hit);
        if !self.vessels[idx].register_hit() {
            log::debug!("shot at {} hit", target);
            return Ok(ShotOutcome::Hit);
        }

        self.sunk_count += 1;
        let zone = self.buffer_zone(&self.vessels[idx]);
        for coord in zone {
            if self.excluded.insert(coord) && self.cell(coord) == Some(Cell::Empty) {
                self.mark(coord, Cell::Explored);
            }
        }
        if self.sunk_count == self.vessels.len() {
            self.phase = Phase::Finished;
        }
        log::info!(
            "vessel at {} sunk ({}/{})",
            self.vessels[idx].bow(),
            self.sunk_count,
            self.vessels.len()
        );
        Ok(ShotOutcome::Sunk)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..self.size {
            write!(f, " {} |", c + 1)?;
        }
        for (r, row) in self.cells.chunks(self.size.max(1)).enumerate() {
            write!(f, "\n{} |", r + 1)?;
            for cell in row {
                write!(f, " {} |", cell.symbol(self.hidden))?;
            }
        }
        Ok(())
    }
}
