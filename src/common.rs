//! Common types for the sea battle core: board errors, shot outcomes and
//! turn failures.

use core::fmt;

/// Lifecycle of a [`Grid`](crate::Grid).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    /// Vessels may be placed, shots are rejected.
    Setup,
    /// Shots are accepted, placement is closed.
    Active,
    /// Every vessel is sunk; nothing is accepted any more.
    Finished,
}

/// Result of a shot that the grid accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// No vessel occupies the coordinate.
    Miss,
    /// A vessel was damaged but still floats.
    Hit,
    /// The shot took the last segment of a vessel.
    Sunk,
}

impl ShotOutcome {
    /// Whether the shooter keeps the turn after this outcome.
    pub fn grants_extra_shot(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Errors returned by Grid and Vessel operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Shot coordinate lies outside the grid.
    OutOfBounds,
    /// Coordinate was already fired at or revealed.
    AlreadyTargeted,
    /// Vessel leaves the grid, overlaps or touches another vessel.
    WrongPlacement,
    /// Vessels need between 1 and `i32::MAX` segments.
    InvalidLength,
    /// Board side is larger than [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE).
    InvalidSize,
    /// Operation is not allowed in the grid's current phase.
    WrongPhase(Phase),
    /// Fleet generation gave up after its regeneration budget.
    UnableToPlaceFleet,
}

impl BoardError {
    /// Errors that a combatant answers by choosing another target.
    pub fn is_retryable(self) -> bool {
        matches!(self, BoardError::OutOfBounds | BoardError::AlreadyTargeted)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Coordinates are outside the board"),
            BoardError::AlreadyTargeted => write!(f, "This cell has already been targeted"),
            BoardError::WrongPlacement => {
                write!(f, "Vessel is out of bounds or touches another vessel")
            }
            BoardError::InvalidLength => write!(f, "Vessel length is out of range"),
            BoardError::InvalidSize => write!(
                f,
                "Board size must not exceed {}",
                crate::config::MAX_BOARD_SIZE
            ),
            BoardError::WrongPhase(phase) => write!(f, "Operation not allowed in {:?} phase", phase),
            BoardError::UnableToPlaceFleet => write!(f, "Unable to place the fleet"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Failure of a combatant's turn that cannot be fixed by picking a new target.
#[derive(Debug)]
pub enum TurnError<E> {
    /// The move source itself failed (closed input, broken terminal...).
    Input(E),
    /// The opponent grid refused the shot for a non-retryable reason.
    Board(BoardError),
}

impl<E: fmt::Display> fmt::Display for TurnError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TurnError::Input(e) => write!(f, "Move input failed: {}", e),
            TurnError::Board(e) => write!(f, "Board error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl<E> std::error::Error for TurnError<E>
where
    E: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Input(e) => Some(e),
            TurnError::Board(e) => Some(e),
        }
    }
}
