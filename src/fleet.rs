//! Random fleet generation.

use rand::Rng;

use crate::board::Grid;
use crate::common::BoardError;
use crate::config::GameConfig;
use crate::ship::{Coordinate, Orientation, Vessel};

/// Try random bows and orientations for a vessel of `length` until one fits,
/// consuming from the shared `attempts` budget. Returns `false` when the
/// budget runs out first.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
    length: usize,
    attempts: &mut usize,
) -> Result<bool, BoardError> {
    let size = i32::try_from(grid.size()).map_err(|_| BoardError::InvalidSize)?;
    if size == 0 {
        return Ok(false);
    }
    while *attempts > 0 {
        *attempts -= 1;
        let bow = Coordinate::new(rng.random_range(0..size), rng.random_range(0..size));
        let vessel = Vessel::new(bow, length, Orientation::random(rng))?;
        match grid.place_vessel(vessel) {
            Ok(()) => return Ok(true),
            Err(BoardError::WrongPlacement) => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(false)
}

/// Lay out the whole manifest on a fresh grid.
///
/// All-or-nothing: `None` means the attempt budget ran out and the partial
/// grid was discarded. A returned grid has already left setup.
pub fn place_fleet<R: Rng + ?Sized>(
    rng: &mut R,
    config: &GameConfig,
) -> Result<Option<Grid>, BoardError> {
    let mut grid = Grid::try_new(config.size)?;
    let mut attempts = config.placement_attempts;
    for &length in &config.fleet {
        if !random_placement(&mut grid, rng, length, &mut attempts)? {
            return Ok(None);
        }
    }
    grid.reset_transient_state()?;
    Ok(Some(grid))
}

/// Regenerate grids until the fleet fits, up to `max_regenerations` rounds.
pub fn random_grid<R: Rng + ?Sized>(rng: &mut R, config: &GameConfig) -> Result<Grid, BoardError> {
    for round in 1..=config.max_regenerations {
        if let Some(grid) = place_fleet(rng, config)? {
            log::debug!("fleet placed after {} round(s)", round);
            return Ok(grid);
        }
    }
    log::warn!(
        "gave up placing {} vessels on a {}x{} grid",
        config.fleet_size(),
        config.size,
        config.size
    );
    Err(BoardError::UnableToPlaceFleet)
}
