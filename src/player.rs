use crate::{
    board::Grid,
    common::{BoardError, ShotOutcome, TurnError},
    ship::Coordinate,
};

/// Interface implemented by different player types.
pub trait Player {
    /// Failure of the move source itself.
    type Error;

    /// Choose the next target on an opponent grid of side `grid_size`.
    fn request_move(&mut self, grid_size: usize) -> Result<Coordinate, Self::Error>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _outcome: ShotOutcome) {}

    /// Inform the player that the opponent grid refused its target.
    fn handle_rejected_shot(&mut self, _target: Coordinate, _error: BoardError) {}
}

/// One side of a match: its own grid plus the strategy that picks targets.
pub struct Combatant<P> {
    grid: Grid,
    player: P,
}

impl<P: Player> Combatant<P> {
    pub fn new(grid: Grid, player: P) -> Self {
        Self { grid, player }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    /// Fire at `opponent` until a shot is accepted.
    ///
    /// Out-of-bounds and repeated targets are reported to the player and a
    /// new move is requested, without limit. Returns `true` when the shot hit
    /// or sank a vessel and the same side moves again.
    pub fn execute_turn(&mut self, opponent: &mut Grid) -> Result<bool, TurnError<P::Error>> {
        loop {
            let target = self
                .player
                .request_move(opponent.size())
                .map_err(TurnError::Input)?;
            match opponent.fire_at(target) {
                Ok(outcome) => {
                    self.player.handle_shot_result(target, outcome);
                    return Ok(outcome.grants_extra_shot());
                }
                Err(e) if e.is_retryable() => {
                    log::debug!("shot at {} rejected: {}", target, e);
                    self.player.handle_rejected_shot(target, e);
                }
                Err(e) => return Err(TurnError::Board(e)),
            }
        }
    }
}
