use alloc::vec::Vec;
use core::convert::Infallible;

use rand::Rng;

use crate::{
    common::{BoardError, ShotOutcome},
    player::Player,
    ship::Coordinate,
};

/// Computer player picking targets uniformly at random over the whole grid.
///
/// It keeps no memory of earlier shots; repeats are rejected by the grid and
/// retried by [`Combatant::execute_turn`](crate::Combatant::execute_turn).
pub struct AiPlayer<R> {
    rng: R,
    last_move: Option<Coordinate>,
    last_outcome: Option<ShotOutcome>,
    rejected: Vec<(Coordinate, BoardError)>,
}

impl<R: Rng> AiPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            last_move: None,
            last_outcome: None,
            rejected: Vec::new(),
        }
    }

    /// Most recent coordinate handed out, accepted or not.
    pub fn last_move(&self) -> Option<Coordinate> {
        self.last_move
    }

    /// Outcome of the most recent accepted shot.
    pub fn last_outcome(&self) -> Option<ShotOutcome> {
        self.last_outcome
    }

    /// Targets refused by the opponent grid since the last call, oldest first.
    pub fn take_rejected(&mut self) -> Vec<(Coordinate, BoardError)> {
        core::mem::take(&mut self.rejected)
    }
}

impl<R: Rng> Player for AiPlayer<R> {
    type Error = Infallible;

    fn request_move(&mut self, grid_size: usize) -> Result<Coordinate, Infallible> {
        let size = i32::try_from(grid_size).unwrap_or(i32::MAX).max(1);
        let target = Coordinate::new(
            self.rng.random_range(0..size),
            self.rng.random_range(0..size),
        );
        self.last_move = Some(target);
        Ok(target)
    }

    fn handle_shot_result(&mut self, _target: Coordinate, outcome: ShotOutcome) {
        self.last_outcome = Some(outcome);
    }

    fn handle_rejected_shot(&mut self, target: Coordinate, error: BoardError) {
        self.rejected.push((target, error));
    }
}
