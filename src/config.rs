use alloc::vec::Vec;

/// Side length of the default square board.
pub const BOARD_SIZE: usize = 6;
/// Default fleet manifest: one 3-deck, two 2-deck and four 1-deck vessels.
pub const FLEET: [usize; FLEET_SIZE] = [3, 2, 2, 1, 1, 1, 1];
pub const FLEET_SIZE: usize = 7;
/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 1024;
/// Random placements tried per grid before the whole grid is regenerated.
pub const PLACEMENT_ATTEMPTS: usize = 2000;
/// Whole-grid regenerations tried before fleet generation gives up.
pub const MAX_REGENERATIONS: usize = 10_000;

/// Tunable parameters for board setup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub fleet: Vec<usize>,
    pub placement_attempts: usize,
    pub max_regenerations: usize,
}

impl GameConfig {
    /// Default configuration on a board of another size.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Number of vessels a side must lose to be defeated.
    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            max_regenerations: MAX_REGENERATIONS,
        }
    }
}
