use rand::rngs::SmallRng;
use rand::SeedableRng;
use sea_battle::{
    place_fleet, random_grid, random_placement, BoardError, Coordinate, GameConfig, Grid, Phase,
    ShotOutcome, FLEET, FLEET_SIZE, MAX_BOARD_SIZE,
};

fn assert_no_touching(grid: &Grid) {
    let vessels = grid.vessels();
    for (i, a) in vessels.iter().enumerate() {
        for b in vessels.iter().skip(i + 1) {
            for ca in a.occupied_coordinates() {
                for cb in b.occupied_coordinates() {
                    assert!(
                        (ca.row - cb.row).abs() > 1 || (ca.col - cb.col).abs() > 1,
                        "vessels touch at {} and {}",
                        ca,
                        cb
                    );
                }
            }
        }
    }
}

#[test]
fn test_default_fleet_generation() {
    let config = GameConfig::default();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = random_grid(&mut rng, &config).unwrap();
        assert_eq!(grid.vessel_count(), FLEET_SIZE);
        assert_eq!(grid.phase(), Phase::Active);
        let mut lengths: Vec<_> = grid.vessels().iter().map(|v| v.length()).collect();
        lengths.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(lengths, FLEET.to_vec());
        for v in grid.vessels() {
            assert!(v.occupied_coordinates().all(|c| grid.contains(c)));
        }
        assert_no_touching(&grid);
    }
}

#[test]
fn test_reproducible_with_seed() {
    let config = GameConfig::default();
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    let g1 = random_grid(&mut rng1, &config).unwrap();
    let g2 = random_grid(&mut rng2, &config).unwrap();
    assert_eq!(g1, g2);
}

#[test]
fn test_generated_grid_accepts_buffer_shots() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut grid = random_grid(&mut rng, &GameConfig::default()).unwrap();
    // setup exclusions are gone: a cell touching a live vessel is a plain miss
    let target = grid.vessels()[0]
        .occupied_coordinates()
        .flat_map(Coordinate::neighborhood)
        .find(|c| grid.contains(*c) && grid.vessels().iter().all(|v| !v.is_hit_by(*c)))
        .unwrap();
    assert_eq!(grid.fire_at(target).unwrap(), ShotOutcome::Miss);
}

#[test]
fn test_impossible_fleet_is_all_or_nothing() {
    let config = GameConfig {
        size: 2,
        fleet: vec![1, 1],
        placement_attempts: 50,
        max_regenerations: 3,
    };
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(place_fleet(&mut rng, &config).unwrap(), None);
    assert_eq!(
        random_grid(&mut rng, &config).unwrap_err(),
        BoardError::UnableToPlaceFleet
    );
}

#[test]
fn test_oversized_vessel_never_fits() {
    let mut grid = Grid::new(3);
    let mut rng = SmallRng::seed_from_u64(3);
    let mut attempts = 100;
    assert!(!random_placement(&mut grid, &mut rng, 4, &mut attempts).unwrap());
    assert_eq!(attempts, 0);
    assert_eq!(grid.vessel_count(), 0);
}

#[test]
fn test_zero_length_manifest_entry_is_an_error() {
    let config = GameConfig {
        fleet: vec![3, 0],
        ..GameConfig::default()
    };
    let mut rng = SmallRng::seed_from_u64(9);
    assert_eq!(
        random_grid(&mut rng, &config).unwrap_err(),
        BoardError::InvalidLength
    );
}

#[test]
fn test_oversized_board_is_an_error() {
    let config = GameConfig::with_size(MAX_BOARD_SIZE + 1);
    let mut rng = SmallRng::seed_from_u64(4);
    assert_eq!(
        random_grid(&mut rng, &config).unwrap_err(),
        BoardError::InvalidSize
    );
}

#[test]
fn test_unrepresentable_length_is_an_error() {
    let mut grid = Grid::new(6);
    let mut rng = SmallRng::seed_from_u64(4);
    let mut attempts = 10;
    assert_eq!(
        random_placement(&mut grid, &mut rng, 1usize << 31, &mut attempts).unwrap_err(),
        BoardError::InvalidLength
    );
    assert_eq!(grid.vessel_count(), 0);
}
