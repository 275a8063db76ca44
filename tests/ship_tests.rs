use sea_battle::{BoardError, Coordinate, Orientation, Vessel};

#[test]
fn test_horizontal_cells_follow_columns() -> Result<(), BoardError> {
    let vessel = Vessel::new(Coordinate::new(2, 1), 3, Orientation::Horizontal)?;
    let cells: Vec<_> = vessel.occupied_coordinates().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );
    Ok(())
}

#[test]
fn test_vertical_cells_follow_rows() -> Result<(), BoardError> {
    let vessel = Vessel::new(Coordinate::new(0, 4), 2, Orientation::Vertical)?;
    let cells: Vec<_> = vessel.occupied_coordinates().collect();
    assert_eq!(cells, vec![Coordinate::new(0, 4), Coordinate::new(1, 4)]);
    Ok(())
}

#[test]
fn test_is_hit_by() -> Result<(), BoardError> {
    let vessel = Vessel::new(Coordinate::new(1, 1), 2, Orientation::Vertical)?;
    assert!(vessel.is_hit_by(Coordinate::new(1, 1)));
    assert!(vessel.is_hit_by(Coordinate::new(2, 1)));
    assert!(!vessel.is_hit_by(Coordinate::new(3, 1)));
    assert!(!vessel.is_hit_by(Coordinate::new(1, 2)));
    Ok(())
}

#[test]
fn test_new_vessel_is_undamaged() -> Result<(), BoardError> {
    let vessel = Vessel::new(Coordinate::new(0, 0), 3, Orientation::Horizontal)?;
    assert_eq!(vessel.remaining_hits(), 3);
    assert!(!vessel.is_sunk());
    assert_eq!(vessel.length(), 3);
    assert_eq!(vessel.bow(), Coordinate::new(0, 0));
    assert_eq!(vessel.orientation(), Orientation::Horizontal);
    Ok(())
}

#[test]
fn test_zero_length_rejected() {
    assert_eq!(
        Vessel::new(Coordinate::new(0, 0), 0, Orientation::Vertical).unwrap_err(),
        BoardError::InvalidLength
    );
}

#[test]
fn test_neighborhood_is_three_by_three() {
    let cells: Vec<_> = Coordinate::new(0, 0).neighborhood().collect();
    assert_eq!(cells.len(), 9);
    assert!(cells.contains(&Coordinate::new(-1, -1)));
    assert!(cells.contains(&Coordinate::new(0, 0)));
    assert!(cells.contains(&Coordinate::new(1, 1)));
}

#[test]
fn test_length_beyond_i32_rejected() {
    assert_eq!(
        Vessel::new(Coordinate::new(0, 0), 1usize << 31, Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidLength
    );
}

#[test]
fn test_stern_overflow_rejected() {
    assert_eq!(
        Vessel::new(Coordinate::new(0, i32::MAX), 2, Orientation::Horizontal).unwrap_err(),
        BoardError::WrongPlacement
    );
    assert_eq!(
        Vessel::new(Coordinate::new(i32::MAX, 0), 2, Orientation::Vertical).unwrap_err(),
        BoardError::WrongPlacement
    );
    // a one-deck vessel at the extreme is representable
    assert!(Vessel::new(Coordinate::new(i32::MAX, i32::MAX), 1, Orientation::Vertical).is_ok());
}
