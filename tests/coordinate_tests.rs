use ship_deploy::{Coordinate, DeployError, Direction, GRID_SIZE};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_every_valid_coordinate_maps_to_unique_indices() {
    let mut seen = std::collections::HashSet::new();
    for (i, letter) in ('A'..='J').enumerate() {
        for number in 1..=10u8 {
            let point = Coordinate::from_letter_and_number(letter, number).unwrap();
            assert_eq!(point.x(), i);
            assert_eq!(point.y(), number as usize - 1);
            assert!(seen.insert((point.x(), point.y())));
        }
    }
    assert_eq!(seen.len(), GRID_SIZE * GRID_SIZE);
}

#[test]
fn test_lowercase_letter_is_normalized() {
    let point = Coordinate::from_letter_and_number('c', 7).unwrap();
    assert_eq!(point.letter(), 'C');
    assert_eq!(point, Coordinate::from_letter_and_number('C', 7).unwrap());
}

#[test]
fn test_out_of_range_column_rejected() {
    assert_eq!(
        Coordinate::from_letter_and_number('K', 1).unwrap_err(),
        DeployError::InvalidColumn('K')
    );
    assert_eq!(
        Coordinate::from_letter_and_number('1', 1).unwrap_err(),
        DeployError::InvalidColumn('1')
    );
}

#[test]
fn test_out_of_range_row_rejected() {
    assert_eq!(
        Coordinate::from_letter_and_number('A', 0).unwrap_err(),
        DeployError::InvalidRow(0)
    );
    assert_eq!(
        Coordinate::from_letter_and_number('A', 11).unwrap_err(),
        DeployError::InvalidRow(11)
    );
}

#[test]
fn test_letter_number_bijection() {
    for n in 1..=GRID_SIZE as u8 {
        let letter = Coordinate::number_to_letter(n).unwrap();
        assert_eq!(Coordinate::letter_to_number(letter), Some(n));
    }
    assert_eq!(Coordinate::number_to_letter(0), None);
    assert_eq!(Coordinate::number_to_letter(11), None);
    assert_eq!(Coordinate::letter_to_number('K'), None);
    assert_eq!(Coordinate::letter_to_number('a'), None);
}

#[test]
fn test_parse_and_display() {
    let point: Coordinate = "j10".parse().unwrap();
    assert_eq!((point.x(), point.y()), (9, 9));
    assert_eq!(point.to_string(), "J10");
    assert_eq!("B3".parse::<Coordinate>().unwrap().to_string(), "B3");
    assert_eq!("".parse::<Coordinate>().unwrap_err(), DeployError::MalformedCoordinate);
    assert_eq!("7C".parse::<Coordinate>().unwrap_err(), DeployError::MalformedCoordinate);
    assert_eq!("C".parse::<Coordinate>().unwrap_err(), DeployError::MalformedCoordinate);
    assert_eq!("Z4".parse::<Coordinate>().unwrap_err(), DeployError::InvalidColumn('Z'));
    assert_eq!("A12".parse::<Coordinate>().unwrap_err(), DeployError::InvalidRow(12));
}

#[test]
fn test_random_coordinates_stay_on_grid() {
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..1000 {
        let point = Coordinate::random(&mut rng);
        assert!(point.x() < GRID_SIZE);
        assert!(point.y() < GRID_SIZE);
    }
}

#[test]
fn test_direction_from_number() {
    assert_eq!(Direction::try_from(1), Ok(Direction::Left));
    assert_eq!(Direction::try_from(2), Ok(Direction::Up));
    assert_eq!(Direction::try_from(3), Ok(Direction::Right));
    assert_eq!(Direction::try_from(4), Ok(Direction::Down));
    assert_eq!(Direction::try_from(0), Err(DeployError::InvalidDirection(0)));
    assert_eq!(Direction::try_from(5), Err(DeployError::InvalidDirection(5)));
    for d in Direction::ALL {
        assert_eq!(Direction::try_from(u8::from(d)), Ok(d));
    }
}

#[test]
fn test_random_direction_covers_all_values() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut seen = [false; 4];
    for _ in 0..200 {
        let d = Direction::random(&mut rng);
        seen[u8::from(d) as usize - 1] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn test_error_messages_name_valid_range() {
    let msg = DeployError::InvalidColumn('K').to_string();
    assert!(msg.contains("between A and J"), "{}", msg);
    let msg = DeployError::InvalidRow(11).to_string();
    assert!(msg.contains("between 1 and 10"), "{}", msg);
}
