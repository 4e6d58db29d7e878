use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{auto_place_fleet, Board, Coord, PlayerState, Ship, FLEET, TOTAL_SHIP_CELLS};
use std::collections::HashSet;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Random placement of the standard fleet on an empty board never runs
    /// out of attempts.
    #[test]
    fn auto_place_standard_fleet_always_succeeds(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        let mut fleet = Ship::standard_fleet();
        prop_assert!(auto_place_fleet(&mut rng, &mut board, &mut fleet).is_ok());

        let mut seen = HashSet::new();
        for (ship, class) in fleet.iter().zip(FLEET.iter()) {
            prop_assert_eq!(ship.coords().len(), class.size());
            for &c in ship.coords() {
                prop_assert!(c.in_bounds());
                prop_assert!(seen.insert(c), "cell {} shared by two ships", c);
                prop_assert_eq!(board.occupant(c), Some(ship.id()));
            }
        }
        prop_assert_eq!(seen.len(), TOTAL_SHIP_CELLS);
        let occupied = board.iter().filter(|(_, c)| c.occupant.is_some()).count();
        prop_assert_eq!(occupied, TOTAL_SHIP_CELLS);
    }

    /// Ships are straight runs along one axis.
    #[test]
    fn auto_placed_ships_are_straight(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut player = PlayerState::new();
        player.auto_place(&mut rng).unwrap();
        prop_assert!(player.is_ready());
        for ship in player.fleet() {
            let coords = ship.coords();
            let first = coords[0];
            let horizontal = coords.iter().enumerate().all(|(i, &c)| c == Coord::new(first.row, first.col + i));
            let vertical = coords.iter().enumerate().all(|(i, &c)| c == Coord::new(first.row + i, first.col));
            prop_assert!(horizontal || vertical);
        }
    }
}

#[test]
fn test_auto_place_reports_ships_that_do_not_fit() {
    use sea_battle::{GameError, ShipId};

    let mut rng = SmallRng::seed_from_u64(7);
    let mut board = Board::new();
    // An 11-cell ship can never fit; the others still get placed.
    let mut fleet = vec![Ship::new(ShipId(0), 11), Ship::new(ShipId(1), 3)];
    let err = auto_place_fleet(&mut rng, &mut board, &mut fleet).unwrap_err();
    assert_eq!(
        err,
        GameError::PlacementExhausted {
            unplaced: vec![ShipId(0)]
        }
    );
    assert!(!fleet[0].is_placed());
    assert!(fleet[1].is_placed());
}

#[test]
fn test_auto_place_is_reproducible_with_seed() {
    let mut a = PlayerState::new();
    let mut b = PlayerState::new();
    a.auto_place(&mut SmallRng::seed_from_u64(42)).unwrap();
    b.auto_place(&mut SmallRng::seed_from_u64(42)).unwrap();
    assert_eq!(a, b);
}
