use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    fire, Coord, HuntTargeting, Orientation, PlayerState, ShipId, ShotResult, Tally,
};

fn target_with_battleship_at_4_4() -> PlayerState {
    let mut target = PlayerState::new();
    target
        .place_ship(ShipId(1), Coord::new(4, 2), Orientation::Horizontal)
        .unwrap();
    target
}

#[test]
fn test_non_sinking_hit_queues_neighbours_lifo() {
    let mut target = target_with_battleship_at_4_4();
    let mut tally = Tally::default();
    let mut ai = HuntTargeting::new();
    let mut rng = SmallRng::seed_from_u64(1);

    let at = Coord::new(4, 4);
    let res = fire(&mut target, &mut tally, at.row, at.col).unwrap();
    assert!(res.is_hit());
    ai.record(at, &res, target.board());

    assert_eq!(
        ai.pending(),
        &[
            Coord::new(5, 4),
            Coord::new(3, 4),
            Coord::new(4, 5),
            Coord::new(4, 3)
        ]
    );
    // last queued is fired at first
    assert_eq!(ai.select_target(&mut rng, target.board()), Some(Coord::new(4, 3)));
    assert_eq!(ai.select_target(&mut rng, target.board()), Some(Coord::new(4, 5)));
    assert_eq!(ai.pending().len(), 2);
}

#[test]
fn test_shot_and_off_board_neighbours_are_skipped() {
    let mut target = PlayerState::new();
    target
        .place_ship(ShipId(4), Coord::new(0, 0), Orientation::Vertical)
        .unwrap();
    let mut tally = Tally::default();
    let mut ai = HuntTargeting::new();

    fire(&mut target, &mut tally, 0, 1).unwrap(); // miss
    let res = fire(&mut target, &mut tally, 0, 0).unwrap();
    ai.record(Coord::new(0, 0), &res, target.board());

    // up and left are off the board, right was already shot
    assert_eq!(ai.pending(), &[Coord::new(1, 0)]);
}

#[test]
fn test_sinking_hit_clears_queue() {
    let mut target = PlayerState::new();
    target
        .place_ship(ShipId(4), Coord::new(7, 7), Orientation::Horizontal)
        .unwrap();
    let mut tally = Tally::default();
    let mut ai = HuntTargeting::new();

    let res = fire(&mut target, &mut tally, 7, 7).unwrap();
    ai.record(Coord::new(7, 7), &res, target.board());
    assert!(!ai.pending().is_empty());

    let res = fire(&mut target, &mut tally, 7, 8).unwrap();
    assert_eq!(res.sunk, Some(ShipId(4)));
    ai.record(Coord::new(7, 8), &res, target.board());
    assert!(ai.pending().is_empty());
}

#[test]
fn test_miss_leaves_queue_alone() {
    let mut target = target_with_battleship_at_4_4();
    let mut tally = Tally::default();
    let mut ai = HuntTargeting::new();

    let res = fire(&mut target, &mut tally, 4, 4).unwrap();
    ai.record(Coord::new(4, 4), &res, target.board());
    let queued = ai.pending().to_vec();

    let res = fire(&mut target, &mut tally, 0, 0).unwrap();
    assert_eq!(res, ShotResult::MISS);
    ai.record(Coord::new(0, 0), &res, target.board());
    assert_eq!(ai.pending(), queued.as_slice());
}

#[test]
fn test_stale_candidates_are_skipped() {
    let mut target = target_with_battleship_at_4_4();
    let mut tally = Tally::default();
    let mut ai = HuntTargeting::new();
    let mut rng = SmallRng::seed_from_u64(3);

    let res = fire(&mut target, &mut tally, 4, 4).unwrap();
    ai.record(Coord::new(4, 4), &res, target.board());
    // (4,3) and (4,5) get shot by someone else before the AI moves
    fire(&mut target, &mut tally, 4, 3).unwrap();
    fire(&mut target, &mut tally, 4, 5).unwrap();

    assert_eq!(ai.select_target(&mut rng, target.board()), Some(Coord::new(3, 4)));
}

#[test]
fn test_random_pick_never_repeats_a_shot() {
    let mut target = PlayerState::new();
    let mut tally = Tally::default();
    let mut ai = HuntTargeting::new();
    let mut rng = SmallRng::seed_from_u64(99);

    for _ in 0..100 {
        let at = ai.select_target(&mut rng, target.board()).unwrap();
        assert!(!target.board().is_shot(at));
        let res = fire(&mut target, &mut tally, at.row, at.col).unwrap();
        ai.record(at, &res, target.board());
    }
    assert_eq!(tally.misses, 100);
    assert_eq!(ai.select_target(&mut rng, target.board()), None);
}
