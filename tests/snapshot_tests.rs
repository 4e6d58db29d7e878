use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{
    GameError, NextAction, Phase, PlayerState, Session, Side, Snapshot, SNAPSHOT_VERSION,
};

/// Session in the fighting phase with a few shots on both boards.
fn played_session(seed: u64) -> (Session, SmallRng) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut session = Session::new_game(&mut rng).unwrap();
    session.auto_place_human(&mut rng).unwrap();
    for _ in 0..12 {
        match session.next_action() {
            NextAction::HumanTurn => {
                let at = session.computer().board().unshot().next().unwrap();
                session.human_fire(at).unwrap();
            }
            NextAction::ComputerTurn => {
                session.computer_turn(&mut rng).unwrap();
            }
            _ => break,
        }
    }
    (session, rng)
}

#[test]
fn test_json_roundtrip_restores_verbatim() {
    let (session, _) = played_session(11);
    let snapshot = session.snapshot();
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);

    let json = snapshot.to_json().unwrap();
    let decoded = Snapshot::from_json(&json).unwrap();
    assert_eq!(decoded, snapshot);

    let restored = Session::restore(decoded).unwrap();
    assert_eq!(restored.human(), session.human());
    assert_eq!(restored.computer(), session.computer());
    assert_eq!(restored.turn(), session.turn());
    assert_eq!(restored.phase(), session.phase());
    assert!(restored.targeting().pending().is_empty());
}

#[test]
fn test_bincode_roundtrip() {
    let (session, _) = played_session(12);
    let bytes = session.snapshot().to_bytes().unwrap();
    let decoded = Snapshot::from_bytes(&bytes).unwrap();
    assert_eq!(decoded, session.snapshot());
}

#[test]
fn test_restored_game_continues() {
    let (session, mut rng) = played_session(13);
    let json = session.snapshot().to_json().unwrap();
    let mut restored = Session::load_or_new(Some(&json), &mut rng).unwrap();
    assert_eq!(restored.phase(), Phase::Fighting);
    let report = match restored.next_action() {
        NextAction::HumanTurn => {
            let at = restored.computer().board().unshot().next().unwrap();
            restored.human_fire(at).unwrap()
        }
        NextAction::ComputerTurn => restored.computer_turn(&mut rng).unwrap(),
        other => panic!("unexpected {:?}", other),
    };
    assert!(!restored.player(report.shooter.opponent()).board().unshot().any(|c| c == report.at));
}

#[test]
fn test_garbage_is_malformed() {
    for input in ["", "not json", "{}", "[1,2,3]", r#"{"version":1}"#] {
        let err = Snapshot::from_json(input).unwrap_err();
        assert!(matches!(err, GameError::MalformedState(_)), "{input}: {err:?}");
    }
    assert!(Snapshot::from_bytes(&[1, 2, 3]).is_err());
}

#[test]
fn test_wrong_version_is_rejected() {
    let (session, _) = played_session(14);
    let mut snapshot = session.snapshot();
    snapshot.version = SNAPSHOT_VERSION + 1;
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(matches!(
        Snapshot::from_json(&json),
        Err(GameError::MalformedState(_))
    ));
}

#[test]
fn test_tampered_counters_are_rejected() {
    let (session, _) = played_session(15);
    let mut value: serde_json::Value =
        serde_json::from_str(&session.snapshot().to_json().unwrap()).unwrap();
    value["human"]["tally"]["hits"] = serde_json::json!(99);
    let err = Snapshot::from_json(&value.to_string()).unwrap_err();
    assert!(matches!(err, GameError::MalformedState(_)));
}

#[test]
fn test_tampered_sunk_flag_is_rejected() {
    let (session, _) = played_session(16);
    let mut value: serde_json::Value =
        serde_json::from_str(&session.snapshot().to_json().unwrap()).unwrap();
    let sunk = value["computer"]["fleet"][0]["sunk"].as_bool().unwrap();
    value["computer"]["fleet"][0]["sunk"] = serde_json::json!(!sunk);
    assert!(Snapshot::from_json(&value.to_string()).is_err());
}

#[test]
fn test_wrong_board_shape_is_rejected() {
    let (session, _) = played_session(17);
    let mut value: serde_json::Value =
        serde_json::from_str(&session.snapshot().to_json().unwrap()).unwrap();
    value["human"]["board"]["cells"]
        .as_array_mut()
        .unwrap()
        .pop();
    assert!(Snapshot::from_json(&value.to_string()).is_err());
}

#[test]
fn test_fighting_with_incomplete_fleet_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(18);
    let session = Session::new_game(&mut rng).unwrap();
    let mut snapshot = session.snapshot();
    snapshot.phase = Phase::Fighting;
    assert!(matches!(
        snapshot.validate(),
        Err(GameError::MalformedState(_))
    ));
}

#[test]
fn test_malformed_save_falls_back_to_new_game() {
    let mut rng = SmallRng::seed_from_u64(19);
    let session = Session::load_or_new(Some("{ broken"), &mut rng).unwrap();
    assert_eq!(session.phase(), Phase::Placing);
    assert_eq!(session.turn(), Side::Human);
    assert!(session.computer().is_ready());

    let session = Session::load_or_new(None, &mut rng).unwrap();
    assert_eq!(session.phase(), Phase::Placing);
}

#[test]
fn test_ended_game_restores_outcome() {
    let mut rng = SmallRng::seed_from_u64(20);
    let mut session = Session::new_game(&mut rng).unwrap();
    session.auto_place_human(&mut rng).unwrap();
    let cells: Vec<_> = session
        .computer()
        .fleet()
        .iter()
        .flat_map(|s| s.coords().to_vec())
        .collect();
    for at in cells {
        session.human_fire(at).unwrap();
    }
    assert_eq!(session.phase(), Phase::Ended);

    let json = session.snapshot().to_json().unwrap();
    let restored = Session::restore(Snapshot::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.phase(), Phase::Ended);
    assert_eq!(restored.outcome(), session.outcome());
    assert_eq!(restored.next_action(), NextAction::GameOver);
}

#[test]
fn test_placing_with_complete_human_fleet_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut session = Session::new_game(&mut rng).unwrap();
    session.auto_place_human(&mut rng).unwrap();
    let mut snapshot = session.snapshot();
    snapshot.phase = Phase::Placing;
    assert!(snapshot.human.is_ready());
    assert!(matches!(
        Session::restore(snapshot),
        Err(GameError::MalformedState(_))
    ));
}

#[test]
fn test_placing_without_computer_fleet_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(22);
    let session = Session::new_game(&mut rng).unwrap();
    let mut snapshot = session.snapshot();
    snapshot.validate().unwrap();
    snapshot.computer = PlayerState::new();
    assert!(matches!(
        snapshot.validate(),
        Err(GameError::MalformedState(_))
    ));

    let json = serde_json::to_string(&snapshot).unwrap();
    let session = Session::load_or_new(Some(&json), &mut rng).unwrap();
    assert!(session.computer().is_ready());
}
