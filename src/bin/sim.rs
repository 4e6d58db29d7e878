use rand::{rngs::SmallRng, SeedableRng};
use sea_battle::{init_logging, HuntTargeting, NextAction, Session, Side};
use serde_json::json;

/// Plays a full game with the human side driven by the same hunt heuristic
/// and prints a JSON summary.
fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut session = Session::new_game(&mut rng)?;
    session.auto_place_human(&mut rng)?;
    let mut human_ai = HuntTargeting::new();
    let mut shots = 0usize;

    loop {
        match session.next_action() {
            NextAction::HumanTurn => {
                let at = human_ai
                    .select_target(&mut rng, session.computer().board())
                    .ok_or_else(|| anyhow::anyhow!("no cells left to fire at"))?;
                let report = session.human_fire(at)?;
                human_ai.record(at, &report.result, session.computer().board());
            }
            NextAction::ComputerTurn => {
                session.computer_turn(&mut rng)?;
            }
            NextAction::GameOver => break,
            NextAction::PlaceShips => anyhow::bail!("fleet placement did not complete"),
        }
        shots += 1;
    }

    let over = session
        .outcome()
        .ok_or_else(|| anyhow::anyhow!("game ended without an outcome"))?;
    let winner = match over.winner {
        Side::Human => "human",
        Side::Computer => "computer",
    };
    let result = json!({
        "winner": winner,
        "shots": shots,
        "human": {"hits": over.human.hits, "misses": over.human.misses, "ships_lost": over.human.ships_sunk},
        "computer": {"hits": over.computer.hits, "misses": over.computer.misses, "ships_lost": over.computer.ships_sunk},
        "summary": over.summary(),
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
