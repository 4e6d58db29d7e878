#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, SeedableRng};
#[cfg(feature = "std")]
use sea_battle::{
    cli::{describe_shot, parse_coord, parse_placement, render_board, render_view},
    init_logging, GameEvent, NextAction, Session, COMPUTER_DELAY_MS,
};
#[cfg(feature = "std")]
use tokio::time::{sleep, Duration};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the computer in the terminal, resuming a saved game if any.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value = "sea-battle.json")]
        save: PathBuf,
        #[arg(long, default_value_t = COMPUTER_DELAY_MS, help = "Pause before each computer shot")]
        delay_ms: u64,
        #[arg(long, help = "Ignore any saved game and start over")]
        fresh: bool,
        #[arg(long, help = "Place your fleet at random instead of by hand")]
        auto_place: bool,
    },
    /// Delete the saved game.
    ClearSave {
        #[arg(long, default_value = "sea-battle.json")]
        save: PathBuf,
    },
}

#[cfg(feature = "std")]
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            save,
            delay_ms,
            fresh,
            auto_place,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };
            let saved = if fresh {
                None
            } else {
                fs::read_to_string(&save).ok()
            };
            let session = Session::load_or_new(saved.as_deref(), &mut rng)?;
            if let Some(over) = session.outcome() {
                println!("Saved game already finished. {}", over);
            }
            play(session, &mut rng, &save, Duration::from_millis(delay_ms), auto_place).await?;
        }
        Commands::ClearSave { save } => match fs::remove_file(&save) {
            Ok(()) => println!("Saved game cleared."),
            Err(e) if e.kind() == io::ErrorKind::NotFound => println!("No saved game."),
            Err(e) => return Err(e.into()),
        },
    }
    Ok(())
}

#[cfg(feature = "std")]
fn prompt(text: &str) -> anyhow::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(feature = "std")]
fn save_session(session: &Session, path: &Path) -> anyhow::Result<()> {
    let json = session.snapshot().to_json()?;
    fs::write(path, json)?;
    log::debug!("saved game to {}", path.display());
    Ok(())
}

#[cfg(feature = "std")]
fn report_events(session: &mut Session) {
    for event in session.drain_events() {
        if let GameEvent::GameOver(over) = event {
            println!("\n*** {} ***", over.title());
            println!("{}", over.summary());
        }
    }
}

/// Returns `false` when the player quit or input ended.
#[cfg(feature = "std")]
fn place_fleet(
    session: &mut Session,
    rng: &mut SmallRng,
    auto_place: bool,
) -> anyhow::Result<bool> {
    if auto_place {
        match session.auto_place_human(rng) {
            Ok(()) => return Ok(true),
            Err(e) => println!("{} - place your ships by hand.", e),
        }
    }
    println!("Place your ships (e.g. A5 H or B2 V). Press enter to place the whole fleet at random.");
    while let Some(ship) = session.human().fleet().iter().find(|s| !s.is_placed()) {
        let (id, name, size) = (ship.id(), ship.name(), ship.size());
        println!("{}", render_board(session.human().board(), true));
        let Some(line) = prompt(&format!("Place {} (length {}): ", name, size))? else {
            return Ok(false);
        };
        if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
            return Ok(false);
        }
        if line.is_empty() {
            if let Err(e) = session.auto_place_human(rng) {
                println!("{} - try again.", e);
                continue;
            }
            break;
        }
        match parse_placement(&line) {
            Some((origin, orientation)) => {
                if let Err(e) = session.place_human_ship(id, origin, orientation) {
                    println!("Error: {}", e);
                }
            }
            None => println!("Invalid input"),
        }
    }
    Ok(true)
}

#[cfg(feature = "std")]
async fn play(
    mut session: Session,
    rng: &mut SmallRng,
    save: &Path,
    delay: Duration,
    auto_place: bool,
) -> anyhow::Result<()> {
    loop {
        match session.next_action() {
            NextAction::PlaceShips => {
                if !place_fleet(&mut session, rng, auto_place)? {
                    break;
                }
                save_session(&session, save)?;
                println!("All ships placed. Fire on the enemy board.");
            }
            NextAction::HumanTurn => {
                println!("\n{}", render_view(&session));
                let Some(line) = prompt("Fire at (e.g. C7, or 'new' / 'quit'): ")? else {
                    break;
                };
                match line.to_ascii_lowercase().as_str() {
                    "q" | "quit" => break,
                    "new" => {
                        session = Session::new_game(rng)?;
                        save_session(&session, save)?;
                        continue;
                    }
                    _ => {}
                }
                let Some(at) = parse_coord(&line) else {
                    println!("Invalid coordinate");
                    continue;
                };
                match session.human_fire(at) {
                    Ok(report) => println!("{}", describe_shot(&session, &report)),
                    Err(e) => println!("{}", e),
                }
                save_session(&session, save)?;
                report_events(&mut session);
            }
            NextAction::ComputerTurn => {
                sleep(delay).await;
                let report = session.computer_turn(rng)?;
                println!("{}", describe_shot(&session, &report));
                save_session(&session, save)?;
                report_events(&mut session);
            }
            NextAction::GameOver => {
                println!("\n{}", render_view(&session));
                let again = prompt("Play again? [y/N] ")?;
                if !matches!(again.as_deref(), Some("y" | "Y" | "yes")) {
                    break;
                }
                session = Session::new_game(rng)?;
                save_session(&session, save)?;
            }
        }
    }
    Ok(())
}
