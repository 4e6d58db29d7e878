#![cfg(feature = "std")]

//! Terminal rendering and input parsing for the interactive binary.

use std::fmt::Write;

use crate::{
    board::{Board, Coord},
    common::{ShotOutcome, Side},
    config::BOARD_SIZE,
    game::{Session, ShotReport},
    ship::Orientation,
};

/// Parse a coordinate like `A5` (column letter, one-based row).
pub fn parse_coord(input: &str) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row: usize = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    Coord::on_board(row - 1, col)
}

/// `H`/`horizontal` or `V`/`vertical`, any case.
pub fn parse_orientation(input: &str) -> Option<Orientation> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Some(Orientation::Horizontal),
        "v" | "vertical" => Some(Orientation::Vertical),
        _ => None,
    }
}

/// Parse `A5 V`. The orientation defaults to horizontal when omitted.
pub fn parse_placement(input: &str) -> Option<(Coord, Orientation)> {
    let mut parts = input.split_whitespace();
    let coord = parse_coord(parts.next()?)?;
    let orientation = match parts.next() {
        Some(o) => parse_orientation(o)?,
        None => Orientation::Horizontal,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((coord, orientation))
}

/// Grid with column letters and row numbers. `X` hit, `o` miss, `S` ship
/// (only when `reveal` is set), `.` unknown water.
pub fn render_board(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for c in 0..BOARD_SIZE {
        let _ = write!(out, " {}", (b'A' + c as u8) as char);
    }
    out.push('\n');
    for r in 0..BOARD_SIZE {
        let _ = write!(out, "{:2} ", r + 1);
        for c in 0..BOARD_SIZE {
            let ch = match board.cell(Coord::new(r, c)) {
                Some(cell) if cell.hit => 'X',
                Some(cell) if cell.missed => 'o',
                Some(cell) if reveal && cell.occupant.is_some() => 'S',
                _ => '.',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Enemy waters (ships hidden) above the human's own board, plus counters.
pub fn render_view(session: &Session) -> String {
    let human = session.human().tally();
    let computer = session.computer().tally();
    format!(
        "Enemy waters:\n{}\nYour fleet:\n{}\nYou: {}\nAI:  {}\n",
        render_board(session.computer().board(), false),
        render_board(session.human().board(), true),
        human,
        computer,
    )
}

/// One line describing a resolved shot.
pub fn describe_shot(session: &Session, report: &ShotReport) -> String {
    let who = match report.shooter {
        Side::Human => "You fire",
        Side::Computer => "AI fires",
    };
    let target = session.player(report.shooter.opponent());
    let what = match (report.result.outcome, report.result.sunk) {
        (ShotOutcome::Miss, _) => "miss.".to_string(),
        (ShotOutcome::Hit, None) => "hit!".to_string(),
        (ShotOutcome::Hit, Some(id)) => {
            let name = target.ship(id).map(|s| s.name()).unwrap_or("ship");
            format!("hit and sunk {} ({})!", name, id.label(report.shooter.opponent()))
        }
    };
    format!("{} at {}: {}", who, report.at, what)
}
