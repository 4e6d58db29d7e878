//! Fixed 10×10 grid tracking ship occupancy and shot marks per cell.

use core::fmt;

use crate::config::BOARD_SIZE;
use crate::ship::ShipId;

/// `true` iff `(row, col)` lies on the board.
#[inline]
pub fn in_bounds(row: usize, col: usize) -> bool {
    row < BOARD_SIZE && col < BOARD_SIZE
}

/// A board position, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Checked constructor: `None` when off the board.
    pub fn on_board(row: usize, col: usize) -> Option<Self> {
        in_bounds(row, col).then_some(Self { row, col })
    }

    pub fn in_bounds(self) -> bool {
        in_bounds(self.row, self.col)
    }

    /// Orthogonal neighbours that lie on the board, in the order
    /// down, up, right, left.
    pub fn neighbours(self) -> impl Iterator<Item = Coord> {
        const STEPS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        STEPS.into_iter().filter_map(move |(dr, dc)| {
            let row = self.row.checked_add_signed(dr)?;
            let col = self.col.checked_add_signed(dc)?;
            Coord::on_board(row, col)
        })
    }
}

impl fmt::Display for Coord {
    /// Column letter followed by the one-based row, e.g. `C7`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = (b'A' + (self.col % 26) as u8) as char;
        write!(f, "{}{}", letter, self.row + 1)
    }
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub occupant: Option<ShipId>,
    pub hit: bool,
    pub missed: bool,
}

impl Cell {
    /// Whether a shot already landed here.
    pub fn is_shot(&self) -> bool {
        self.hit || self.missed
    }
}

/// Grid of cells. Only placement and shot resolution write to it.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// An empty board: no ships, no shots.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::default(); BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn cell(&self, coord: Coord) -> Option<&Cell> {
        self.cells.get(coord.row)?.get(coord.col)
    }

    pub fn occupant(&self, coord: Coord) -> Option<ShipId> {
        self.cell(coord).and_then(|c| c.occupant)
    }

    /// `true` if the cell was shot at. Off-board coordinates count as not shot.
    pub fn is_shot(&self, coord: Coord) -> bool {
        self.cell(coord).is_some_and(Cell::is_shot)
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, &Cell)> {
        self.cells.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Coord::new(r, c), cell))
        })
    }

    /// Cells not yet shot at.
    pub fn unshot(&self) -> impl Iterator<Item = Coord> + '_ {
        self.iter()
            .filter(|(_, cell)| !cell.is_shot())
            .map(|(coord, _)| coord)
    }

    pub fn hit_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.hit).count()
    }

    pub fn miss_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.missed).count()
    }

    pub(crate) fn cell_mut(&mut self, coord: Coord) -> Option<&mut Cell> {
        self.cells.get_mut(coord.row)?.get_mut(coord.col)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board:")?;
        for row in self.cells.iter() {
            for cell in row.iter() {
                let ch = match (cell.occupant, cell.hit, cell.missed) {
                    (_, true, _) => 'X',
                    (_, _, true) => 'o',
                    (Some(_), _, _) => '■',
                    (None, _, _) => '□',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
