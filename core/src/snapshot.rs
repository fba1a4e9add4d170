//! Read-only copies of a session for whoever draws the board.

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a renderer needs to know about one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub row: Coord,
    pub col: Coord,
    pub is_mine: bool,
    pub is_flagged: bool,
    pub is_revealed: bool,
    pub adjacent_mine_count: u8,
}

impl CellView {
    fn new((row, col): Coord2, cell: &Cell) -> Self {
        Self {
            row,
            col,
            is_mine: cell.is_mine(),
            is_flagged: cell.is_flagged(),
            is_revealed: cell.is_revealed(),
            adjacent_mine_count: cell.adjacent_mine_count(),
        }
    }

    pub const fn coords(&self) -> Coord2 {
        (self.row, self.col)
    }

    /// The number to print on the cell: only revealed safe cells with at least
    /// one adjacent mine show one.
    pub const fn visible_count(&self) -> Option<u8> {
        if self.is_revealed && !self.is_mine && self.adjacent_mine_count > 0 {
            Some(self.adjacent_mine_count)
        } else {
            None
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub cells: Array2<CellView>,
    pub state: GameState,
    pub mines_left: i64,
    pub triggered_mine: Option<Coord2>,
    pub version: u64,
}

impl Snapshot {
    pub fn from_session<G: BoardGenerator>(session: &Session<G>) -> Self {
        let board = session.board();
        let cells = Array2::from_shape_fn(board.size().to_nd_index(), |(row, col)| {
            let coords = (row as Coord, col as Coord);
            CellView::new(coords, &board[coords])
        });

        Self {
            cells,
            state: session.state(),
            mines_left: session.mines_left(),
            triggered_mine: session.triggered_mine(),
            version: session.version(),
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&CellView> {
        self.cells.get(coords.to_nd_index())
    }

    /// Cells grouped by row, in column order.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        let cols = self.cells.ncols().max(1);
        self.cells.as_slice().unwrap_or_default().chunks(cols)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
