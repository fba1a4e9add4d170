use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

mod flag;
mod reveal;

/// One hex cell. The mine and its count are fixed at generation time, the
/// player only ever changes the flag and revealed markers.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    is_mine: bool,
    is_flagged: bool,
    is_revealed: bool,
    adjacent_mine_count: u8,
}

impl Cell {
    pub const fn is_mine(&self) -> bool {
        self.is_mine
    }

    pub const fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    pub const fn is_revealed(&self) -> bool {
        self.is_revealed
    }

    /// Number of mines among the neighbors, never counting the cell itself.
    pub const fn adjacent_mine_count(&self) -> u8 {
        self.adjacent_mine_count
    }
}

/// Fixed-size grid of cells, indexed by `(row, col)`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Board {
    cells: Array2<Cell>,
    size: Coord2,
    mine_count: CellCount,
    revealed_count: CellCount,
    flagged_count: CellCount,
}

impl Board {
    /// Builds a board from a mine mask, computing every adjacent count.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (rows, cols) = mine_mask.dim();
        let size = match (Coord::try_from(rows), Coord::try_from(cols)) {
            (Ok(rows), Ok(cols)) => (rows, cols),
            _ => return Err(GameError::InvalidConfiguration),
        };

        let cells = Array2::from_shape_fn(mine_mask.dim(), |(row, col)| {
            let adjacent_mine_count = mine_mask
                .iter_neighbors((row as Coord, col as Coord))
                .filter(|&pos| mine_mask[pos.to_nd_index()])
                .count() as u8;
            Cell {
                is_mine: mine_mask[[row, col]],
                adjacent_mine_count,
                ..Default::default()
            }
        });
        let mine_count = cells.iter().filter(|cell| cell.is_mine).count() as CellCount;

        Ok(Self {
            cells,
            size,
            mine_count,
            revealed_count: 0,
            flagged_count: 0,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoordinate);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if coords.0 < self.size.0 && coords.1 < self.size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoordinate)
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Revealed cells that are not mines.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.flagged_count)
    }

    pub fn all_safe_revealed(&self) -> bool {
        self.revealed_count == self.safe_cell_count()
    }

    pub fn get(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn neighbors(&self, coords: Coord2) -> Neighbors {
        neighbors_of(coords, self.size)
    }

    /// All cells in row-major order together with their coordinates.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, &Cell)> {
        self.cells
            .indexed_iter()
            .map(|((row, col), cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_cells()
            .filter(|(_, cell)| cell.is_mine)
            .map(|(coords, _)| coords)
    }

    fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[coords.to_nd_index()]
    }

    /// Marks a cell revealed, keeping the safe-cell tally in sync.
    fn mark_revealed(&mut self, coords: Coord2) {
        let cell = self.cell_mut(coords);
        if cell.is_revealed {
            return;
        }
        cell.is_revealed = true;
        if !cell.is_mine {
            self.revealed_count += 1;
        }
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_follow_column_parity() {
        let board = Board::from_mine_coords((3, 3), &[(1, 1)]).unwrap();

        // (1, 1) sits in an odd column, its six neighbors see it
        for coords in [(0, 1), (1, 2), (2, 2), (2, 1), (2, 0), (1, 0)] {
            assert_eq!(board[coords].adjacent_mine_count(), 1, "{coords:?}");
        }
        // the top corners are two steps away on a hex grid
        assert_eq!(board[(0, 0)].adjacent_mine_count(), 0);
        assert_eq!(board[(0, 2)].adjacent_mine_count(), 0);
        // a mine never counts itself
        assert_eq!(board[(1, 1)].adjacent_mine_count(), 0);
    }

    #[test]
    fn counts_match_hex_distance_reference() {
        let size = (6, 7);
        let mines = [(0, 0), (0, 3), (2, 2), (3, 5), (5, 6), (4, 1), (5, 0)];
        let board = Board::from_mine_coords(size, &mines).unwrap();

        let reference = testing::reference_counts(size, &mines);
        for (coords, cell) in board.iter_cells() {
            assert_eq!(
                cell.adjacent_mine_count(),
                reference[coords.to_nd_index()],
                "{coords:?}"
            );
        }
    }

    #[test]
    fn fresh_board_is_fully_hidden() {
        let board = Board::from_mine_coords((4, 4), &[(3, 3), (0, 1)]).unwrap();

        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 14);
        assert_eq!(board.revealed_count(), 0);
        assert_eq!(board.mines_left(), 2);
        assert!(
            board
                .iter_cells()
                .all(|(_, cell)| !cell.is_revealed() && !cell.is_flagged())
        );
        assert_eq!(board.mine_coords().collect::<Vec<_>>(), vec![(0, 1), (3, 3)]);
    }

    #[test]
    fn duplicate_mine_coords_count_once() {
        let board = Board::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();
        assert_eq!(board.mine_count(), 1);
    }

    #[test]
    fn out_of_bounds_mines_are_rejected() {
        assert_eq!(
            Board::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::InvalidCoordinate)
        );
    }

    #[test]
    fn coordinate_validation() {
        let board = Board::from_mine_coords((2, 3), &[]).unwrap();

        assert_eq!(board.validate_coords((1, 2)), Ok((1, 2)));
        assert_eq!(board.validate_coords((2, 0)), Err(GameError::InvalidCoordinate));
        assert_eq!(board.validate_coords((0, 3)), Err(GameError::InvalidCoordinate));
        assert!(board.get((0, 3)).is_none());
    }
}
