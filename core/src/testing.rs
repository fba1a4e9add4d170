//! Reference implementations used to cross-check the engine in tests. They work
//! in cube coordinates and never look at the neighbor offset tables.

use ndarray::Array2;

use crate::*;

/// Cube coordinates of a cell where odd columns are shifted half a row down.
fn to_cube((row, col): Coord2) -> (i32, i32, i32) {
    let row = i32::from(row);
    let col = i32::from(col);
    let x = col;
    let z = row - (col - (col & 1)) / 2;
    (x, -x - z, z)
}

fn hex_distance(a: Coord2, b: Coord2) -> i32 {
    let (ax, ay, az) = to_cube(a);
    let (bx, by, bz) = to_cube(b);
    (ax - bx).abs().max((ay - by).abs()).max((az - bz).abs())
}

pub fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    hex_distance(a, b) == 1
}

pub fn all_coords(size: Coord2) -> impl Iterator<Item = Coord2> {
    (0..size.0).flat_map(move |row| (0..size.1).map(move |col| (row, col)))
}

/// Adjacent mine counts by brute force over every pair of cells.
pub fn reference_counts(size: Coord2, mines: &[Coord2]) -> Array2<u8> {
    let mut counts = Array2::default(size.to_nd_index());
    for coords in all_coords(size) {
        counts[coords.to_nd_index()] = mines
            .iter()
            .filter(|&&mine| is_adjacent(coords, mine))
            .count() as u8;
    }
    counts
}

/// Cells a reveal of `start` must open: the zero region reachable from it plus
/// the numbered cells bordering that region, skipping flags and mines.
pub fn reference_cascade(board: &Board, start: Coord2) -> Vec<Coord2> {
    let size = board.size();
    let mut opened = vec![start];
    if board[start].adjacent_mine_count() != 0 {
        return opened;
    }

    let mut frontier = vec![start];
    while let Some(current) = frontier.pop() {
        for other in all_coords(size) {
            if !is_adjacent(current, other) || opened.contains(&other) {
                continue;
            }
            let cell = board[other];
            if cell.is_mine() || cell.is_flagged() || cell.is_revealed() {
                continue;
            }
            opened.push(other);
            if cell.adjacent_mine_count() == 0 {
                frontier.push(other);
            }
        }
    }

    opened.sort();
    opened
}

mod tests {
    use super::*;

    #[test]
    fn cube_distance_agrees_with_offset_tables() {
        let size = (5, 6);
        for coords in all_coords(size) {
            let mut expected: Vec<_> = all_coords(size)
                .filter(|&other| is_adjacent(coords, other))
                .collect();
            expected.sort();
            let mut actual = neighbors_of(coords, size).into_vec();
            actual.sort();
            assert_eq!(actual, expected, "{coords:?}");
        }
    }
}
