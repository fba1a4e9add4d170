//! Adjacency on a staggered hex grid.
//!
//! Cells are laid out in flat-topped columns where every odd column sits half a
//! row lower than its even neighbors. The six neighbors of a cell therefore
//! depend on the parity of its column, and everything that needs adjacency
//! (mine counting at generation time, cascading at reveal time, the web view)
//! goes through [`neighbors_of`].

use ndarray::Array2;
use smallvec::SmallVec;

use crate::*;

/// Upper bound on neighbors of a single hex cell.
pub const MAX_NEIGHBORS: usize = 6;

/// Neighbor coordinates of one cell, stored inline.
pub type Neighbors = SmallVec<[Coord2; MAX_NEIGHBORS]>;

/// `(d_row, d_col)` offsets for cells in even columns.
pub const EVEN_COLUMN_OFFSETS: [(i16, i16); MAX_NEIGHBORS] =
    [(-1, 0), (-1, 1), (0, 1), (1, 0), (0, -1), (-1, -1)];

/// `(d_row, d_col)` offsets for cells in odd columns.
pub const ODD_COLUMN_OFFSETS: [(i16, i16); MAX_NEIGHBORS] =
    [(-1, 0), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1)];

/// Picks the offset table for the column of `coords`.
pub const fn offsets_for((_, col): Coord2) -> &'static [(i16, i16); MAX_NEIGHBORS] {
    if col % 2 == 0 {
        &EVEN_COLUMN_OFFSETS
    } else {
        &ODD_COLUMN_OFFSETS
    }
}

/// In-bounds neighbors of `coords` on a board of `bounds` rows and columns.
pub fn neighbors_of(coords: Coord2, bounds: Coord2) -> Neighbors {
    NeighborIter::new(coords, bounds).collect()
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2) -> NeighborIter {
        let (rows, cols) = self.dim();
        let bounds = (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        );
        NeighborIter::new(index, bounds)
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (i16, i16), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    offsets: &'static [(i16, i16); MAX_NEIGHBORS],
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offsets: offsets_for(center),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *self.offsets.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(MAX_NEIGHBORS - usize::from(self.index)))
    }
}
