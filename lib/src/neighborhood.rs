//! The Moore neighborhood of a cell.

use crate::{
    cells::{Coord, ALIVE},
    grid::Grid,
};

/// Offsets of the eight cells in the Moore neighborhood.
pub const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts the living cells among the up to eight neighbors of a cell.
///
/// Neighbors outside the grid are skipped, not wrapped around, so cells
/// on an edge have fewer neighbors. A corner cell has at most 3.
pub fn count_live_neighbors(grid: &Grid, (row, col): Coord) -> u8 {
    let mut count = 0;
    for &(dr, dc) in NBHD.iter() {
        let r = row as isize + dr;
        let c = col as isize + dc;
        if (0..grid.rows() as isize).contains(&r)
            && (0..grid.cols() as isize).contains(&c)
            && grid[(r as usize, c as usize)] == ALIVE
        {
            count += 1;
        }
    }
    count
}
