//! Reading and writing grids as plain text.
//!
//! [`load`] reads one row per line, each a contiguous run of `0` and `1`
//! digits. [`save`] writes one row per line, digits separated by single
//! spaces. The two formats differ on purpose: saved files are meant for
//! reading, not for loading back, so `load(save(grid))` fails with
//! [`InvalidChar`](ParseError::InvalidChar).

use crate::{
    cells::{ALIVE, DEAD},
    error::Error,
    grid::Grid,
};
use displaydoc::Display;
use std::fmt::Write;
use thiserror::Error as ThisError;

/// Errors that can occur when parsing a pattern.
///
/// Line numbers are 1-indexed positions in the input text,
/// counting blank lines.
#[derive(Clone, Debug, PartialEq, Eq, Display, ThisError)]
pub enum ParseError {
    /// the input contains no rows
    Empty,
    /// unexpected character {0:?} at line {1}
    InvalidChar(char, usize),
    /// line {0} differs in length from the first row
    UnevenRows(usize),
}

/// Parses a grid from text, one row per line.
///
/// Every character must be `0` or `1`, with no separators. Blank lines
/// are skipped; the remaining lines must all have the length of the
/// first one. The grid dimensions are taken from the input.
pub fn load(text: &str) -> Result<Grid, Error> {
    let mut cells = Vec::new();
    let mut rows = 0;
    let mut cols = None;
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        for ch in line.chars() {
            match ch {
                '0' => cells.push(DEAD),
                '1' => cells.push(ALIVE),
                _ => return Err(ParseError::InvalidChar(ch, index + 1).into()),
            }
        }
        let width = line.chars().count();
        if *cols.get_or_insert(width) != width {
            return Err(ParseError::UnevenRows(index + 1).into());
        }
        rows += 1;
    }
    match cols {
        Some(cols) => Ok(Grid::from_rows(rows, cols, cells)),
        None => Err(ParseError::Empty.into()),
    }
}

/// Writes a grid as text, one row per line, digits separated by
/// single spaces, each line newline-terminated.
pub fn save(grid: &Grid) -> String {
    let mut text = String::new();
    for row in grid.iter_rows() {
        for (col, &cell) in row.iter().enumerate() {
            if col > 0 {
                text.push(' ');
            }
            let _ = write!(text, "{}", cell);
        }
        text.push('\n');
    }
    text
}
