//! Square grid of cell symbols with bounds-checked access and text rendering.

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Symbol};
use crate::config::BoardSize;

/// N×N grid stored row-major. Every cell always holds a valid symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Symbol>,
}

impl Board {
    /// Create a board with every cell empty.
    pub fn new(size: BoardSize) -> Self {
        let n = size.side();
        Board {
            size: n,
            cells: vec![Symbol::Empty; n * n],
        }
    }

    /// Side length N.
    pub fn size(&self) -> usize {
        self.size
    }

    /// True iff both indices are within [0, N). Accepts raw signed input.
    pub fn is_in_bounds(&self, row: i64, column: i64) -> bool {
        let n = self.size as i64;
        (0..n).contains(&row) && (0..n).contains(&column)
    }

    fn index(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        if row >= self.size || column >= self.size {
            return Err(BoardError::OutOfBounds { row, column });
        }
        Ok(row * self.size + column)
    }

    /// Symbol at (row, column).
    pub fn get(&self, row: usize, column: usize) -> Result<Symbol, BoardError> {
        let idx = self.index(row, column)?;
        Ok(self.cells[idx])
    }

    /// Overwrite (row, column) with `symbol`. Occupancy is not checked here.
    pub fn set(&mut self, row: usize, column: usize, symbol: Symbol) -> Result<(), BoardError> {
        let idx = self.index(row, column)?;
        self.cells[idx] = symbol;
        Ok(())
    }

    /// Symbols of row `r`, left to right. Empty if `r` is out of range.
    pub fn row(&self, r: usize) -> impl Iterator<Item = Symbol> + '_ {
        let start = if r < self.size { r * self.size } else { 0 };
        let len = if r < self.size { self.size } else { 0 };
        self.cells[start..start + len].iter().copied()
    }

    /// Symbols of column `c`, top to bottom. Empty if `c` is out of range.
    pub fn column(&self, c: usize) -> impl Iterator<Item = Symbol> + '_ {
        let len = if c < self.size { self.size } else { 0 };
        (0..len).map(move |r| self.cells[r * self.size + c])
    }

    /// Main diagonal (0,0) .. (N-1,N-1).
    pub fn diagonal(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.size).map(move |i| self.cells[i * self.size + i])
    }

    /// Anti-diagonal (0,N-1) .. (N-1,0).
    pub fn anti_diagonal(&self) -> impl Iterator<Item = Symbol> + '_ {
        (0..self.size).map(move |i| self.cells[i * self.size + (self.size - 1 - i)])
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_empty())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    /// Draw the grid with box-drawing characters, one line per border or row,
    /// joined by `\n` without a trailing newline.
    pub fn render(&self) -> String {
        let n = self.size;
        let border = |left: &str, mid: &str, right: &str| {
            let mut line = String::from(left);
            line.push_str("━━━");
            for _ in 1..n {
                line.push_str(mid);
                line.push_str("━━━");
            }
            line.push_str(right);
            line
        };
        let top = border("┏", "┳", "┓");
        let separator = border("┣", "╋", "┫");
        let bottom = border("┗", "┻", "┛");

        let mut lines: Vec<String> = Vec::with_capacity(2 * n + 1);
        lines.push(top);
        for r in 0..n {
            let mut line = String::new();
            for sym in self.row(r) {
                line.push_str("┃ ");
                line.push(sym.as_char());
                line.push(' ');
            }
            line.push('┃');
            lines.push(line);
            if r != n - 1 {
                lines.push(separator.clone());
            }
        }
        lines.push(bottom);
        lines.join("\n")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
