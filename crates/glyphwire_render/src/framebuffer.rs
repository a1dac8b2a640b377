//! Per-frame character grid
//!
//! A fixed-size square grid of glyphs, blank at construction, filled by one
//! render pass and then handed read-only to the display consumer. Plotting
//! uses centered screen coordinates: the shape-space origin maps to the
//! grid center, and anything past the edges is silently discarded.

use std::fmt;

/// The character an untouched cell holds
pub const BLANK: char = ' ';

/// A CANVAS_SIZE x CANVAS_SIZE grid of glyphs for one frame
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameBuffer {
    size: usize,
    half: i32,
    cells: Vec<char>,
}

impl FrameBuffer {
    /// A fresh, blank grid
    pub fn new(size: usize) -> Self {
        Self {
            size,
            half: (size / 2) as i32,
            cells: vec![BLANK; size * size],
        }
    }

    /// Grid width and height
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// The glyph at a grid cell, if in range
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    /// Write a glyph at centered screen coordinates: row = y + half,
    /// col = x + half. Out-of-bounds writes are discarded; the last write
    /// to a cell wins.
    pub fn plot(&mut self, x: i32, y: i32, glyph: char) {
        let col = x + self.half;
        let row = y + self.half;
        if col >= 0 && row >= 0 && (col as usize) < self.size && (row as usize) < self.size {
            self.cells[row as usize * self.size + col as usize] = glyph;
        }
    }

    /// The grid rows, top to bottom, each joined into a `String`
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.size).map(|row| row.iter().collect())
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = char> + '_ {
        self.cells.iter().copied()
    }
}

impl fmt::Display for FrameBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
