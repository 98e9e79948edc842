//! Buffer: A grid of cells that widgets render into.
//!
//! Cells are stored in row-major order in one contiguous `Vec`.

use super::cell::{Cell, Modifiers, Rgb};
use crate::layout::Rect;
use unicode_width::UnicodeWidthStr;

/// A grid of cells representing (part of) the terminal screen.
///
/// Access is in row-major order: `index = y * width + x`.
#[derive(Clone)]
pub struct Buffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

impl Buffer {
    /// Create a new buffer with the given dimensions.
    ///
    /// All cells are initialized to blank spaces on black.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "Buffer dimensions must be non-zero");
        let size = (width as usize) * (height as usize);
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        }
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The full area of the buffer.
    #[inline]
    pub const fn area(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| (y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get a reference to a cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    /// Set a cell at (x, y).
    ///
    /// Returns `false` if coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if let Some(idx) = self.index_of(x, y) {
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Write a grapheme at (x, y) with the given style.
    ///
    /// Wide graphemes also write a continuation cell at (x + 1, y), but only
    /// when `x + 1` is still before `clip_right`; a wide grapheme that would
    /// straddle the clip edge is replaced by a blank so it never bleeds out.
    ///
    /// Returns the number of columns consumed, or 0 if out of bounds.
    pub fn put_grapheme(
        &mut self,
        x: u16,
        y: u16,
        grapheme: &str,
        style: (Rgb, Rgb, Modifiers),
        clip_right: u16,
    ) -> u16 {
        let (fg, bg, modifiers) = style;
        if x >= clip_right || self.index_of(x, y).is_none() {
            return 0;
        }

        let width = u16::try_from(grapheme.width().clamp(1, 2)).unwrap_or(1);
        if width == 2 && x + 1 >= clip_right.min(self.width) {
            self.set(x, y, Cell::blank(bg));
            return 1;
        }

        let cell = Cell::from_grapheme(grapheme)
            .with_fg(fg)
            .with_bg(bg)
            .with_modifiers(modifiers);
        self.set(x, y, cell);
        if width == 2 {
            self.set(x + 1, y, Cell::continuation(bg));
        }
        width
    }

    /// Fill a rectangular region with a cell, clipped to the buffer.
    pub fn fill_rect(&mut self, rect: Rect, cell: &Cell) {
        for row in rect.y..rect.bottom().min(self.height) {
            for col in rect.x..rect.right().min(self.width) {
                self.set(col, row, cell.clone());
            }
        }
    }

    /// Reset every cell to a blank on black.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Resize the buffer, discarding its content.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width == self.width && height == self.height {
            return;
        }
        *self = Self::new(width.max(1), height.max(1));
    }

    /// Get a row as a slice of cells.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        let start = self.index_of(0, y)?;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Collect the visible symbols of a row segment into a string.
    ///
    /// Continuation cells are skipped, so wide graphemes appear once.
    pub fn row_text(&self, y: u16, x: u16, width: u16) -> String {
        let Some(row) = self.row(y) else {
            return String::new();
        };
        let start = (x as usize).min(row.len());
        let end = (x as usize + width as usize).min(row.len());
        row[start..end].iter().map(Cell::symbol).collect()
    }
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
