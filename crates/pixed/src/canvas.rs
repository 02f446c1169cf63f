//! The pixel grid and its drawing primitives.
//!
//! All public coordinates are 1-based `(x, y)` with `x` the column and `y`
//! the row, origin in the top-left corner. Every operation checks its
//! arguments before touching a cell, so a rejected call never leaves a
//! partially drawn canvas behind.
use crate::{
    error::{EditorError, Result},
    target::{CanvasTarget, StringTarget},
    Color,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    // row-major, `width * height` cells
    cells: Vec<Color>,
}

impl Canvas {
    /// Allocates a `width` x `height` canvas filled with [`Color::WHITE`].
    ///
    /// Zero-sized canvases, and sizes whose cells cannot be allocated, are
    /// rejected with [`EditorError::InvalidDimension`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = || EditorError::InvalidDimension {
            width: i64::try_from(width).unwrap_or(i64::MAX),
            height: i64::try_from(height).unwrap_or(i64::MAX),
        };
        if width == 0 || height == 0 {
            return Err(invalid());
        }
        let len = width.checked_mul(height).ok_or_else(invalid)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| invalid())?;
        cells.resize(len, Color::WHITE);
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Colour at `(x, y)`, or `None` when the point lies outside the canvas.
    pub fn get(&self, x: i64, y: i64) -> Option<Color> {
        self.index(x, y).ok().map(|i| self.cells[i])
    }

    pub fn clear(&mut self) {
        self.cells.fill(Color::WHITE);
    }

    pub fn set_pixel(&mut self, x: i64, y: i64, color: Color) -> Result<()> {
        let i = self.index(x, y)?;
        self.cells[i] = color;
        Ok(())
    }

    /// Colours column `x` from row `y1` to `y2` inclusive, in either order.
    pub fn draw_vertical(&mut self, x: i64, y1: i64, y2: i64, color: Color) -> Result<()> {
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        let top = self.index(x, y1)?;
        let bottom = self.index(x, y2)?;
        for i in (top..=bottom).step_by(self.width) {
            self.cells[i] = color;
        }
        Ok(())
    }

    /// Colours row `y` from column `x1` to `x2` inclusive, in either order.
    pub fn draw_horizontal(&mut self, x1: i64, x2: i64, y: i64, color: Color) -> Result<()> {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let left = self.index(x1, y)?;
        let right = self.index(x2, y)?;
        self.cells[left..=right].fill(color);
        Ok(())
    }

    /// Replaces the 4-connected region sharing the colour of `(x, y)` with `color`.
    ///
    /// Uses an explicit worklist, so the depth of the region never touches the
    /// call stack. Returns the number of cells that changed.
    pub fn flood_fill(&mut self, x: i64, y: i64, color: Color) -> Result<usize> {
        let start = self.index(x, y)?;
        let old = self.cells[start];
        if old == color {
            return Ok(0);
        }

        let (w, h) = (self.width, self.height);
        // cells are recoloured when pushed, so each index enters the worklist once
        self.cells[start] = color;
        let mut filled = 1;
        let mut pending = vec![start];
        while let Some(i) = pending.pop() {
            let (col, row) = (i % w, i / w);
            let neighbours = [
                (row + 1 < h).then(|| i + w),
                (row > 0).then(|| i - w),
                (col + 1 < w).then(|| i + 1),
                (col > 0).then(|| i - 1),
            ];
            for n in neighbours.into_iter().flatten() {
                if self.cells[n] == old {
                    self.cells[n] = color;
                    filled += 1;
                    pending.push(n);
                }
            }
        }
        tracing::trace!(x, y, filled, "flood fill done");
        Ok(filled)
    }

    /// Iterates the rows top to bottom as cell slices.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.cells.chunks(self.width)
    }

    /// Renders the canvas as text: one line per row, no trailing newline.
    pub fn render(&self) -> String {
        let mut target = StringTarget {
            text: String::with_capacity((self.width + 1) * self.height),
        };
        match self.render_to(&mut target) {
            Ok(()) => target.text,
            Err(never) => match never {},
        }
    }

    /// Streams the canvas into `target` row by row.
    pub fn render_to<T: CanvasTarget>(
        &self,
        target: &mut T,
    ) -> std::result::Result<(), T::Error> {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                target.next_line()?;
            }
            for &cell in row {
                target.draw(cell)?;
            }
        }
        target.finish()
    }

    fn index(&self, x: i64, y: i64) -> Result<usize> {
        let in_range =
            |v: i64, max: usize| usize::try_from(v).is_ok_and(|v| (1..=max).contains(&v));
        if !in_range(x, self.width) || !in_range(y, self.height) {
            return Err(EditorError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok((y as usize - 1) * self.width + (x as usize - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_row_major_one_based() {
        let canvas = Canvas::new(3, 2).unwrap();
        assert_eq!(canvas.index(1, 1), Ok(0));
        assert_eq!(canvas.index(3, 1), Ok(2));
        assert_eq!(canvas.index(1, 2), Ok(3));
        assert_eq!(canvas.index(3, 2), Ok(5));
    }

    #[test]
    fn index_rejects_zero_and_negative() {
        let canvas = Canvas::new(3, 2).unwrap();
        assert!(canvas.index(0, 1).is_err());
        assert!(canvas.index(1, 0).is_err());
        assert!(canvas.index(-1, 1).is_err());
        assert!(canvas.index(4, 1).is_err());
        assert!(canvas.index(1, 3).is_err());
    }

    #[test]
    fn flood_fill_reports_changed_cells() {
        let mut canvas = Canvas::new(4, 3).unwrap();
        canvas.draw_vertical(2, 1, 3, Color('X')).unwrap();
        assert_eq!(canvas.flood_fill(1, 1, Color('C')), Ok(3));
        assert_eq!(canvas.flood_fill(4, 3, Color('D')), Ok(6));
        assert_eq!(canvas.flood_fill(4, 3, Color('D')), Ok(0));
    }
}
