//! In-place intensity, geometric, and region-drawing transforms.
//!
//! Every operation here is total: out-of-range draw requests are clipped
//! against the grid bounds instead of failing, and the shape-changing
//! rotation rebuilds the buffer before swapping it in.
use super::PixelGrid;

impl PixelGrid {
    /// Binarize every sample against `limit`: `v <= limit` becomes `0`,
    /// anything above becomes `255`.
    pub fn threshold(&mut self, limit: i32) {
        for v in &mut self.data {
            *v = if *v <= limit { 0 } else { 255 };
        }
    }

    /// Mirror each row left-right. Shape is unchanged.
    pub fn flip_horizontal(&mut self) {
        for y in 0..self.height {
            self.row_mut(y).reverse();
        }
    }

    /// Rotate the grid 90° clockwise.
    ///
    /// The sample at old position `(x, y)` lands at `(height - 1 - y, x)`;
    /// width and height swap. Four applications restore the original grid.
    pub fn rotate_cw(&mut self) {
        let (w, h) = (self.width, self.height);
        let mut rotated = vec![0i32; w * h];
        for y in 0..h {
            let row = self.row(y);
            for (x, &v) in row.iter().enumerate() {
                rotated[x * h + (h - 1 - y)] = v;
            }
        }
        *self = PixelGrid::from_raw(h, w, rotated);
    }

    /// Set the sample at column `x`, row `y` to `value`. Out-of-range
    /// coordinates (including negative ones) are silently ignored.
    pub fn draw_point(&mut self, x: i32, y: i32, value: i32) {
        if x >= 0 && (x as usize) < self.width && y >= 0 && (y as usize) < self.height {
            self.set(x as usize, y as usize, value);
        }
    }

    /// Fill the rectangle with top-left `(x, y)` and extent `(w, h)`,
    /// clipped against the grid bounds. Negative origins clamp to the grid
    /// edge; zero or negative extents draw nothing.
    pub fn draw_box(&mut self, x: i32, y: i32, w: i32, h: i32, value: i32) {
        let x0 = (x as i64).max(0) as usize;
        let y0 = (y as i64).max(0) as usize;
        let x1 = (x as i64 + w as i64).clamp(0, self.width as i64) as usize;
        let y1 = (y as i64 + h as i64).clamp(0, self.height as i64) as usize;
        for row in y0..y1 {
            if x0 < x1 {
                self.row_mut(row)[x0..x1].fill(value);
            }
        }
    }

    /// Draw a `255` border along all four sides.
    ///
    /// Pass order: top row skipping column 0, full bottom row, left column
    /// skipping row 0, full right column. On grids with both dimensions
    /// above 1 the top-left corner is left untouched. No-op on an empty
    /// grid.
    pub fn draw_edge(&mut self) {
        if self.is_empty() {
            return;
        }
        let (w, h) = (self.width, self.height);
        for x in 1..w {
            self.set(x, 0, 255);
        }
        for x in 0..w {
            self.set(x, h - 1, 255);
        }
        for y in 1..h {
            self.set(0, y, 255);
        }
        for y in 0..h {
            self.set(w - 1, y, 255);
        }
    }
}
