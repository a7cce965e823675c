use pixel_grid::PixelGrid;

/// Build a grid from literal rows. Panics if the rows are not rectangular.
pub fn grid_from_rows(rows: &[&[i32]]) -> PixelGrid {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    let mut grid = PixelGrid::new(width, height);
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "fixture rows must be rectangular");
        grid.row_mut(y).copy_from_slice(row);
    }
    grid
}

/// A 5x6 letter-R glyph with full-intensity strokes on a dim background.
pub fn letter_r() -> PixelGrid {
    grid_from_rows(&[
        &[255, 255, 255, 255, 0],
        &[255, 0, 0, 0, 255],
        &[255, 255, 255, 255, 0],
        &[255, 0, 255, 0, 0],
        &[255, 0, 0, 255, 0],
        &[255, 0, 0, 0, 255],
    ])
}

/// Serialize a grid into the whitespace-delimited text format.
pub fn to_text(grid: &PixelGrid) -> String {
    let mut out = Vec::new();
    grid.write_to(&mut out).expect("writing to a Vec cannot fail");
    String::from_utf8(out).expect("serialized grids are ASCII")
}
