//! Human-readable render modes. Output is for operators, not for re-parsing.
use super::PixelGrid;
use std::io::{self, Write};

impl PixelGrid {
    /// Render each sample left-justified in a `column_width`-character cell,
    /// with `spacing` literal spaces between columns and none after the last.
    pub fn render_aligned<W: Write>(
        &self,
        sink: &mut W,
        column_width: usize,
        spacing: usize,
    ) -> io::Result<()> {
        for row in self.rows() {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    write!(sink, "{:spacing$}", "")?;
                }
                write!(sink, "{v:<column_width$}")?;
            }
            sink.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Render the grid as a glyph view: `.` for samples equal to zero, `O`
    /// for everything else, no separators.
    pub fn render_glyphs<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for row in self.rows() {
            for &v in row {
                sink.write_all(if v == 0 { b"." } else { b"O" })?;
            }
            sink.write_all(b"\n")?;
        }
        Ok(())
    }
}
