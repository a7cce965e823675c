//! Text I/O for sample grids.
//!
//! - `load` / `from_reader`: parse a whitespace-delimited grid, inferring the
//!   dimensions from the content.
//! - `save` / `write_to`: write rows back as single-space-separated text.
use super::PixelGrid;
use crate::error::GridError;
use log::debug;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

impl PixelGrid {
    /// Parse a grid from a text file.
    ///
    /// Fails with [`GridError::SourceUnavailable`] when the file cannot be
    /// opened, and with [`GridError::Format`] when a row's sample count
    /// disagrees with the first row's.
    pub fn load(path: &Path) -> Result<Self, GridError> {
        let file = File::open(path).map_err(|e| GridError::SourceUnavailable {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_reader(BufReader::new(file), &path.display().to_string())
    }

    /// Parse a grid from any buffered reader.
    ///
    /// Each line contributes one row. A row's samples are the leading run of
    /// integer-parseable whitespace-separated words; consumption stops at the
    /// first word that is not an integer. The first line fixes the width,
    /// every later line must match it exactly, and the height is the number
    /// of lines read. Empty input yields the empty grid. `origin` names the
    /// source in diagnostics.
    pub fn from_reader<R: BufRead>(reader: R, origin: &str) -> Result<Self, GridError> {
        let mut width = 0usize;
        let mut height = 0usize;
        let mut data = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| GridError::SourceUnavailable {
                path: origin.to_string(),
                source: e,
            })?;
            let before = data.len();
            data.extend(
                line.split_whitespace()
                    .map_while(|word| word.parse::<i32>().ok()),
            );
            let found = data.len() - before;
            if height == 0 {
                width = found;
            } else if found != width {
                return Err(GridError::Format {
                    origin: origin.to_string(),
                    line: index + 1,
                    expected: width,
                    found,
                });
            }
            height += 1;
        }

        debug!("parsed {width}x{height} grid from {origin}");
        Ok(PixelGrid::from_raw(width, height, data))
    }

    /// Write each row as its samples separated by single spaces, one row per
    /// line with a trailing newline. Write failures are surfaced to the
    /// caller.
    pub fn write_to<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        for row in self.rows() {
            for (i, v) in row.iter().enumerate() {
                if i > 0 {
                    sink.write_all(b" ")?;
                }
                write!(sink, "{v}")?;
            }
            sink.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Serialize the grid to a text file.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(&mut out)?;
        out.flush()
    }
}
