//! ASCII maps: building a [`Grid`] from text and printing it back.
//!
//! Each line is one row, top to bottom. The characters are those of
//! [`CellKind::glyph`]: `.` open, `#` closed, `S` start, `E` end.

use std::fmt;

use crate::cell::CellKind;
use crate::geom::Point;
use crate::grid::Grid;

impl Grid {
    /// Parse an ASCII map.
    ///
    /// Leading/trailing whitespace is trimmed from the whole string and from
    /// the end of each line. Every line must have the same width.
    pub fn from_ascii(s: &str) -> Result<Self, GridParseError> {
        let s = s.trim();
        let rows: Vec<&str> = s.lines().map(str::trim_end).collect();
        let width = rows.first().map_or(0, |r| r.chars().count());

        let mut kinds = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let w = row.chars().count();
            if w != width {
                return Err(GridParseError::InconsistentWidth {
                    line: y,
                    expected: width,
                    found: w,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                let kind = CellKind::from_glyph(ch).ok_or(GridParseError::InvalidChar {
                    ch,
                    pos: Point::new(x as i32, y as i32),
                })?;
                kinds.push(kind);
            }
        }

        let mut grid = Grid::new(width as i32, rows.len() as i32);
        let mut it = kinds.into_iter();
        grid.fill_fn(|_| it.next().unwrap_or_default());
        Ok(grid)
    }

    /// Render the grid as an ASCII map, one line per row.
    pub fn to_ascii(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                let kind = self.at(Point::new(x, y)).unwrap_or_default();
                write!(f, "{}", kind.glyph())?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when parsing an ASCII map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridParseError {
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character that is not a cell glyph.
    InvalidChar { ch: char, pos: Point },
}

impl fmt::Display for GridParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "grid map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "grid map: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
        }
    }
}

impl std::error::Error for GridParseError {}
