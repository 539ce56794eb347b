//! The contract every grid source fulfils, and its error type.

use std::fmt;

use gridpath_core::{CellKind, Grid, GridParseError, Point};

/// Something that produces a classified grid and the route endpoints on it.
pub trait GridSource {
    /// Produce the grid. Every cell is classified; the grid is never empty.
    fn build(&self) -> Result<Grid, IngestionError>;

    /// Where the route starts.
    fn start_coordinate(&self) -> Point;

    /// Where the route ends.
    fn end_coordinate(&self) -> Point;
}

/// Find the single [`CellKind::Start`] and single [`CellKind::End`] cell.
pub fn locate_markers(grid: &Grid) -> Result<(Point, Point), IngestionError> {
    let start = locate(grid, CellKind::Start)?;
    let end = locate(grid, CellKind::End)?;
    Ok((start, end))
}

fn locate(grid: &Grid, kind: CellKind) -> Result<Point, IngestionError> {
    let mut found = grid.positions(kind);
    let first = found.next().ok_or(IngestionError::MissingMarker(kind))?;
    if let Some(second) = found.next() {
        return Err(IngestionError::DuplicateMarker {
            kind,
            first,
            second,
        });
    }
    Ok(first)
}

/// A grid source failed to produce a well-formed grid.
#[derive(Debug, Clone, PartialEq)]
pub enum IngestionError {
    /// A requested dimension was not positive.
    InvalidDimension(i32),
    /// The open-cell threshold was NaN or infinite.
    InvalidThreshold(f64),
    /// The sampling scale was NaN, infinite or not positive.
    InvalidScale(f64),
    /// The image had no pixels.
    EmptyImage,
    /// The image is wider or taller than a grid can address.
    ImageTooLarge { width: u32, height: u32 },
    /// No cell carried the given marker.
    MissingMarker(CellKind),
    /// More than one cell carried the given marker.
    DuplicateMarker {
        kind: CellKind,
        first: Point,
        second: Point,
    },
    /// The image could not be read or decoded.
    Decode(String),
    /// A text map could not be read.
    Io(String),
    /// A text map was malformed.
    Parse(GridParseError),
}

impl fmt::Display for IngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension(n) => write!(f, "grid dimension must be positive, got {n}"),
            Self::InvalidThreshold(t) => write!(f, "open-cell threshold must be finite, got {t}"),
            Self::InvalidScale(s) => write!(f, "noise scale must be positive and finite, got {s}"),
            Self::EmptyImage => f.write_str("image has no pixels"),
            Self::ImageTooLarge { width, height } => {
                write!(f, "image of {width}x{height} pixels is too large for a grid")
            }
            Self::MissingMarker(kind) => write!(f, "map has no {kind} cell"),
            Self::DuplicateMarker {
                kind,
                first,
                second,
            } => write!(f, "map has more than one {kind} cell: {first} and {second}"),
            Self::Decode(e) => write!(f, "cannot decode image: {e}"),
            Self::Io(e) => write!(f, "cannot read map: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for IngestionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridParseError> for IngestionError {
    fn from(e: GridParseError) -> Self {
        Self::Parse(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_both_markers() {
        let g = Grid::from_ascii("S..\n..E").unwrap();
        assert_eq!(locate_markers(&g), Ok((Point::new(0, 0), Point::new(2, 1))));
    }

    #[test]
    fn missing_end() {
        let g = Grid::from_ascii("S..\n...").unwrap();
        assert_eq!(
            locate_markers(&g),
            Err(IngestionError::MissingMarker(CellKind::End))
        );
    }

    #[test]
    fn duplicate_start() {
        let g = Grid::from_ascii("S.S\n..E").unwrap();
        let err = locate_markers(&g).unwrap_err();
        assert_eq!(
            err,
            IngestionError::DuplicateMarker {
                kind: CellKind::Start,
                first: Point::new(0, 0),
                second: Point::new(2, 0),
            }
        );
        assert_eq!(
            err.to_string(),
            "map has more than one start cell: (0, 0) and (2, 0)"
        );
    }
}
