//! Grids drawn as text.
//!
//! Uses the `.`/`#`/`S`/`E` alphabet of [`Grid::from_ascii`]. The map must
//! mark exactly one start and one end.

use std::fs;
use std::path::Path;

use gridpath_core::{CellKind, Grid, Point};
use log::info;

use crate::source::{GridSource, IngestionError, locate_markers};

/// A hand-drawn map and the endpoints it marks.
#[derive(Clone, Debug)]
pub struct AsciiSource {
    grid: Grid,
    start: Point,
    end: Point,
}

impl AsciiSource {
    /// Parse a map from text.
    pub fn parse(s: &str) -> Result<Self, IngestionError> {
        let grid = Grid::from_ascii(s)?;
        let (start, end) = locate_markers(&grid)?;
        info!(
            "text grid {}x{}: {} closed cells, start {start}, end {end}",
            grid.width(),
            grid.height(),
            grid.count(CellKind::Closed)
        );
        Ok(Self { grid, start, end })
    }

    /// Read and parse a map file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IngestionError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| IngestionError::Io(format!("{}: {e}", path.display())))?;
        Self::parse(&text)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }
}

impl GridSource for AsciiSource {
    fn build(&self) -> Result<Grid, IngestionError> {
        Ok(self.grid.clone())
    }

    fn start_coordinate(&self) -> Point {
        self.start
    }

    fn end_coordinate(&self) -> Point {
        self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::GridParseError;

    const MAP: &str = "
S..#
.#.#
...E
";

    #[test]
    fn parses_map_and_markers() {
        let src = AsciiSource::parse(MAP).unwrap();
        assert_eq!(src.start_coordinate(), Point::new(0, 0));
        assert_eq!(src.end_coordinate(), Point::new(3, 2));
        let g = src.build().unwrap();
        assert_eq!(g.size(), Point::new(4, 3));
        assert_eq!(g.count(CellKind::Closed), 3);
        assert_eq!(&g, src.grid());
    }

    #[test]
    fn ragged_map_is_a_parse_error() {
        let err = AsciiSource::parse("S..\n.E").unwrap_err();
        assert!(matches!(
            err,
            IngestionError::Parse(GridParseError::InconsistentWidth { .. })
        ));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unmarked_map_is_rejected() {
        let err = AsciiSource::parse("...\n..E").unwrap_err();
        assert_eq!(err, IngestionError::MissingMarker(CellKind::Start));
    }

    #[test]
    fn reads_from_file() {
        let path = std::env::temp_dir().join(format!("gridpath-ascii-{}.txt", std::process::id()));
        fs::write(&path, MAP).unwrap();
        let src = AsciiSource::open(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(src.unwrap().end_coordinate(), Point::new(3, 2));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = AsciiSource::open("/nonexistent/gridpath/map.txt").unwrap_err();
        assert!(matches!(err, IngestionError::Io(_)));
    }
}
