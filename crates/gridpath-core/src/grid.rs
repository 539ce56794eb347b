//! The [`Grid`] type: a fixed-size 2D map of [`CellKind`] values.
//!
//! A `Grid` owns its cells outright. Grid sources fill it once; searches only
//! ever borrow it immutably, so one grid can serve any number of searches.

use crate::cell::CellKind;
use crate::geom::{Point, Range};

/// A 2D grid of cell classifications stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<CellKind>,
    bounds: Range,
}

impl Grid {
    /// Create a new `width × height` grid with every cell [`CellKind::Open`].
    ///
    /// Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![CellKind::Open; (w as usize) * (h as usize)],
            bounds: Range::new(0, 0, w, h),
        }
    }

    /// Create a square `n × n` open grid.
    pub fn square(n: i32) -> Self {
        Self::new(n, n)
    }

    /// The bounding range `[(0, 0), (width, height))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the grid as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Convert a flat index back to a `Point`.
    #[inline]
    pub fn point(&self, idx: usize) -> Point {
        self.bounds.point(idx)
    }

    /// Get the cell at a point, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<CellKind> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Set the cell at a point. Does nothing if out of bounds.
    pub fn set(&mut self, p: Point, kind: CellKind) {
        if let Some(i) = self.index(p) {
            self.cells[i] = kind;
        }
    }

    /// Fill the entire grid with `kind`.
    pub fn fill(&mut self, kind: CellKind) {
        self.cells.fill(kind);
    }

    /// Fill the grid using a function of each point.
    pub fn fill_fn(&mut self, mut f: impl FnMut(Point) -> CellKind) {
        for (i, p) in self.bounds.iter().enumerate() {
            self.cells[i] = f(p);
        }
    }

    /// Whether `p` is inside the grid and not [`CellKind::Closed`].
    #[inline]
    pub fn is_passable(&self, p: Point) -> bool {
        self.at(p).is_some_and(CellKind::is_passable)
    }

    /// Count how many cells equal `kind`.
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }

    /// All positions holding `kind`, in row-major order.
    pub fn positions(&self, kind: CellKind) -> impl Iterator<Item = Point> + '_ {
        self.iter().filter(move |&(_, c)| c == kind).map(|(p, _)| p)
    }

    /// First position (row-major) holding `kind`.
    pub fn find(&self, kind: CellKind) -> Option<Point> {
        self.positions(kind).next()
    }

    /// Iterate over `(Point, CellKind)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Point, CellKind)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_size() {
        let g = Grid::new(10, 5);
        assert_eq!(g.size(), Point::new(10, 5));
        assert_eq!(g.width(), 10);
        assert_eq!(g.height(), 5);
        assert_eq!(g.len(), 50);
        assert_eq!(g.count(CellKind::Open), 50);
    }

    #[test]
    fn negative_dimensions_are_empty() {
        let g = Grid::new(-3, 4);
        assert!(g.is_empty());
        assert!(!g.contains(Point::ZERO));
    }

    #[test]
    fn set_and_at() {
        let mut g = Grid::square(4);
        let p = Point::new(2, 3);
        g.set(p, CellKind::Closed);
        assert_eq!(g.at(p), Some(CellKind::Closed));
        assert_eq!(g.at(Point::new(0, 0)), Some(CellKind::Open));
        assert_eq!(g.at(Point::new(10, 10)), None);
        assert_eq!(g.at(Point::new(-1, 0)), None);
        g.set(Point::new(4, 0), CellKind::Closed);
        assert_eq!(g.count(CellKind::Closed), 1);
    }

    #[test]
    fn index_point_round_trip() {
        let g = Grid::new(7, 3);
        for p in g.bounds() {
            let i = g.index(p).unwrap();
            assert_eq!(g.point(i), p);
        }
    }

    #[test]
    fn passability() {
        let mut g = Grid::square(3);
        g.set(Point::new(1, 1), CellKind::Closed);
        g.set(Point::new(0, 0), CellKind::Start);
        assert!(g.is_passable(Point::new(0, 0)));
        assert!(!g.is_passable(Point::new(1, 1)));
        assert!(!g.is_passable(Point::new(3, 0)));
    }

    #[test]
    fn fill_fn_and_find() {
        let mut g = Grid::new(3, 2);
        g.fill_fn(|p| if p.x == 2 { CellKind::Closed } else { CellKind::Open });
        assert_eq!(g.count(CellKind::Closed), 2);
        assert_eq!(g.find(CellKind::Closed), Some(Point::new(2, 0)));
        assert_eq!(g.find(CellKind::End), None);
        let walls: Vec<_> = g.positions(CellKind::Closed).collect();
        assert_eq!(walls, vec![Point::new(2, 0), Point::new(2, 1)]);
        g.fill(CellKind::Closed);
        assert_eq!(g.count(CellKind::Closed), 6);
    }

    #[test]
    fn iter_is_row_major() {
        let mut g = Grid::new(3, 2);
        g.set(Point::new(1, 0), CellKind::End);
        let items: Vec<_> = g.iter().collect();
        assert_eq!(items.len(), 6);
        assert_eq!(items[1], (Point::new(1, 0), CellKind::End));
        assert_eq!(items[3].0, Point::new(0, 1));
    }
}
