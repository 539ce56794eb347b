use gridpath_core::{Grid, Point, Range};

use crate::distance;

/// Minimal search interface: the extent of the map and which cells can be
/// entered.
pub trait Pather {
    /// The valid coordinate range. Neighbors outside it are never produced.
    fn bounds(&self) -> Range;

    /// Whether `p` may be part of a path.
    fn passable(&self, p: Point) -> bool;
}

/// Edge costs and the heuristic used to order the frontier.
pub trait CostModel {
    /// Cost of moving from `from` to adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> f64;

    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> f64;
}

/// Straight-line distance for both the edge cost and the heuristic.
///
/// Consistent for 8-connected movement with unit/√2 steps, so a finalized
/// cell never needs reopening.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl CostModel for Euclidean {
    #[inline]
    fn cost(&self, from: Point, to: Point) -> f64 {
        distance::euclidean(from, to)
    }

    #[inline]
    fn estimate(&self, from: Point, to: Point) -> f64 {
        distance::euclidean(from, to)
    }
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    #[inline]
    fn passable(&self, p: Point) -> bool {
        self.is_passable(p)
    }
}
