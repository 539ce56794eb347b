use gridpath_core::Point;

/// Counters describing how much work a search did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Number of frontier extractions, the goal's included.
    pub expanded: usize,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// A lowest-cost route, ordered from start to goal (both included).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Point>,
    cost: f64,
    stats: SearchStats,
}

impl Path {
    /// Build a path from the goal-first sequence produced by
    /// [`reconstruct`].
    pub fn from_goal_first(mut cells: Vec<Point>, cost: f64, stats: SearchStats) -> Self {
        cells.reverse();
        Self { cells, cost, stats }
    }

    /// The cells from start to goal.
    #[inline]
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }

    /// The cells from goal back to start.
    pub fn iter_from_goal(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells.iter().rev().copied()
    }

    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    pub fn goal(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Number of cells on the path.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Accumulated edge cost from start to goal.
    #[inline]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn into_cells(self) -> Vec<Point> {
        self.cells
    }
}

/// Follow parent links from `goal` until a cell without a parent.
///
/// Returns the chain goal-first. `limit` bounds the walk (the number of
/// cells in the map); a chain that would exceed it is cut there, which
/// only happens if the links were corrupted into a cycle.
pub fn reconstruct(goal: Point, limit: usize, parent: impl Fn(Point) -> Option<Point>) -> Vec<Point> {
    let mut chain = vec![goal];
    let mut cur = goal;
    while chain.len() < limit {
        let Some(prev) = parent(cur) else {
            break;
        };
        chain.push(prev);
        cur = prev;
    }
    chain
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn path_round_trip() {
        let stats = SearchStats {
            expanded: 3,
            max_frontier: 5,
        };
        let path = Path::from_goal_first(vec![Point::new(1, 1), Point::new(0, 0)], 1.5, stats);
        let json = serde_json::to_string(&path).unwrap();
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, path);
        assert_eq!(back.stats(), stats);
    }
}
