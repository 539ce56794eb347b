use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::{Point, Range};

use crate::neighbors::Neighbors;
use crate::traits::Pather;

/// Lowest step cost from the nearest source to every reachable cell.
///
/// Computed by a plain uniform-cost search over the same 8-connected graph
/// the A* engine uses, with the neighbor rule's own step weights. Handy as
/// an independent check on route costs.
#[derive(Clone, Debug)]
pub struct CostMap {
    bounds: Range,
    costs: Vec<f64>,
}

impl CostMap {
    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    /// Cost at `p`, or `None` if `p` is outside the map or unreachable.
    pub fn at(&self, p: Point) -> Option<f64> {
        self.idx(p).map(|i| self.costs[i]).filter(|c| c.is_finite())
    }

    /// Number of reached cells.
    pub fn reached(&self) -> usize {
        self.costs.iter().filter(|c| c.is_finite()).count()
    }
}

#[derive(Copy, Clone)]
struct Entry {
    idx: usize,
    cost: f64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first.
        other.cost.total_cmp(&self.cost).then(self.idx.cmp(&other.idx))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compute a multi-source Dijkstra cost map.
///
/// Every passable source starts at cost 0; closed or out-of-range sources
/// are ignored.
pub fn dijkstra_costs<P: Pather + ?Sized>(pather: &P, sources: &[Point]) -> CostMap {
    let bounds = pather.bounds();
    let mut map = CostMap {
        bounds,
        costs: vec![f64::INFINITY; bounds.len()],
    };

    let mut open: BinaryHeap<Entry> = BinaryHeap::new();
    for &src in sources {
        if !pather.passable(src) {
            continue;
        }
        if let Some(si) = map.idx(src) {
            map.costs[si] = 0.0;
            open.push(Entry { idx: si, cost: 0.0 });
        }
    }

    let mut nb = Neighbors::new();
    while let Some(Entry { idx: ci, cost }) = open.pop() {
        if cost > map.costs[ci] {
            continue;
        }
        let cp = bounds.point(ci);
        for step in nb.all_filtered(cp, bounds, |p| pather.passable(p)) {
            let Some(ni) = map.idx(step.to) else {
                continue;
            };
            let tentative = cost + step.cost;
            if tentative < map.costs[ni] {
                map.costs[ni] = tentative;
                open.push(Entry {
                    idx: ni,
                    cost: tentative,
                });
            }
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Grid;
    use std::f64::consts::SQRT_2;

    #[test]
    fn open_grid_costs() {
        let g = Grid::square(3);
        let map = dijkstra_costs(&g, &[Point::new(0, 0)]);
        assert_eq!(map.at(Point::new(0, 0)), Some(0.0));
        assert_eq!(map.at(Point::new(2, 0)), Some(2.0));
        assert!((map.at(Point::new(2, 2)).unwrap() - 2.0 * SQRT_2).abs() < 1e-9);
        assert!((map.at(Point::new(2, 1)).unwrap() - (1.0 + SQRT_2)).abs() < 1e-9);
        assert_eq!(map.reached(), 9);
    }

    #[test]
    fn walls_block() {
        let g = Grid::from_ascii(
            "\
.#.
.#.
.#.",
        )
        .unwrap();
        let map = dijkstra_costs(&g, &[Point::new(0, 0)]);
        assert_eq!(map.at(Point::new(1, 0)), None);
        assert_eq!(map.at(Point::new(2, 2)), None);
        assert_eq!(map.reached(), 3);
    }

    #[test]
    fn multi_source_takes_nearest() {
        let g = Grid::new(5, 1);
        let map = dijkstra_costs(&g, &[Point::new(0, 0), Point::new(4, 0)]);
        assert_eq!(map.at(Point::new(1, 0)), Some(1.0));
        assert_eq!(map.at(Point::new(2, 0)), Some(2.0));
        assert_eq!(map.at(Point::new(3, 0)), Some(1.0));
    }

    #[test]
    fn closed_or_outside_sources_ignored() {
        let mut g = Grid::square(2);
        g.set(Point::new(0, 0), gridpath_core::CellKind::Closed);
        let map = dijkstra_costs(&g, &[Point::new(0, 0), Point::new(9, 9)]);
        assert_eq!(map.reached(), 0);
        assert_eq!(map.at(Point::new(9, 9)), None);
    }
}
