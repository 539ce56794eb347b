use gridpath_core::{Point, Range};

use crate::distance::{DIAGONAL_COST, ORTHOGONAL_COST};

/// The eight movement offsets, in the order candidates are produced.
///
/// The order is observable: it decides frontier insertion order, and with it
/// which of several equal-cost paths the search returns.
pub const OFFSETS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(1, 1),
    Point::new(0, 1),
    Point::new(-1, 1),
    Point::new(-1, 0),
    Point::new(-1, -1),
    Point::new(0, -1),
    Point::new(1, -1),
];

/// An adjacent cell together with the cost of stepping into it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Step {
    pub to: Point,
    pub cost: f64,
}

/// Cached neighbor computation helper.
///
/// Produces the up-to-8 neighbors of a grid point. Candidates that fall
/// outside the bounds are dropped, never clamped or substituted.
pub struct Neighbors {
    buf: Vec<Step>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(8),
        }
    }

    /// Return the in-bounds 8-directional neighbors of `p` with their step
    /// costs (1 orthogonal, √2 diagonal).
    pub fn all(&mut self, p: Point, bounds: Range) -> &[Step] {
        self.all_filtered(p, bounds, |_| true)
    }

    /// Like [`all`](Self::all), additionally keeping only those for which
    /// `keep` returns `true`.
    pub fn all_filtered(
        &mut self,
        p: Point,
        bounds: Range,
        keep: impl Fn(Point) -> bool,
    ) -> &[Step] {
        self.buf.clear();
        for d in OFFSETS {
            let n = p + d;
            if !bounds.contains(n) || !keep(n) {
                continue;
            }
            let cost = if d.x != 0 && d.y != 0 {
                DIAGONAL_COST
            } else {
                ORTHOGONAL_COST
            };
            self.buf.push(Step { to: n, cost });
        }
        &self.buf
    }
}
