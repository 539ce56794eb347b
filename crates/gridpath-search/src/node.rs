use gridpath_core::{Point, Range};

use crate::frontier::{Frontier, TieBreak, VisitedSet};

/// Per-cell search record.
///
/// `g` only ever decreases while a search runs, and `f == g + h` holds
/// whenever the node is read back from the frontier.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct SearchNode {
    pub position: Point,
    pub g: f64,
    pub h: f64,
    pub f: f64,
    /// Predecessor on the best-known path. `None` for the start and for
    /// cells not reached yet.
    pub parent: Option<Point>,
}

impl SearchNode {
    fn unreached(position: Point) -> Self {
        Self {
            position,
            g: f64::INFINITY,
            h: 0.0,
            f: f64::INFINITY,
            parent: None,
        }
    }
}

/// All mutable state of a single search invocation.
///
/// Built fresh for every call and dropped when it returns, so nothing from
/// one run can leak into the next.
pub(crate) struct SearchContext {
    pub(crate) bounds: Range,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) frontier: Frontier,
    pub(crate) visited: VisitedSet,
    pub(crate) goal: Point,
}

impl SearchContext {
    pub(crate) fn new(bounds: Range, goal: Point, tie_break: TieBreak) -> Self {
        Self {
            bounds,
            nodes: bounds.iter().map(SearchNode::unreached).collect(),
            frontier: Frontier::new(tie_break),
            visited: VisitedSet::new(),
            goal,
        }
    }

    /// Convert a `Point` to a node index. Returns `None` if out of range.
    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.bounds.index(p)
    }

    #[inline]
    pub(crate) fn node(&self, p: Point) -> Option<&SearchNode> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, p: Point) -> Option<&mut SearchNode> {
        self.idx(p).map(|i| &mut self.nodes[i])
    }

    #[inline]
    pub(crate) fn parent(&self, p: Point) -> Option<Point> {
        self.node(p).and_then(|n| n.parent)
    }
}
