use gridpath_core::Point;
use log::{debug, trace};

use crate::error::{ConfigError, Endpoint};
use crate::frontier::TieBreak;
use crate::neighbors::{Neighbors, Step};
use crate::node::SearchContext;
use crate::path::{Path, SearchStats, reconstruct};
use crate::traits::{CostModel, Euclidean, Pather};

/// Result of a search that was allowed to run.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The goal was reached.
    Found(Path),
    /// The frontier ran dry: the goal is walled off from the start.
    NoPath(SearchStats),
}

impl SearchOutcome {
    #[inline]
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath(_) => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(path) => Some(path),
            Self::NoPath(_) => None,
        }
    }

    pub fn stats(&self) -> SearchStats {
        match self {
            Self::Found(path) => path.stats(),
            Self::NoPath(stats) => *stats,
        }
    }
}

/// A* search over a [`Pather`].
///
/// The engine itself is immutable configuration: every [`search`] call
/// builds its own node arena, frontier and visited set, so searches never
/// observe each other.
///
/// [`search`]: AstarEngine::search
pub struct AstarEngine<'a, P: ?Sized, C = Euclidean> {
    pather: &'a P,
    model: C,
    tie_break: TieBreak,
}

impl<'a, P: Pather + ?Sized> AstarEngine<'a, P> {
    /// Create an engine using Euclidean costs and the default tie-break.
    pub fn new(pather: &'a P) -> Self {
        Self {
            pather,
            model: Euclidean,
            tie_break: TieBreak::default(),
        }
    }
}

impl<'a, P: Pather + ?Sized, C: CostModel> AstarEngine<'a, P, C> {
    /// Replace the cost model.
    pub fn with_cost_model<D: CostModel>(self, model: D) -> AstarEngine<'a, P, D> {
        AstarEngine {
            pather: self.pather,
            model,
            tie_break: self.tie_break,
        }
    }

    /// Set the frontier tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Check that both endpoints are inside the map and not closed.
    pub fn validate(&self, start: Point, goal: Point) -> Result<(), ConfigError> {
        let bounds = self.pather.bounds();
        for (which, point) in [(Endpoint::Start, start), (Endpoint::Goal, goal)] {
            if !bounds.contains(point) {
                return Err(ConfigError::OutOfBounds {
                    which,
                    point,
                    bounds,
                });
            }
            if !self.pather.passable(point) {
                return Err(ConfigError::Blocked { which, point });
            }
        }
        Ok(())
    }

    /// Compute a lowest-cost path from `start` to `goal`.
    ///
    /// Invalid endpoints are rejected before any search work. An
    /// unreachable goal yields [`SearchOutcome::NoPath`].
    pub fn search(&self, start: Point, goal: Point) -> Result<SearchOutcome, ConfigError> {
        self.validate(start, goal)?;

        let bounds = self.pather.bounds();
        let mut ctx = SearchContext::new(bounds, goal, self.tie_break);
        let mut stats = SearchStats::default();
        debug!(
            "astar: {start} -> {goal} on {bounds}, tie-break {:?}",
            self.tie_break
        );

        // Initialise the start node.
        let h = self.model.estimate(start, ctx.goal);
        if let Some(node) = ctx.node_mut(start) {
            node.g = 0.0;
            node.h = h;
            node.f = h;
            node.parent = None;
        }
        ctx.frontier.push(start, h);
        stats.max_frontier = 1;

        let mut nbuf = Neighbors::new();

        while let Some((current, f)) = ctx.frontier.pop() {
            stats.expanded += 1;

            if current == ctx.goal {
                let cost = ctx.node(current).map_or(0.0, |n| n.g);
                let chain = reconstruct(current, ctx.nodes.len(), |p| ctx.parent(p));
                debug!(
                    "astar: found path of {} cells, cost {cost:.3}, {} expanded",
                    chain.len(),
                    stats.expanded
                );
                return Ok(SearchOutcome::Found(Path::from_goal_first(chain, cost, stats)));
            }

            ctx.visited.insert(current);
            let current_g = ctx.node(current).map_or(f64::INFINITY, |n| n.g);
            trace!("astar: expand {current} g={current_g:.3} f={f:.3}");

            let passable = |p: Point| self.pather.passable(p);
            for &Step { to, .. } in nbuf.all_filtered(current, bounds, passable) {
                if ctx.visited.contains(to) {
                    continue;
                }
                let tentative_g = current_g + self.model.cost(current, to);
                let queued = ctx.frontier.contains(to);
                let h = self.model.estimate(to, ctx.goal);
                let Some(n) = ctx.node_mut(to) else {
                    continue;
                };
                debug_assert_eq!(n.position, to);
                if queued && tentative_g >= n.g {
                    continue;
                }
                n.g = tentative_g;
                n.h = h;
                n.f = n.g + n.h;
                n.parent = Some(current);
                let nf = n.f;
                ctx.frontier.push(to, nf);
            }
            stats.max_frontier = stats.max_frontier.max(ctx.frontier.len());
        }

        debug!(
            "astar: no path from {start} to {goal}, {} expanded",
            stats.expanded
        );
        Ok(SearchOutcome::NoPath(stats))
    }
}
