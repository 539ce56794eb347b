//! Lowest-cost route search on 2D grids.
//!
//! The core of the workspace: an A\* engine over 8-connected grids with
//! unit orthogonal and √2 diagonal steps, plus the pieces it is built from.
//!
//! - **A\*** search ([`AstarEngine::search`])
//! - **Dijkstra** multi-source cost maps ([`dijkstra_costs`]), the baseline
//!   the A\* results are checked against
//! - the neighbor rule ([`Neighbors`]), the open and closed sets
//!   ([`Frontier`], [`VisitedSet`]) and parent-chain reconstruction
//!   ([`reconstruct`])
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | map bounds and passability (implemented for [`Grid`](gridpath_core::Grid)) |
//! | [`CostModel`] | step cost and heuristic ([`Euclidean`] by default) |

mod astar;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod node;
mod path;
mod traits;

pub use astar::{AstarEngine, SearchOutcome};
pub use dijkstra::{CostMap, dijkstra_costs};
pub use distance::{DIAGONAL_COST, ORTHOGONAL_COST, euclidean};
pub use error::{ConfigError, Endpoint};
pub use frontier::{Frontier, TieBreak, VisitedSet};
pub use neighbors::{Neighbors, OFFSETS, Step};
pub use path::{Path, SearchStats, reconstruct};
pub use traits::{CostModel, Euclidean, Pather};
