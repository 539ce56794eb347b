//! Text rendering of a searched grid.

use gridpath_core::{CellKind, Grid, Point};
use gridpath_search::{Path, SearchOutcome};

/// Glyph for open cells on the route.
pub const PATH_GLYPH: char = '*';

/// Draw the grid one row per line, overlaying `path` on open cells.
///
/// Endpoint markers keep their own glyphs.
pub fn render_map(grid: &Grid, path: Option<&Path>) -> String {
    let mut on_path = vec![false; grid.len()];
    for &p in path.map(Path::cells).unwrap_or_default() {
        if let Some(i) = grid.index(p) {
            on_path[i] = true;
        }
    }

    let mut out = String::with_capacity(grid.len() + grid.height().max(0) as usize);
    for y in 0..grid.height() {
        if y > 0 {
            out.push('\n');
        }
        for x in 0..grid.width() {
            let p = Point::new(x, y);
            let ch = match grid.at(p).unwrap_or_default() {
                CellKind::Open if grid.index(p).is_some_and(|i| on_path[i]) => PATH_GLYPH,
                kind => kind.glyph(),
            };
            out.push(ch);
        }
    }
    out
}

/// One-line description of the outcome.
pub fn summary(outcome: &SearchOutcome) -> String {
    let stats = outcome.stats();
    match outcome.path() {
        Some(path) => format!(
            "path: {} cells, cost {:.3}, {} expanded, frontier peak {}",
            path.len(),
            path.cost(),
            stats.expanded,
            stats.max_frontier
        ),
        None => format!("no path ({} expanded)", stats.expanded),
    }
}
