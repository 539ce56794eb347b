use gridpath_core::Point;

/// Cost of one diagonal step.
pub const DIAGONAL_COST: f64 = std::f64::consts::SQRT_2;

/// Cost of one orthogonal step.
pub const ORTHOGONAL_COST: f64 = 1.0;

/// Euclidean (L2) distance between two points.
///
/// For 8-neighbors this is exactly the step cost: 1 orthogonally, √2
/// diagonally.
#[inline]
pub fn euclidean(a: Point, b: Point) -> f64 {
    let dx = f64::from(a.x - b.x);
    let dy = f64::from(a.y - b.y);
    dx.hypot(dy)
}
