//! Procedural grids from seeded gradient noise.
//!
//! A cell is open when the noise sampled at its position reaches the
//! threshold, and closed otherwise. Noise is smooth, so walls come out as
//! connected blobs rather than scattered pixels.

use gridpath_core::{CellKind, Grid, Point};
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::source::{GridSource, IngestionError};

/// 2D Perlin gradient noise with a seed-shuffled permutation table.
#[derive(Clone, Debug)]
pub struct Perlin {
    perm: [u8; 512],
}

impl Perlin {
    /// Build the noise field for `seed`. Equal seeds give equal fields.
    pub fn new(seed: u64) -> Self {
        let mut table: Vec<u8> = (0..=255).collect();
        table.shuffle(&mut StdRng::seed_from_u64(seed));
        let mut perm = [0u8; 512];
        for (i, slot) in perm.iter_mut().enumerate() {
            *slot = table[i & 255];
        }
        Self { perm }
    }

    /// Sample the field at `(x, y)`, mapped into `[0, 1]`.
    ///
    /// Integer lattice points always sample to exactly 0.5.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x0 = x.floor();
        let y0 = y.floor();
        let xf = x - x0;
        let yf = y - y0;
        let xi = (x0 as i64).rem_euclid(256) as usize;
        let yi = (y0 as i64).rem_euclid(256) as usize;

        let p = |i: usize| self.perm[i] as usize;
        let aa = p(p(xi) + yi);
        let ab = p(p(xi) + yi + 1);
        let ba = p(p(xi + 1) + yi);
        let bb = p(p(xi + 1) + yi + 1);

        let u = fade(xf);
        let v = fade(yf);
        let bottom = lerp(grad(aa, xf, yf), grad(ba, xf - 1.0, yf), u);
        let top = lerp(grad(ab, xf, yf - 1.0), grad(bb, xf - 1.0, yf - 1.0), u);
        let n = lerp(bottom, top, v);
        ((n + 1.0) * 0.5).clamp(0.0, 1.0)
    }
}

#[inline]
fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[inline]
fn grad(hash: usize, x: f64, y: f64) -> f64 {
    match hash & 3 {
        0 => x + y,
        1 => -x + y,
        2 => x - y,
        _ => -x - y,
    }
}

/// Default open-cell threshold.
pub const DEFAULT_THRESHOLD: f64 = 0.35;

/// Default distance between samples, in noise units per cell.
pub const DEFAULT_SCALE: f64 = 0.1;

/// An `n × n` grid classified by thresholding [`Perlin`] noise.
#[derive(Clone, Debug)]
pub struct NoiseSource {
    dimension: i32,
    start: Point,
    end: Point,
    threshold: f64,
    scale: f64,
    seed: u64,
    noise: Perlin,
}

impl NoiseSource {
    /// Create a source for an `dimension × dimension` grid with the default
    /// threshold, scale and seed 0.
    pub fn new(dimension: i32, start: Point, end: Point) -> Self {
        Self {
            dimension,
            start,
            end,
            threshold: DEFAULT_THRESHOLD,
            scale: DEFAULT_SCALE,
            seed: 0,
            noise: Perlin::new(0),
        }
    }

    /// Cells whose sample is at least `threshold` are open (builder).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Noise units per cell (builder).
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Reseed the noise field (builder).
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.noise = Perlin::new(seed);
        self
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn classify(&self, p: Point) -> CellKind {
        let sample = self
            .noise
            .sample(f64::from(p.x) * self.scale, f64::from(p.y) * self.scale);
        if sample >= self.threshold {
            CellKind::Open
        } else {
            CellKind::Closed
        }
    }
}

impl GridSource for NoiseSource {
    fn build(&self) -> Result<Grid, IngestionError> {
        if self.dimension <= 0 {
            return Err(IngestionError::InvalidDimension(self.dimension));
        }
        if !self.threshold.is_finite() {
            return Err(IngestionError::InvalidThreshold(self.threshold));
        }
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(IngestionError::InvalidScale(self.scale));
        }

        let mut grid = Grid::square(self.dimension);
        grid.fill_fn(|p| self.classify(p));

        // Endpoints are only tagged on open ground; a wall stays a wall and
        // the search rejects it.
        for (kind, p) in [(CellKind::Start, self.start), (CellKind::End, self.end)] {
            match grid.at(p) {
                Some(CellKind::Closed) => warn!("noise grid: {kind} {p} landed on a wall"),
                Some(_) => grid.set(p, kind),
                None => warn!("noise grid: {kind} {p} is outside the grid"),
            }
        }

        info!(
            "noise grid {n}x{n}: {} open cells, seed {}, threshold {}",
            grid.len() - grid.count(CellKind::Closed),
            self.seed,
            self.threshold,
            n = self.dimension,
        );
        Ok(grid)
    }

    fn start_coordinate(&self) -> Point {
        self.start
    }

    fn end_coordinate(&self) -> Point {
        self.end
    }
}
