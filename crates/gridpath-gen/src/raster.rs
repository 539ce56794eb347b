//! Grids derived from raster images.
//!
//! Each pixel becomes the cell at the same `(x, y)`:
//!
//! | Pixel | Cell |
//! |---|---|
//! | red (r ≥ 128, g and b < 128) | [`CellKind::End`] |
//! | green (g ≥ 128, r and b < 128) | [`CellKind::Start`] |
//! | any other dark pixel (luma < 128) | [`CellKind::Closed`] |
//! | anything else | [`CellKind::Open`] |
//!
//! The image must contain exactly one start pixel and one end pixel.

use std::path::Path;

use gridpath_core::{CellKind, Grid, Point};
use image::DynamicImage;
use log::info;

use crate::source::{GridSource, IngestionError, locate_markers};

/// Classify a single RGB pixel.
pub fn classify_pixel([r, g, b]: [u8; 3]) -> CellKind {
    let bright = |c: u8| c >= 128;
    if bright(r) && !bright(g) && !bright(b) {
        return CellKind::End;
    }
    if bright(g) && !bright(r) && !bright(b) {
        return CellKind::Start;
    }
    let luma = (299 * u32::from(r) + 587 * u32::from(g) + 114 * u32::from(b)) / 1000;
    if luma < 128 {
        CellKind::Closed
    } else {
        CellKind::Open
    }
}

/// Grid dimensions for a `w × h` image.
fn grid_extent(w: u32, h: u32) -> Result<(i32, i32), IngestionError> {
    if w == 0 || h == 0 {
        return Err(IngestionError::EmptyImage);
    }
    match (i32::try_from(w), i32::try_from(h)) {
        (Ok(width), Ok(height)) => Ok((width, height)),
        _ => Err(IngestionError::ImageTooLarge {
            width: w,
            height: h,
        }),
    }
}

/// A grid decoded from an image, with the endpoints it marks.
#[derive(Clone, Debug)]
pub struct ImageSource {
    grid: Grid,
    start: Point,
    end: Point,
}

impl ImageSource {
    /// Read and decode an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IngestionError> {
        let path = path.as_ref();
        let img = image::open(path)
            .map_err(|e| IngestionError::Decode(format!("{}: {e}", path.display())))?;
        Self::from_image(&img)
    }

    /// Decode an image held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, IngestionError> {
        let img = image::load_from_memory(bytes).map_err(|e| IngestionError::Decode(e.to_string()))?;
        Self::from_image(&img)
    }

    /// Classify an already decoded image.
    pub fn from_image(img: &DynamicImage) -> Result<Self, IngestionError> {
        let rgb = img.to_rgb8();
        let (w, h) = rgb.dimensions();
        let (width, height) = grid_extent(w, h)?;

        let mut grid = Grid::new(width, height);
        // Both walk rows top to bottom, left to right.
        for (p, px) in grid.bounds().iter().zip(rgb.pixels()) {
            grid.set(p, classify_pixel(px.0));
        }
        let (start, end) = locate_markers(&grid)?;

        info!(
            "image grid {w}x{h}: {} closed cells, start {start}, end {end}",
            grid.count(CellKind::Closed)
        );
        Ok(Self { grid, start, end })
    }
}

impl GridSource for ImageSource {
    fn build(&self) -> Result<Grid, IngestionError> {
        Ok(self.grid.clone())
    }

    fn start_coordinate(&self) -> Point {
        self.start
    }

    fn end_coordinate(&self) -> Point {
        self.end
    }
}
