//! Grid sources for gridpath: procedural noise, images and text maps.
//!
//! Every source implements [`GridSource`], producing a classified
//! [`Grid`](gridpath_core::Grid) and the start and end coordinates of the
//! route to search.

pub mod ascii;
pub mod noise;
pub mod raster;
pub mod source;

pub use ascii::AsciiSource;
pub use noise::{DEFAULT_SCALE, DEFAULT_THRESHOLD, NoiseSource, Perlin};
pub use raster::{ImageSource, classify_pixel};
pub use source::{GridSource, IngestionError, locate_markers};
