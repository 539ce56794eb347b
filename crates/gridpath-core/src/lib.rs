//! **gridpath-core**: core types for grid path search.
//!
//! This crate provides the foundational types shared across the *gridpath*
//! workspace: geometry primitives, cell classifications, and the owned
//! [`Grid`] that sources build and searches read.

pub mod cell;
pub mod geom;
pub mod grid;
pub mod text;

pub use cell::CellKind;
pub use geom::{Point, Range};
pub use grid::Grid;
pub use text::GridParseError;
