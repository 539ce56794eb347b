//! Coordinates and rectangular extents.
//!
//! [`Range`] owns the mapping between coordinates and row-major flat
//! indices, so grids, search arenas and cost maps all agree on where a
//! cell lives in a `Vec`.

use std::fmt;
use std::ops::{Add, Sub};

/// A cell coordinate. `x` grows to the right, `y` grows downwards.
///
/// Equality and hashing are by value: two points naming the same cell are
/// the same key in any set or map.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Self = Self::new(0, 0);

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point `dx` columns and `dy` rows away.
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Whether `other` is one of the eight cells touching `self`.
    pub fn is_adjacent(self, other: Point) -> bool {
        let d = other - self;
        d != Self::ZERO && d.x.abs() <= 1 && d.y.abs() <= 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.shift(rhs.x, rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.shift(-rhs.x, -rhs.y)
    }
}

/// The cells `min.x..max.x` by `min.y..max.y`.
///
/// A range whose `max` lies before its `min` on either axis is empty.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    pub min: Point,
    pub max: Point,
}

impl Range {
    /// Columns `x0..x1`, rows `y0..y1`. Reversed bounds give an empty
    /// range anchored at `(x0, y0)`.
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0, y0),
            max: Point::new(x1.max(x0), y1.max(y0)),
        }
    }

    #[inline]
    pub fn width(self) -> i32 {
        (self.max.x - self.min.x).max(0)
    }

    #[inline]
    pub fn height(self) -> i32 {
        (self.max.y - self.min.y).max(0)
    }

    /// `(width, height)` as a point.
    pub fn size(self) -> Point {
        Point::new(self.width(), self.height())
    }

    /// Number of cells.
    pub fn len(self) -> usize {
        self.width() as usize * self.height() as usize
    }

    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn contains(self, p: Point) -> bool {
        (self.min.x..self.max.x).contains(&p.x) && (self.min.y..self.max.y).contains(&p.y)
    }

    /// Row-major position of `p` among the range's cells.
    #[inline]
    pub fn index(self, p: Point) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let row = (p.y - self.min.y) as usize;
        let col = (p.x - self.min.x) as usize;
        Some(row * self.width() as usize + col)
    }

    /// The cell at row-major position `i`. Inverse of [`index`](Self::index)
    /// for `i < len()`.
    #[inline]
    pub fn point(self, i: usize) -> Point {
        let w = self.width().max(1) as usize;
        self.min.shift((i % w) as i32, (i / w) as i32)
    }

    /// Every cell, in [`index`](Self::index) order.
    pub fn iter(self) -> RangeIter {
        RangeIter {
            range: self,
            next: 0,
            end: self.len(),
        }
    }
}

impl IntoIterator for Range {
    type Item = Point;
    type IntoIter = RangeIter;

    fn into_iter(self) -> RangeIter {
        self.iter()
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Iterator returned by [`Range::iter`].
#[derive(Clone, Debug)]
pub struct RangeIter {
    range: Range,
    next: usize,
    end: usize,
}

impl Iterator for RangeIter {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.next == self.end {
            return None;
        }
        let p = self.range.point(self.next);
        self.next += 1;
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.end - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for RangeIter {}
