//! The [`CellKind`] type: the classification of a single grid cell.

use std::fmt;

/// Classification of a grid cell, fixed when the grid is built.
///
/// Only [`CellKind::Closed`] blocks movement; `Start` and `End` are open
/// cells that also carry the endpoint markers chosen by the grid source.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Open,
    Closed,
    Start,
    End,
}

impl CellKind {
    /// Whether a path may pass through a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The character used for this kind in ASCII maps.
    #[inline]
    pub const fn glyph(self) -> char {
        match self {
            Self::Open => '.',
            Self::Closed => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`glyph`](Self::glyph).
    #[inline]
    pub const fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Closed),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(name)
    }
}
