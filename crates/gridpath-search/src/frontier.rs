//! The open and closed sets of a search.
//!
//! Both are keyed by coordinate, so membership never depends on which node
//! value happens to represent a cell.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Point;
use rustc_hash::{FxHashMap, FxHashSet};

/// Which frontier member is extracted when several share the minimum `f`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TieBreak {
    /// The member inserted most recently wins. This is the order a linear
    /// "keep the last minimum" scan over an insertion-ordered list produces.
    #[default]
    LastInserted,
    /// The member inserted earliest wins (FIFO among ties).
    FirstInserted,
}

/// Heap entry ordered by `f`, then by insertion rank per the tie-break.
#[derive(Copy, Clone, Debug)]
struct Entry {
    pos: Point,
    f: f64,
    rank: u64,
    // Larger key pops first among equal `f`.
    key: i64,
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse on f so BinaryHeap (max-heap) pops smallest f first.
        other.f.total_cmp(&self.f).then(self.key.cmp(&other.key))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The "open" set: discovered cells waiting to be expanded.
///
/// A binary heap with lazy deletion. Lowering a member's `f` pushes a new
/// entry that keeps the member's original insertion rank; superseded
/// entries are skipped when they surface.
#[derive(Debug)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    // Current f and insertion rank of every member.
    members: FxHashMap<Point, (f64, u64)>,
    next_rank: u64,
    tie_break: TieBreak,
}

impl Default for Frontier {
    fn default() -> Self {
        Self::new(TieBreak::default())
    }
}

impl Frontier {
    pub fn new(tie_break: TieBreak) -> Self {
        Self {
            heap: BinaryHeap::new(),
            members: FxHashMap::default(),
            next_rank: 0,
            tie_break,
        }
    }

    #[inline]
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.members.contains_key(&p)
    }

    /// Current `f` of a member.
    #[inline]
    pub fn priority(&self, p: Point) -> Option<f64> {
        self.members.get(&p).map(|&(f, _)| f)
    }

    /// Insert `p` with priority `f`, or re-prioritise it if already a
    /// member. A re-prioritised member keeps its insertion rank.
    pub fn push(&mut self, p: Point, f: f64) {
        let rank = match self.members.get_mut(&p) {
            Some(m) => {
                m.0 = f;
                m.1
            }
            None => {
                let rank = self.next_rank;
                self.next_rank += 1;
                self.members.insert(p, (f, rank));
                rank
            }
        };
        let key = match self.tie_break {
            TieBreak::LastInserted => rank as i64,
            TieBreak::FirstInserted => -(rank as i64),
        };
        self.heap.push(Entry { pos: p, f, rank, key });
    }

    /// Remove and return the member with the smallest `f`.
    pub fn pop(&mut self) -> Option<(Point, f64)> {
        while let Some(e) = self.heap.pop() {
            let current = self.members.get(&e.pos).copied();
            match current {
                Some((f, rank)) if rank == e.rank && f.to_bits() == e.f.to_bits() => {
                    self.members.remove(&e.pos);
                    return Some((e.pos, e.f));
                }
                // Superseded by a later push, or already extracted.
                _ => continue,
            }
        }
        None
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.members.clear();
        self.next_rank = 0;
    }
}

/// The "closed" set: cells whose cost is final.
#[derive(Debug, Default)]
pub struct VisitedSet {
    cells: FxHashSet<Point>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `p` as finalized. Returns `false` if it already was.
    #[inline]
    pub fn insert(&mut self, p: Point) -> bool {
        self.cells.insert(p)
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.cells.contains(&p)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: i32, y: i32) -> Point {
        Point::new(x, y)
    }

    #[test]
    fn pops_in_f_order() {
        let mut fr = Frontier::default();
        assert_eq!(fr.tie_break(), TieBreak::LastInserted);
        fr.push(p(0, 0), 3.0);
        fr.push(p(1, 0), 1.0);
        fr.push(p(2, 0), 2.0);
        assert_eq!(fr.len(), 3);
        assert_eq!(fr.pop(), Some((p(1, 0), 1.0)));
        assert_eq!(fr.pop(), Some((p(2, 0), 2.0)));
        assert_eq!(fr.pop(), Some((p(0, 0), 3.0)));
        assert_eq!(fr.pop(), None);
        assert!(fr.is_empty());
    }

    #[test]
    fn last_inserted_wins_ties() {
        let mut fr = Frontier::new(TieBreak::LastInserted);
        fr.push(p(0, 0), 2.0);
        fr.push(p(1, 0), 2.0);
        fr.push(p(2, 0), 2.0);
        fr.push(p(3, 0), 5.0);
        assert_eq!(fr.pop().map(|e| e.0), Some(p(2, 0)));
        assert_eq!(fr.pop().map(|e| e.0), Some(p(1, 0)));
        assert_eq!(fr.pop().map(|e| e.0), Some(p(0, 0)));
    }

    #[test]
    fn first_inserted_wins_ties() {
        let mut fr = Frontier::new(TieBreak::FirstInserted);
        assert_eq!(fr.tie_break(), TieBreak::FirstInserted);
        fr.push(p(0, 0), 2.0);
        fr.push(p(1, 0), 2.0);
        fr.push(p(2, 0), 2.0);
        assert_eq!(fr.pop().map(|e| e.0), Some(p(0, 0)));
        assert_eq!(fr.pop().map(|e| e.0), Some(p(1, 0)));
        assert_eq!(fr.pop().map(|e| e.0), Some(p(2, 0)));
    }

    #[test]
    fn reprioritised_member_keeps_rank() {
        let mut fr = Frontier::new(TieBreak::LastInserted);
        fr.push(p(0, 0), 4.0);
        fr.push(p(1, 0), 1.0);
        // Lowering (0, 0) to tie with (1, 0) must not make it "newer".
        fr.push(p(0, 0), 1.0);
        assert_eq!(fr.len(), 2);
        assert_eq!(fr.priority(p(0, 0)), Some(1.0));
        assert_eq!(fr.pop(), Some((p(1, 0), 1.0)));
        assert_eq!(fr.pop(), Some((p(0, 0), 1.0)));
        // The stale 4.0 entry is discarded.
        assert_eq!(fr.pop(), None);
    }

    #[test]
    fn membership_is_by_coordinate() {
        let mut fr = Frontier::default();
        fr.push(Point::new(3, 4), 1.0);
        assert!(fr.contains(Point::new(2, 4).shift(1, 0)));
        fr.pop();
        assert!(!fr.contains(Point::new(3, 4)));
    }

    #[test]
    fn clear_resets() {
        let mut fr = Frontier::default();
        fr.push(p(0, 0), 1.0);
        fr.clear();
        assert!(fr.is_empty());
        assert_eq!(fr.pop(), None);
    }

    #[test]
    fn visited_set_basics() {
        let mut vs = VisitedSet::new();
        assert!(vs.is_empty());
        assert!(vs.insert(p(1, 1)));
        assert!(!vs.insert(p(1, 1)));
        assert!(vs.contains(p(1, 1)));
        assert_eq!(vs.len(), 1);
        vs.clear();
        assert!(!vs.contains(p(1, 1)));
    }
}
