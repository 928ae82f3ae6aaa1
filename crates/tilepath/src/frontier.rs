//! Next-cell selection for the path driver.
//!
//! A cell is a *candidate* when it is traversable, not yet visited and has a
//! positive tentative distance. Both strategies return the candidate with
//! the smallest distance; ties go to the smallest `x`, then the smallest `y`,
//! which is the first one met by a column-major scan.

use std::collections::BinaryHeap;

use tilepath_core::Point;

use crate::error::{PathError, cell_at, missing};
use crate::traits::{SearchCell, SearchGrid};

/// Whether `cell` may be expanded next.
#[inline]
pub fn is_candidate<C: SearchCell>(cell: &C) -> bool {
    let s = cell.search();
    cell.is_traversable() && !s.visited && s.distance > 0
}

// ---------------------------------------------------------------------------
// ScanFrontier
// ---------------------------------------------------------------------------

/// Stateless strategy that scans the whole grid on every selection.
#[derive(Copy, Clone, Debug, Default)]
pub struct ScanFrontier;

impl ScanFrontier {
    /// Pick the best candidate, or `None` when there is none left.
    ///
    /// The scan keeps the first candidate found and replaces it only with a
    /// strictly closer one. A missing cell aborts the scan.
    pub fn select_next<G: SearchGrid>(&self, grid: &G) -> Result<Option<Point>, PathError> {
        let mut best: Option<(Point, i32)> = None;
        for p in grid.bounds().columns_iter() {
            let cell = grid.cell(p).ok_or_else(|| missing(p))?;
            if !is_candidate(cell) {
                continue;
            }
            let d = cell.search().distance;
            match best {
                Some((_, bd)) if bd <= d => {}
                _ => best = Some((p, d)),
            }
        }
        Ok(best.map(|(p, _)| p))
    }
}

// ---------------------------------------------------------------------------
// HeapFrontier
// ---------------------------------------------------------------------------

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Entry {
    distance: i32,
    pos: Point,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the max-heap pops the smallest (distance, x, y).
        other
            .distance
            .cmp(&self.distance)
            .then(other.pos.x.cmp(&self.pos.x))
            .then(other.pos.y.cmp(&self.pos.y))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Priority-queue strategy fed by relaxation.
///
/// Every distance improvement is pushed with [`push`](Self::push). Entries
/// are never updated in place; outdated ones are dropped when popped.
#[derive(Clone, Debug, Default)]
pub struct HeapFrontier {
    open: BinaryHeap<Entry>,
}

impl HeapFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `pos` now has tentative distance `distance`.
    #[inline]
    pub fn push(&mut self, pos: Point, distance: i32) {
        self.open.push(Entry { distance, pos });
    }

    /// Drop all entries, keeping the allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.open.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Pop entries until one still describes a candidate at its current
    /// distance.
    pub fn select_next<G: SearchGrid>(&mut self, grid: &G) -> Result<Option<Point>, PathError> {
        while let Some(e) = self.open.pop() {
            let cell = cell_at(grid, e.pos)?;
            if is_candidate(cell) && cell.search().distance == e.distance {
                return Ok(Some(e.pos));
            }
        }
        Ok(None)
    }
}
