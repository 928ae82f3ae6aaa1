use tilepath_core::Point;

use crate::config::{FrontierKind, PathConfig};
use crate::error::{PathError, cell_at, cell_at_mut};
use crate::frontier::{HeapFrontier, ScanFrontier};
use crate::relax::relax_neighbors;
use crate::state;
use crate::traits::{SearchCell, SearchGrid};

/// Dijkstra path driver.
///
/// A `Pathfinder` holds its settings and the heap frontier's buffer so that
/// repeated queries reuse the allocation. The grid itself is borrowed
/// mutably for the whole query, which keeps queries on the same grid
/// serialised.
#[derive(Clone, Debug)]
pub struct Pathfinder {
    config: PathConfig,
    heap: HeapFrontier,
    expanded: usize,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self {
            config: PathConfig::default(),
            heap: HeapFrontier::new(),
            expanded: 0,
        }
    }
}

impl Pathfinder {
    /// Create a pathfinder, rejecting invalid settings.
    pub fn new(config: PathConfig) -> Result<Self, PathError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    #[inline]
    pub fn config(&self) -> PathConfig {
        self.config
    }

    /// Number of cells expanded by the last query.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Find a cheapest path from `start` to `target`.
    ///
    /// The result runs from `target` back towards `start`: it begins with
    /// the target's position and ends with the cell one step from the
    /// start, which itself is not included. It is empty when the target is
    /// unreachable and also when `start == target`.
    ///
    /// Relaxation gives blocked cells a distance and a parent, so a blocked
    /// target next to the explored region still yields a path ending on it.
    /// Every other cell of a path is traversable; callers that must not
    /// step onto a blocked target check it themselves.
    ///
    /// The grid must have a clean search state on entry. It is reset before
    /// returning, on error paths too; if the search failed, its error is
    /// returned even when the reset also hit a missing cell.
    pub fn find_path<G: SearchGrid>(
        &mut self,
        grid: &mut G,
        start: Point,
        target: Point,
    ) -> Result<Vec<Point>, PathError> {
        log::debug!(
            "path query {start} -> {target} on {} ({:?} frontier)",
            grid.bounds(),
            self.config.frontier
        );
        let searched = self.search(grid, start, target);
        self.heap.clear();
        let reset = state::reset(grid);

        let path = searched?;
        reset?;
        log::debug!(
            "path query {start} -> {target}: {} steps, {} cells expanded",
            path.len(),
            self.expanded
        );
        Ok(path)
    }

    fn search<G: SearchGrid>(
        &mut self,
        grid: &mut G,
        start: Point,
        target: Point,
    ) -> Result<Vec<Point>, PathError> {
        self.config.validate()?;
        self.expanded = 0;
        self.heap.clear();
        cell_at(&*grid, target)?;
        cell_at_mut(grid, start)?.search_mut().distance = 0;

        let scale = self.config.cost_scale;
        let mut current = start;
        loop {
            self.expanded += 1;
            log::trace!("expanding {current}");
            let next = match self.config.frontier {
                FrontierKind::Scan => {
                    relax_neighbors(grid, current, scale, |_, _| {})?;
                    ScanFrontier.select_next(&*grid)?
                }
                FrontierKind::Heap => {
                    let heap = &mut self.heap;
                    relax_neighbors(grid, current, scale, |p, d| heap.push(p, d))?;
                    heap.select_next(&*grid)?
                }
            };
            match next {
                Some(p) => current = p,
                None => break,
            }
        }

        trace_back(&*grid, target)
    }
}

/// Collect positions along the parent links from `target`.
///
/// Stops at the first cell without a parent, which is not included. A walk
/// longer than the grid's cell count means the links form a cycle.
pub fn trace_back<G: SearchGrid>(grid: &G, target: Point) -> Result<Vec<Point>, PathError> {
    let limit = grid.bounds().len();
    let mut path = Vec::new();
    let mut cell = cell_at(grid, target)?;
    while let Some(parent) = cell.search().parent {
        if path.len() >= limit {
            return Err(PathError::CorruptParentChain { pos: target });
        }
        path.push(cell.position());
        cell = cell_at(grid, parent)?;
    }
    Ok(path)
}
