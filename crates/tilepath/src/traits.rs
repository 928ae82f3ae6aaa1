use tilepath_core::{Point, Range, SearchState, Tile, TileMap};

/// A grid square as the search sees it.
pub trait SearchCell {
    /// Position reported in returned paths.
    fn position(&self) -> Point;

    /// Whether the square can be stepped on.
    fn is_traversable(&self) -> bool;

    fn search(&self) -> &SearchState;

    fn search_mut(&mut self) -> &mut SearchState;
}

/// Bounded grid the pathfinder reads and annotates.
///
/// `cell` returning `None` for a point inside [`bounds`](Self::bounds) means
/// the grid is broken at that point; the search reports it as an error.
pub trait SearchGrid {
    type Cell: SearchCell;

    /// Half-open rectangle covered by the grid.
    fn bounds(&self) -> Range;

    fn cell(&self, p: Point) -> Option<&Self::Cell>;

    fn cell_mut(&mut self, p: Point) -> Option<&mut Self::Cell>;
}

impl SearchCell for Tile {
    #[inline]
    fn position(&self) -> Point {
        self.pos
    }

    #[inline]
    fn is_traversable(&self) -> bool {
        self.traversable
    }

    #[inline]
    fn search(&self) -> &SearchState {
        &self.search
    }

    #[inline]
    fn search_mut(&mut self) -> &mut SearchState {
        &mut self.search
    }
}

impl SearchGrid for TileMap {
    type Cell = Tile;

    #[inline]
    fn bounds(&self) -> Range {
        TileMap::bounds(self)
    }

    #[inline]
    fn cell(&self, p: Point) -> Option<&Tile> {
        self.tile(p)
    }

    #[inline]
    fn cell_mut(&mut self, p: Point) -> Option<&mut Tile> {
        self.tile_mut(p)
    }
}
