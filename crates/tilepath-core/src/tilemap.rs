//! A bounded map of [`Tile`]s that may contain holes.
//!
//! A [`TileMap`] covers a fixed half-open [`Range`]. Every slot either holds a
//! tile or is missing; a missing slot is a broken map, which is different
//! from a blocked tile. Maps can be written as ASCII art:
//!
//! - `.` open tile
//! - `#` blocked tile
//! - `?` missing slot

use std::fmt;

use crate::geom::{Point, Range};
use crate::tile::Tile;

/// A bounded, row-major map of optional tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileMap {
    bounds: Range,
    tiles: Vec<Option<Tile>>,
}

impl TileMap {
    /// A map over `bounds` with every tile open.
    pub fn new(bounds: Range) -> Self {
        let tiles = bounds.iter().map(|p| Some(Tile::open(p))).collect();
        Self { bounds, tiles }
    }

    /// Parse ASCII art whose top-left character sits at `origin`.
    ///
    /// Leading and trailing blank lines are ignored. Every remaining line
    /// must have the same width.
    pub fn from_ascii(origin: Point, text: &str) -> Result<Self, TileMapError> {
        let lines: Vec<&str> = text.trim_matches('\n').lines().collect();
        let width = match lines.first() {
            Some(first) if !first.is_empty() => first.chars().count(),
            _ => return Err(TileMapError::Empty),
        };
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(TileMapError::InconsistentWidth {
                    line: i,
                    expected: width,
                    found,
                });
            }
        }

        let bounds = Range::with_size(origin, width as i32, lines.len() as i32);
        let mut tiles = Vec::with_capacity(bounds.len());
        for (y, line) in lines.iter().enumerate() {
            for (x, ch) in line.chars().enumerate() {
                let pos = origin.shift(x as i32, y as i32);
                let tile = match ch {
                    '.' => Some(Tile::open(pos)),
                    '#' => Some(Tile::blocked(pos)),
                    '?' => None,
                    _ => return Err(TileMapError::InvalidGlyph { ch, pos }),
                };
                tiles.push(tile);
            }
        }
        Ok(Self { bounds, tiles })
    }

    /// The covered rectangle.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The tile at `p`, or `None` if `p` is outside or the slot is missing.
    #[inline]
    pub fn tile(&self, p: Point) -> Option<&Tile> {
        let i = self.bounds.index_of(p)?;
        self.tiles[i].as_ref()
    }

    #[inline]
    pub fn tile_mut(&mut self, p: Point) -> Option<&mut Tile> {
        let i = self.bounds.index_of(p)?;
        self.tiles[i].as_mut()
    }

    /// Mark the tile at `p` blocked or open. Returns `false` if there is no
    /// tile there.
    pub fn set_traversable(&mut self, p: Point, traversable: bool) -> bool {
        match self.tile_mut(p) {
            Some(t) => {
                t.traversable = traversable;
                true
            }
            None => false,
        }
    }

    /// Remove the tile at `p`, leaving a hole. Returns the removed tile.
    pub fn remove(&mut self, p: Point) -> Option<Tile> {
        let i = self.bounds.index_of(p)?;
        self.tiles[i].take()
    }

    /// Iterate over the present tiles in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().flatten()
    }
}

/// Errors that can occur when parsing a [`TileMap`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileMapError {
    /// No rows, or a first row of width zero.
    Empty,
    /// A row has a different width from the first one.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside `.#?`.
    InvalidGlyph { ch: char, pos: Point },
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "tile map: no rows"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "tile map: line {line} has width {found}, expected {expected}"
            ),
            Self::InvalidGlyph { ch, pos } => {
                write!(f, "tile map: invalid glyph '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for TileMapError {}
