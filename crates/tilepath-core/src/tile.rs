//! The [`Tile`] type and the per-tile [`SearchState`] overlay.

use crate::geom::Point;

/// Distance sentinel for a tile no search has reached yet.
pub const UNREACHED: i32 = -1;

/// Mutable search bookkeeping carried by every tile.
///
/// `parent` is a coordinate into the same grid, never an owning link, so a
/// finished query leaves nothing alive once [`reset`](Self::reset) runs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchState {
    pub visited: bool,
    pub distance: i32,
    pub parent: Option<Point>,
}

impl SearchState {
    /// The neutral state every query expects on entry.
    pub const INITIAL: Self = Self {
        visited: false,
        distance: UNREACHED,
        parent: None,
    };

    /// Restore the neutral state.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }

    /// Whether some relaxation has assigned a distance.
    #[inline]
    pub fn is_reached(&self) -> bool {
        self.distance != UNREACHED
    }

    #[inline]
    pub fn is_initial(&self) -> bool {
        *self == Self::INITIAL
    }
}

impl Default for SearchState {
    #[inline]
    fn default() -> Self {
        Self::INITIAL
    }
}

/// One grid square: identity, traversability and search metadata.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub pos: Point,
    pub traversable: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub search: SearchState,
}

impl Tile {
    /// An open tile at `pos`.
    #[inline]
    pub const fn open(pos: Point) -> Self {
        Self {
            pos,
            traversable: true,
            search: SearchState::INITIAL,
        }
    }

    /// A blocked tile at `pos`.
    #[inline]
    pub const fn blocked(pos: Point) -> Self {
        Self {
            pos,
            traversable: false,
            search: SearchState::INITIAL,
        }
    }

    /// Set traversability (builder).
    #[inline]
    pub const fn with_traversable(mut self, traversable: bool) -> Self {
        self.traversable = traversable;
        self
    }
}
