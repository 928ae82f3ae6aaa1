//! **tilepath-core**: grid types shared by the tilepath crates.
//!
//! This crate provides geometry primitives, the [`Tile`] with its per-query
//! [`SearchState`] overlay, and [`TileMap`], a bounded grid of tiles that may
//! contain holes and can be built from ASCII art.

pub mod geom;
pub mod tile;
pub mod tilemap;

pub use geom::{ColumnIter, Point, Range, RangeIter};
pub use tile::{SearchState, Tile, UNREACHED};
pub use tilemap::{TileMap, TileMapError};
