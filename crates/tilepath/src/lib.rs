//! Shortest paths on bounded tile grids.
//!
//! The search is plain Dijkstra over the 8-connected neighbourhood. An
//! orthogonal step costs 10 and a diagonal step 14 (the Euclidean step length
//! times [`PathConfig::cost_scale`], truncated). Search bookkeeping lives on
//! the grid cells themselves through [`SearchCell::search_mut`] and is reset
//! before every query returns.
//!
//! - [`Pathfinder::find_path`] runs a full query and returns the path from
//!   the target back towards the start.
//! - [`relax_neighbors`], [`ScanFrontier`], [`HeapFrontier`], [`trace_back`]
//!   and [`reset`] are the individual steps, usable by other drivers.
//!
//! ```
//! use tilepath::Pathfinder;
//! use tilepath_core::{Point, TileMap};
//!
//! let mut map = TileMap::from_ascii(Point::ZERO, "...\n.#.\n...").unwrap();
//! let path = Pathfinder::default()
//!     .find_path(&mut map, Point::new(0, 0), Point::new(2, 2))
//!     .unwrap();
//! assert_eq!(path.first(), Some(&Point::new(2, 2)));
//! assert_eq!(path.len(), 3);
//! ```

mod config;
mod cost;
mod error;
mod frontier;
mod pathfinder;
mod relax;
mod state;
mod traits;

pub use config::{DEFAULT_COST_SCALE, FrontierKind, MAX_COST_SCALE, PathConfig};
pub use cost::{path_cost, step_cost};
pub use error::PathError;
pub use frontier::{HeapFrontier, ScanFrontier, is_candidate};
pub use pathfinder::{Pathfinder, trace_back};
pub use relax::relax_neighbors;
pub use state::{is_clean, reset};
pub use traits::{SearchCell, SearchGrid};
