use std::fmt;

use tilepath_core::{Point, Range};

use crate::config::MAX_COST_SCALE;
use crate::traits::SearchGrid;

/// Errors that abort a path query.
///
/// An unreachable target is not an error: the query returns an empty path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A point inside the grid bounds has no backing cell.
    MissingCell { pos: Point },
    /// A start, target or expanded point lies outside the grid bounds.
    OutOfBounds { pos: Point, bounds: Range },
    /// Following parent links from `pos` did not end within the cell count.
    CorruptParentChain { pos: Point },
    /// The configured cost scale is not in `1..=MAX_COST_SCALE`.
    InvalidScale(i32),
    /// The tentative distance of `pos` does not fit in an `i32`.
    CostOverflow { pos: Point },
}

impl PathError {
    /// Whether the error points at a broken grid rather than a bad request.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::MissingCell { .. } | Self::CorruptParentChain { .. })
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingCell { pos } => write!(f, "no cell at {pos} inside the grid bounds"),
            Self::OutOfBounds { pos, bounds } => write!(f, "{pos} is outside the grid {bounds}"),
            Self::CorruptParentChain { pos } => {
                write!(f, "parent chain starting at {pos} does not terminate")
            }
            Self::InvalidScale(s) => {
                write!(f, "cost scale must be in 1..={MAX_COST_SCALE}, got {s}")
            }
            Self::CostOverflow { pos } => write!(f, "distance to {pos} overflows"),
        }
    }
}

impl std::error::Error for PathError {}

/// Look up a cell for reading, distinguishing out-of-bounds from missing.
pub(crate) fn cell_at<G: SearchGrid>(grid: &G, p: Point) -> Result<&G::Cell, PathError> {
    let bounds = grid.bounds();
    if !bounds.contains(p) {
        return Err(PathError::OutOfBounds { pos: p, bounds });
    }
    grid.cell(p).ok_or_else(|| missing(p))
}

/// Mutable counterpart of [`cell_at`].
pub(crate) fn cell_at_mut<G: SearchGrid>(grid: &mut G, p: Point) -> Result<&mut G::Cell, PathError> {
    let bounds = grid.bounds();
    if !bounds.contains(p) {
        return Err(PathError::OutOfBounds { pos: p, bounds });
    }
    grid.cell_mut(p).ok_or_else(|| missing(p))
}

pub(crate) fn missing(p: Point) -> PathError {
    log::error!("grid has no cell at {p}");
    PathError::MissingCell { pos: p }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let e = PathError::MissingCell {
            pos: Point::new(2, 3),
        };
        assert_eq!(e.to_string(), "no cell at (2, 3) inside the grid bounds");
        let e = PathError::OutOfBounds {
            pos: Point::new(9, 0),
            bounds: Range::new(0, 0, 5, 5),
        };
        assert_eq!(e.to_string(), "(9, 0) is outside the grid [(0, 0)-(5, 5))");
    }

    #[test]
    fn configuration_kinds() {
        assert!(PathError::MissingCell { pos: Point::ZERO }.is_configuration());
        assert!(PathError::CorruptParentChain { pos: Point::ZERO }.is_configuration());
        assert!(!PathError::InvalidScale(0).is_configuration());
        assert!(!PathError::CostOverflow { pos: Point::ZERO }.is_configuration());
    }
}
