use crate::error::PathError;

/// Step cost multiplier giving 10 for orthogonal and 14 for diagonal steps.
pub const DEFAULT_COST_SCALE: i32 = 10;

/// Largest accepted cost scale. A diagonal step then costs 1_414_213, so a
/// single step never saturates; long paths can still exceed `i32::MAX` and
/// fail with [`PathError::CostOverflow`].
pub const MAX_COST_SCALE: i32 = 1_000_000;

/// How the driver picks the next cell to expand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FrontierKind {
    /// Full column-major scan of the grid per expansion. O(V²).
    #[default]
    Scan,
    /// Binary heap keyed on (distance, x, y). Picks the same cells as `Scan`.
    Heap,
}

/// Pathfinder settings.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PathConfig {
    pub frontier: FrontierKind,
    pub cost_scale: i32,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            frontier: FrontierKind::Scan,
            cost_scale: DEFAULT_COST_SCALE,
        }
    }
}

impl PathConfig {
    /// Set the frontier strategy (builder).
    #[inline]
    pub const fn with_frontier(mut self, frontier: FrontierKind) -> Self {
        self.frontier = frontier;
        self
    }

    /// Set the step cost scale (builder).
    #[inline]
    pub const fn with_cost_scale(mut self, cost_scale: i32) -> Self {
        self.cost_scale = cost_scale;
        self
    }

    /// Reject settings the search cannot run with.
    pub fn validate(&self) -> Result<(), PathError> {
        if !(1..=MAX_COST_SCALE).contains(&self.cost_scale) {
            return Err(PathError::InvalidScale(self.cost_scale));
        }
        Ok(())
    }
}
