use crate::error::{PathError, missing};
use crate::traits::{SearchCell, SearchGrid};

/// Return every cell inside the grid bounds to its neutral search state.
///
/// Each point is visited exactly once. A missing cell does not stop the
/// pass: all present cells are still reset, and the first missing point is
/// reported afterwards.
pub fn reset<G: SearchGrid>(grid: &mut G) -> Result<(), PathError> {
    let mut first_missing = None;
    for p in grid.bounds().columns_iter() {
        match grid.cell_mut(p) {
            Some(cell) => cell.search_mut().reset(),
            None => {
                if first_missing.is_none() {
                    first_missing = Some(p);
                }
            }
        }
    }
    match first_missing {
        Some(p) => Err(missing(p)),
        None => Ok(()),
    }
}

/// Whether every present cell is in its neutral search state.
pub fn is_clean<G: SearchGrid>(grid: &G) -> bool {
    grid.bounds()
        .iter()
        .filter_map(|p| grid.cell(p))
        .all(|c| c.search().is_initial())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::{Point, Range, TileMap};

    fn dirty(m: &mut TileMap) {
        for p in m.bounds() {
            if let Some(t) = m.tile_mut(p) {
                t.search.visited = true;
                t.search.distance = 7;
                t.search.parent = Some(Point::ZERO);
            }
        }
    }

    #[test]
    fn reset_restores_all_cells() {
        let mut m = TileMap::new(Range::new(0, 0, 4, 3));
        dirty(&mut m);
        assert!(!is_clean(&m));
        reset(&mut m).unwrap();
        assert!(is_clean(&m));
    }

    #[test]
    fn reset_reports_hole_but_finishes() {
        let mut m = TileMap::from_ascii(Point::ZERO, "...\n?..\n..?").unwrap();
        dirty(&mut m);
        let err = reset(&mut m).unwrap_err();
        assert_eq!(
            err,
            PathError::MissingCell {
                pos: Point::new(0, 1)
            }
        );
        assert!(is_clean(&m));
    }
}
