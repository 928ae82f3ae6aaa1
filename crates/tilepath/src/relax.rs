use tilepath_core::Point;

use crate::cost::step_cost;
use crate::error::{PathError, cell_at, cell_at_mut, missing};
use crate::traits::{SearchCell, SearchGrid};

/// Relax the eight neighbours of `current`, then mark it visited.
///
/// A neighbour takes `current` as parent when it is unvisited and either
/// unreached or reachable more cheaply through `current`. Traversability is
/// not checked here: blocked neighbours may receive a tentative distance,
/// and frontier selection never picks them. `on_improve` is called with the
/// new distance of every neighbour that was updated.
///
/// Relaxing from a cell that has no distance yet proposes nothing. A
/// tentative distance that does not fit in an `i32` aborts with
/// [`PathError::CostOverflow`].
pub fn relax_neighbors<G, F>(
    grid: &mut G,
    current: Point,
    scale: i32,
    mut on_improve: F,
) -> Result<(), PathError>
where
    G: SearchGrid,
    F: FnMut(Point, i32),
{
    let bounds = grid.bounds();
    let origin = *cell_at(&*grid, current)?.search();

    if origin.is_reached() {
        let base = origin.distance;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let np = current.shift(dx, dy);
                if !bounds.contains(np) {
                    continue;
                }
                let cell = grid.cell_mut(np).ok_or_else(|| missing(np))?;
                let s = cell.search_mut();
                if s.visited {
                    continue;
                }
                let d = base
                    .checked_add(step_cost(dx, dy, scale))
                    .ok_or(PathError::CostOverflow { pos: np })?;
                if !s.is_reached() || d < s.distance {
                    s.distance = d;
                    s.parent = Some(current);
                    on_improve(np, d);
                }
            }
        }
    }

    cell_at_mut(grid, current)?.search_mut().visited = true;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepath_core::{Range, TileMap};

    fn seeded(m: &mut TileMap, p: Point, distance: i32) {
        m.tile_mut(p).unwrap().search.distance = distance;
    }

    #[test]
    fn relax_center_of_open_grid() {
        let mut m = TileMap::new(Range::new(0, 0, 3, 3));
        let c = Point::new(1, 1);
        seeded(&mut m, c, 0);
        let mut improved = Vec::new();
        relax_neighbors(&mut m, c, 10, |p, d| improved.push((p, d))).unwrap();

        assert_eq!(improved.len(), 8);
        for n in c.neighbors_8() {
            let s = m.tile(n).unwrap().search;
            let diagonal = n.x != c.x && n.y != c.y;
            assert_eq!(s.distance, if diagonal { 14 } else { 10 });
            assert_eq!(s.parent, Some(c));
            assert!(!s.visited);
        }
        assert!(m.tile(c).unwrap().search.visited);
        // dy outer, dx inner
        assert_eq!(improved[0], (Point::new(0, 0), 14));
        assert_eq!(improved[1], (Point::new(1, 0), 10));
    }

    #[test]
    fn corner_skips_out_of_bounds() {
        let mut m = TileMap::new(Range::new(0, 0, 3, 3));
        seeded(&mut m, Point::ZERO, 0);
        let mut count = 0;
        relax_neighbors(&mut m, Point::ZERO, 10, |_, _| count += 1).unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn only_strict_improvements_update() {
        let mut m = TileMap::new(Range::new(0, 0, 3, 1));
        let right = Point::new(2, 0);
        seeded(&mut m, Point::new(1, 0), 5);
        {
            let s = &mut m.tile_mut(right).unwrap().search;
            s.distance = 15;
            s.parent = Some(Point::new(9, 9));
        }
        relax_neighbors(&mut m, Point::new(1, 0), 10, |_, _| {}).unwrap();
        let s = m.tile(right).unwrap().search;
        assert_eq!(s.distance, 15);
        assert_eq!(s.parent, Some(Point::new(9, 9)));
    }

    #[test]
    fn visited_neighbors_are_final() {
        let mut m = TileMap::new(Range::new(0, 0, 2, 1));
        let left = Point::new(0, 0);
        let right = Point::new(1, 0);
        {
            let s = &mut m.tile_mut(left).unwrap().search;
            s.distance = 100;
            s.visited = true;
        }
        seeded(&mut m, right, 0);
        relax_neighbors(&mut m, right, 10, |_, _| panic!("no update expected")).unwrap();
        assert_eq!(m.tile(left).unwrap().search.distance, 100);
        assert_eq!(m.tile(left).unwrap().search.parent, None);
    }

    #[test]
    fn blocked_neighbors_still_get_distances() {
        let mut m = TileMap::from_ascii(Point::ZERO, ".#").unwrap();
        seeded(&mut m, Point::ZERO, 0);
        relax_neighbors(&mut m, Point::ZERO, 10, |_, _| {}).unwrap();
        let s = m.tile(Point::new(1, 0)).unwrap().search;
        assert_eq!(s.distance, 10);
        assert_eq!(s.parent, Some(Point::ZERO));
    }

    #[test]
    fn unreached_current_only_marks_visited() {
        let mut m = TileMap::new(Range::new(0, 0, 2, 2));
        relax_neighbors(&mut m, Point::ZERO, 10, |_, _| panic!("no update expected")).unwrap();
        assert!(m.tile(Point::ZERO).unwrap().search.visited);
        assert!(m.tile(Point::new(1, 1)).unwrap().search.is_initial());
    }

    #[test]
    fn missing_neighbor_is_an_error() {
        let mut m = TileMap::from_ascii(Point::ZERO, "..\n.?").unwrap();
        seeded(&mut m, Point::ZERO, 0);
        let err = relax_neighbors(&mut m, Point::ZERO, 10, |_, _| {}).unwrap_err();
        assert_eq!(
            err,
            PathError::MissingCell {
                pos: Point::new(1, 1)
            }
        );
    }

    #[test]
    fn overflowing_distance_is_an_error() {
        let mut m = TileMap::new(Range::new(0, 0, 2, 1));
        seeded(&mut m, Point::ZERO, i32::MAX - 5);
        let err = relax_neighbors(&mut m, Point::ZERO, 10, |_, _| {}).unwrap_err();
        assert_eq!(
            err,
            PathError::CostOverflow {
                pos: Point::new(1, 0)
            }
        );
    }

    #[test]
    fn out_of_bounds_current_is_an_error() {
        let mut m = TileMap::new(Range::new(0, 0, 2, 2));
        let err = relax_neighbors(&mut m, Point::new(5, 5), 10, |_, _| {}).unwrap_err();
        assert!(matches!(err, PathError::OutOfBounds { .. }));
    }
}
