use tilepath_core::Point;

/// Cost of a single step by `(dx, dy)`: the Euclidean length times `scale`,
/// truncated toward zero. At scale 10 that is 10 orthogonally and 14
/// diagonally.
#[inline]
pub fn step_cost(dx: i32, dy: i32, scale: i32) -> i32 {
    let len = f64::from(dx * dx + dy * dy).sqrt();
    (len * f64::from(scale)) as i32
}

/// Sum of step costs along `path`, in either direction.
///
/// Returns `None` if two consecutive positions are not neighbours.
pub fn path_cost(path: &[Point], scale: i32) -> Option<i32> {
    path.windows(2).try_fold(0, |acc, w| {
        if !w[0].is_adjacent(w[1]) {
            return None;
        }
        let d = w[1] - w[0];
        Some(acc + step_cost(d.x, d.y, scale))
    })
}
