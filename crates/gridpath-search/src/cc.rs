//! Flood-fill reachability.

use gridpath_core::{Board, Point};

/// Every open cell reachable from `from` through 4-connected open cells,
/// including `from` itself. Returns an empty set if `from` is out of
/// bounds or a wall.
///
/// This is an independent connectivity check: a search returns "no path"
/// exactly when the end cell is absent from `reachable(board, start)`.
/// Callers also use it to check that a generated maze is solvable.
pub fn reachable(board: &Board, from: Point) -> Vec<Point> {
    let mut result = Vec::new();
    if board.is_wall(from) {
        return result;
    }

    let width = board.width().max(0) as usize;
    let mut seen = vec![false; width * board.height().max(0) as usize];
    let idx = |p: Point| (p.y as usize) * width + (p.x as usize);

    let mut stack = vec![from];
    seen[idx(from)] = true;
    result.push(from);

    while let Some(cur) = stack.pop() {
        for n in cur.neighbors4() {
            if board.is_wall(n) || seen[idx(n)] {
                continue;
            }
            seen[idx(n)] = true;
            stack.push(n);
            result.push(n);
        }
    }

    result
}
