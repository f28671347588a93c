//! Depth-first search.

use gridpath_core::{Board, Point};

use crate::{SearchOutcome, SearchReport, reconstruct};

/// Run DFS from `start` to `end`.
///
/// Same admission rule as BFS (mark visited on push) but with a LIFO
/// stack, so the most recently discovered cell is expanded first. The
/// resulting path is valid but not necessarily shortest.
pub(crate) fn run(board: &mut Board, start: Point, end: Point) -> SearchReport {
    let mut stack: Vec<Point> = Vec::new();
    if let Some(cell) = board.at_mut(start) {
        cell.visited = true;
    }
    stack.push(start);

    let mut visits = Vec::new();

    while let Some(cur) = stack.pop() {
        if cur != start {
            visits.push(cur);
        }
        if cur == end {
            return SearchReport {
                visits,
                outcome: SearchOutcome::Path(reconstruct(board, start, end)),
            };
        }

        for n in cur.neighbors4() {
            let Some(cell) = board.at_mut(n) else {
                continue;
            };
            if cell.wall || cell.visited {
                continue;
            }
            cell.visited = true;
            cell.prev = Some(cur);
            stack.push(n);
        }
    }

    SearchReport {
        visits,
        outcome: SearchOutcome::NoPath,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Algorithm, search};

    #[test]
    fn expands_most_recent_first() {
        // From (0,0) the push order is down then right; right is popped
        // first, so exploration starts along the top row.
        let mut board = Board::new(3, 3);
        let report = search(&mut board, Algorithm::Dfs, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        assert_eq!(report.visits.first(), Some(&Point::new(1, 0)));
        assert!(report.outcome.path().is_some());
    }

    #[test]
    fn finds_a_path_in_a_corridor_maze() {
        // S . #
        // # . #
        // # . E
        let mut board = Board::new(3, 3);
        for p in [
            Point::new(2, 0),
            Point::new(0, 1),
            Point::new(2, 1),
            Point::new(0, 2),
        ] {
            board.set_wall(p, true).unwrap();
        }
        let report = search(&mut board, Algorithm::Dfs, Point::new(0, 0), Point::new(2, 2))
            .unwrap();
        let path = report.outcome.path().unwrap();
        assert_eq!(path.first(), Some(&Point::new(0, 0)));
        assert_eq!(path.last(), Some(&Point::new(2, 2)));
    }
}
