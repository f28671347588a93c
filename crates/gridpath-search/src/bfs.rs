//! Breadth-first search.

use std::collections::VecDeque;

use gridpath_core::{Board, Point};

use crate::{SearchOutcome, SearchReport, reconstruct};

/// Run BFS from `start` to `end`.
///
/// Preconditions (bounds, walls, `start != end`, fresh scratch state) are
/// handled by [`search`](crate::search).
pub(crate) fn run(board: &mut Board, start: Point, end: Point) -> SearchReport {
    let mut queue: VecDeque<Point> = VecDeque::new();
    if let Some(cell) = board.at_mut(start) {
        cell.visited = true;
        cell.distance = 0;
    }
    queue.push_back(start);

    let mut visits = Vec::new();

    while let Some(cur) = queue.pop_front() {
        if cur != start {
            visits.push(cur);
        }
        if cur == end {
            return SearchReport {
                visits,
                outcome: SearchOutcome::Path(reconstruct(board, start, end)),
            };
        }

        let cur_dist = board.at(cur).map(|c| c.distance).unwrap_or(0);
        for n in cur.neighbors4() {
            let Some(cell) = board.at_mut(n) else {
                continue;
            };
            if cell.wall || cell.visited {
                continue;
            }
            cell.visited = true;
            cell.distance = cur_dist + 1;
            cell.prev = Some(cur);
            queue.push_back(n);
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
    fn straight_corridor() {
        let mut board = Board::new(5, 1);
        let report = search(&mut board, Algorithm::Bfs, Point::new(0, 0), Point::new(4, 0))
            .unwrap();
        let path = report.outcome.path().unwrap().to_vec();
        assert_eq!(
            path,
            (0..5).map(|x| Point::new(x, 0)).collect::<Vec<_>>()
        );
        // Every cell but the start is reported exactly once.
        assert_eq!(report.visits.len(), 4);
    }

    #[test]
    fn tie_breaking_follows_neighbor_order() {
        // Two equally short routes from (0,0) to (1,1): via (1,0) or (0,1).
        // Down is expanded before right, so the path goes through (0,1).
        let mut board = Board::new(2, 2);
        let report = search(&mut board, Algorithm::Bfs, Point::new(0, 0), Point::new(1, 1))
            .unwrap();
        assert_eq!(
            report.outcome.path().unwrap(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(1, 1)]
        );
    }

    #[test]
    fn visits_are_in_pop_order_and_unique() {
        let mut board = Board::new(4, 4);
        let report = search(&mut board, Algorithm::Bfs, Point::new(0, 0), Point::new(3, 3))
            .unwrap();
        let mut seen = std::collections::HashSet::new();
        for &v in &report.visits {
            assert!(seen.insert(v), "{v} visited twice");
            assert_ne!(v, Point::new(0, 0), "start must never be emitted");
        }
    }
}
