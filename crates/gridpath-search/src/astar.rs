//! A* search with the Manhattan heuristic.

use gridpath_core::{Board, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::{SearchOutcome, SearchReport, reconstruct};

/// Run A* from `start` to `end`.
///
/// `g` scores live in the cells' `distance` field; the frontier is keyed
/// by `f = g + manhattan(p, end)`. Manhattan distance never overestimates
/// on a 4-connected unit grid, so the first time the end cell is popped
/// the path is optimal. A cell is only re-queued when its `g` strictly
/// improves; stale duplicates are skipped on pop like in Dijkstra.
pub(crate) fn run(board: &mut Board, start: Point, end: Point) -> SearchReport {
    let mut open = Frontier::new();
    if let Some(cell) = board.at_mut(start) {
        cell.distance = 0;
    }
    open.push(manhattan(start, end), start);

    let mut visits = Vec::new();

    while let Some(entry) = open.pop() {
        let cur = entry.pos;
        let Some(cell) = board.at(cur) else {
            continue;
        };
        if cell.visited {
            continue;
        }
        if let Some(c) = board.at_mut(cur) {
            c.visited = true;
        }
        if cur != start {
            visits.push(cur);
        }
        if cur == end {
            return SearchReport {
                visits,
                outcome: SearchOutcome::Path(reconstruct(board, start, end)),
            };
        }

        let tentative_g = cell.distance + 1;
        for n in cur.neighbors4() {
            let Some(nc) = board.at_mut(n) else {
                continue;
            };
            if nc.wall || tentative_g >= nc.distance {
                continue;
            }
            nc.distance = tentative_g;
            nc.prev = Some(cur);
            open.push(tentative_g + manhattan(n, end), n);
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
    fn open_grid_path_is_optimal() {
        let mut board = Board::new(5, 5);
        let report = search(
            &mut board,
            Algorithm::Astar,
            Point::new(0, 0),
            Point::new(4, 4),
        )
        .unwrap();
        // Manhattan distance 8, so 9 cells.
        assert_eq!(report.outcome.path().unwrap().len(), 9);
    }

    #[test]
    fn explores_fewer_cells_than_dijkstra_on_open_grid() {
        let start = Point::new(0, 5);
        let end = Point::new(10, 5);
        let mut board = Board::new(11, 11);
        let astar = search(&mut board, Algorithm::Astar, start, end).unwrap();
        let dijkstra = search(&mut board, Algorithm::Dijkstra, start, end).unwrap();
        assert_eq!(
            astar.outcome.path().unwrap().len(),
            dijkstra.outcome.path().unwrap().len()
        );
        // The heuristic keeps the frontier pointed at the goal.
        assert!(astar.visits.len() < dijkstra.visits.len());
    }
}
