//! Dijkstra's algorithm on the unit-cost grid.

use gridpath_core::{Board, Point};

use crate::frontier::Frontier;
use crate::{SearchOutcome, SearchReport, reconstruct};

/// Run Dijkstra from `start` to `end`.
///
/// The frontier may hold duplicate entries for a cell whose distance was
/// improved after it was queued. A popped entry whose cost no longer
/// matches the cell's best distance is stale and is discarded without
/// emitting a visit event, so each coordinate is visited at most once.
pub(crate) fn run(board: &mut Board, start: Point, end: Point) -> SearchReport {
    let mut open = Frontier::new();
    if let Some(cell) = board.at_mut(start) {
        cell.distance = 0;
    }
    open.push(0, start);

    let mut visits = Vec::new();

    while let Some(entry) = open.pop() {
        let cur = entry.pos;
        let Some(cell) = board.at(cur) else {
            continue;
        };
        if cell.visited || entry.cost > cell.distance {
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

        let next_dist = cell.distance + 1;
        for n in cur.neighbors4() {
            let Some(nc) = board.at_mut(n) else {
                continue;
            };
            if nc.wall {
                continue;
            }
            if next_dist < nc.distance {
                nc.distance = next_dist;
                nc.prev = Some(cur);
                open.push(next_dist, n);
            }
        }
    }

    SearchReport {
        visits,
        outcome: SearchOutcome::NoPath,
    }
}
