//! Graph-search engine for the grid-pathfinding visualizer.
//!
//! Four interchangeable algorithms run over a [`Board`]:
//!
//! - **BFS** — FIFO frontier, shortest path on the unit-cost grid
//! - **DFS** — LIFO frontier, *a* valid path, not necessarily shortest
//! - **Dijkstra** — min-distance frontier, shortest path
//! - **A\*** — `g + manhattan` frontier, shortest path
//!
//! All of them share one contract (see [`search`]): scratch state is reset
//! up front, each frontier pop emits a visit event (never for the start
//! cell), the goal check happens on pop, and the final path is rebuilt by
//! walking predecessor links. The algorithms are pure with respect to
//! time: they produce an ordered visit log and an outcome, and playback
//! with delays is entirely the animation driver's concern.

use std::fmt;
use std::str::FromStr;

use gridpath_core::{Board, Error, Point};

mod astar;
mod bfs;
mod cc;
mod dfs;
mod dijkstra;
mod distance;
mod frontier;

pub use cc::reachable;
pub use distance::manhattan;

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// The available search algorithms.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

impl Algorithm {
    /// All algorithms, in menu order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Dijkstra,
        Algorithm::Astar,
    ];

    /// The command-surface name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::Astar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" => Ok(Algorithm::Bfs),
            "dfs" => Ok(Algorithm::Dfs),
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::Astar),
            other => Err(format!("unknown algorithm: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// SearchReport / SearchOutcome
// ---------------------------------------------------------------------------

/// What a search produced: the ordered visit log plus the outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchReport {
    /// Coordinates in frontier-pop order, excluding the start cell.
    pub visits: Vec<Point>,
    /// The discovered path, or the explicit no-path signal.
    pub outcome: SearchOutcome,
}

/// Result of a search: a path from start to end inclusive, or no path.
///
/// "No path" is a value, not an error — an unreachable end cell is a
/// normal answer, not a control-flow exception.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The path in traversal order, start first, end last.
    Path(Vec<Point>),
    /// The frontier was exhausted without reaching the end.
    NoPath,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            SearchOutcome::Path(p) => Some(p),
            SearchOutcome::NoPath => None,
        }
    }

    /// Convert to a `Result`, mapping `NoPath` to [`Error::NoPathFound`]
    /// for callers who want to propagate with `?`.
    pub fn into_result(self) -> Result<Vec<Point>, Error> {
        match self {
            SearchOutcome::Path(p) => Ok(p),
            SearchOutcome::NoPath => Err(Error::NoPathFound),
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Run `algorithm` over `board` from `start` to `end`.
///
/// Shared preconditions, enforced here once for all algorithms:
///
/// - `start`/`end` must be in range, otherwise `Err(OutOfBounds)`;
/// - search-scratch state is reset before anything else runs — results
///   never depend on a previous run;
/// - a start or end on a wall yields [`SearchOutcome::NoPath`] without
///   exploring;
/// - `start == end` yields the single-cell path `[start]` with zero
///   visit events.
pub fn search(
    board: &mut Board,
    algorithm: Algorithm,
    start: Point,
    end: Point,
) -> Result<SearchReport, Error> {
    if !board.contains(start) {
        return Err(Error::OutOfBounds(start));
    }
    if !board.contains(end) {
        return Err(Error::OutOfBounds(end));
    }

    board.reset_search_state();

    if board.is_wall(start) || board.is_wall(end) {
        return Ok(SearchReport {
            visits: Vec::new(),
            outcome: SearchOutcome::NoPath,
        });
    }
    if start == end {
        return Ok(SearchReport {
            visits: Vec::new(),
            outcome: SearchOutcome::Path(vec![start]),
        });
    }

    Ok(match algorithm {
        Algorithm::Bfs => bfs::run(board, start, end),
        Algorithm::Dfs => dfs::run(board, start, end),
        Algorithm::Dijkstra => dijkstra::run(board, start, end),
        Algorithm::Astar => astar::run(board, start, end),
    })
}

/// Walk `prev` links from `end` back to `start` and reverse.
///
/// Only called once the goal has been popped, so the chain is complete.
pub(crate) fn reconstruct(board: &Board, start: Point, end: Point) -> Vec<Point> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        let Some(prev) = board.at(cur).and_then(|c| c.prev) else {
            break;
        };
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    path
}

// ---------------------------------------------------------------------------
// Cross-algorithm properties
// ---------------------------------------------------------------------------


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn algorithm_round_trip() {
        for algo in Algorithm::ALL {
            let json = serde_json::to_string(&algo).unwrap();
            let back: Algorithm = serde_json::from_str(&json).unwrap();
            assert_eq!(algo, back);
        }
    }
}
