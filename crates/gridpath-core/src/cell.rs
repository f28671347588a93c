//! The [`Cell`] type — per-coordinate board state.

use crate::geom::Point;

/// Sentinel distance meaning "not reached yet" in search-scratch state.
pub const UNREACHABLE: i32 = i32::MAX;

/// State of a single board cell.
///
/// `wall` is persistent board state, toggled by user input or maze
/// generation. The remaining fields (`visited`, `distance`, `prev`) are
/// search-scratch state: they belong to the currently running search and
/// are cleared by [`Board::reset_search_state`](crate::Board::reset_search_state)
/// before every run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    /// Whether the cell blocks movement.
    pub wall: bool,
    /// Whether a search has already admitted this cell to its frontier.
    pub visited: bool,
    /// Best known distance from the search start (unit-cost edges).
    pub distance: i32,
    /// The cell from which this cell was first (or best) reached.
    pub prev: Option<Point>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            wall: false,
            visited: false,
            distance: UNREACHABLE,
            prev: None,
        }
    }
}

impl Cell {
    /// An open cell with fresh scratch state.
    pub const OPEN: Self = Self {
        wall: false,
        visited: false,
        distance: UNREACHABLE,
        prev: None,
    };

    /// A wall cell with fresh scratch state.
    pub const WALL: Self = Self {
        wall: true,
        visited: false,
        distance: UNREACHABLE,
        prev: None,
    };

    /// Clear the search-scratch fields, keeping `wall`.
    #[inline]
    pub fn reset_scratch(&mut self) {
        self.visited = false;
        self.distance = UNREACHABLE;
        self.prev = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_open_and_fresh() {
        let c = Cell::default();
        assert!(!c.wall);
        assert!(!c.visited);
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.prev, None);
        assert_eq!(c, Cell::OPEN);
    }

    #[test]
    fn reset_scratch_keeps_wall() {
        let mut c = Cell::WALL;
        c.visited = true;
        c.distance = 3;
        c.prev = Some(Point::new(1, 1));
        c.reset_scratch();
        assert!(c.wall);
        assert_eq!(c, Cell::WALL);
    }
}
