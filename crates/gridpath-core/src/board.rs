//! The [`Board`] type — a fixed-size 2D grid of [`Cell`]s.

use crate::cell::Cell;
use crate::error::Error;
use crate::geom::{Point, Range};

/// A fixed `width × height` grid of [`Cell`]s, stored row-major.
///
/// Dimensions are immutable after creation. The board is an owned
/// aggregate: searches and maze generation receive it by mutable
/// reference, there is no shared or ambient grid state.
#[derive(Debug, Clone)]
pub struct Board {
    cells: Vec<Cell>,
    bounds: Range,
    width: usize,
}

impl Board {
    /// Create a new board of the given dimensions, all cells open.
    ///
    /// Negative dimensions are clamped to zero.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            cells: vec![Cell::default(); (w * h) as usize],
            bounds: Range::new(0, 0, w, h),
            width: w as usize,
        }
    }

    /// The bounding range of the board.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Size of the board as a `Point`.
    #[inline]
    pub fn size(&self) -> Point {
        self.bounds.size()
    }

    /// Width.
    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height.
    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether `p` is inside the board.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y as usize) * self.width + (p.x as usize))
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn at_mut(&mut self, p: Point) -> Option<&mut Cell> {
        self.index(p).map(move |i| &mut self.cells[i])
    }

    /// Whether the cell at `p` is a wall. Out-of-bounds counts as a wall.
    #[inline]
    pub fn is_wall(&self, p: Point) -> bool {
        self.at(p).is_none_or(|c| c.wall)
    }

    /// Set or clear the wall flag at `p`.
    ///
    /// Out-of-range coordinates are rejected without mutation.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<(), Error> {
        match self.at_mut(p) {
            Some(cell) => {
                cell.wall = wall;
                Ok(())
            }
            None => Err(Error::OutOfBounds(p)),
        }
    }

    /// Flip the wall flag at `p`, returning the new value.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool, Error> {
        match self.at_mut(p) {
            Some(cell) => {
                cell.wall = !cell.wall;
                Ok(cell.wall)
            }
            None => Err(Error::OutOfBounds(p)),
        }
    }

    /// Clear `visited`/`distance`/`prev` on every cell, leaving walls alone.
    ///
    /// Every search entry point calls this first; scratch state never
    /// survives from one run to the next.
    pub fn reset_search_state(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.reset_scratch();
        }
    }

    /// Replace every cell, walls included, with the default open cell.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// The in-bounds cardinal neighbours of `p`, preserving the fixed
    /// up/down/left/right order of [`Point::neighbors4`].
    pub fn neighbors4(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors4().into_iter().filter(|&n| self.contains(n))
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds
            .iter()
            .map(|p| (p, self.cells[(p.y as usize) * self.width + (p.x as usize)]))
    }

    /// Count cells satisfying a predicate.
    pub fn count_fn(&self, mut f: impl FnMut(Point, Cell) -> bool) -> usize {
        self.iter().filter(|&(p, c)| f(p, c)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::UNREACHABLE;

    #[test]
    fn new_and_size() {
        let b = Board::new(10, 5);
        assert_eq!(b.size(), Point::new(10, 5));
        assert_eq!(b.width(), 10);
        assert_eq!(b.height(), 5);
        assert!(b.iter().all(|(_, c)| c == Cell::default()));
    }

    #[test]
    fn at_out_of_bounds_is_none() {
        let b = Board::new(4, 4);
        assert!(b.at(Point::new(0, 0)).is_some());
        assert!(b.at(Point::new(4, 0)).is_none());
        assert!(b.at(Point::new(0, -1)).is_none());
    }

    #[test]
    fn set_and_toggle_wall() {
        let mut b = Board::new(4, 4);
        let p = Point::new(2, 3);
        b.set_wall(p, true).unwrap();
        assert!(b.is_wall(p));
        assert_eq!(b.toggle_wall(p), Ok(false));
        assert!(!b.is_wall(p));
        assert_eq!(b.toggle_wall(p), Ok(true));
    }

    #[test]
    fn wall_ops_reject_out_of_bounds() {
        let mut b = Board::new(4, 4);
        let p = Point::new(9, 9);
        assert_eq!(b.set_wall(p, true), Err(Error::OutOfBounds(p)));
        assert_eq!(b.toggle_wall(p), Err(Error::OutOfBounds(p)));
    }

    #[test]
    fn out_of_bounds_counts_as_wall() {
        let b = Board::new(2, 2);
        assert!(b.is_wall(Point::new(-1, 0)));
        assert!(b.is_wall(Point::new(0, 2)));
        assert!(!b.is_wall(Point::new(1, 1)));
    }

    #[test]
    fn reset_search_state_keeps_walls() {
        let mut b = Board::new(3, 3);
        let wall = Point::new(1, 1);
        b.set_wall(wall, true).unwrap();
        {
            let c = b.at_mut(Point::new(0, 0)).unwrap();
            c.visited = true;
            c.distance = 0;
            c.prev = Some(Point::new(2, 2));
        }
        b.reset_search_state();
        assert!(b.is_wall(wall));
        let c = b.at(Point::new(0, 0)).unwrap();
        assert!(!c.visited);
        assert_eq!(c.distance, UNREACHABLE);
        assert_eq!(c.prev, None);
    }

    #[test]
    fn neighbors4_clipped_at_corner() {
        let b = Board::new(3, 3);
        let ns: Vec<_> = b.neighbors4(Point::new(0, 0)).collect();
        // Up and left fall outside; down then right remain, order kept.
        assert_eq!(ns, vec![Point::new(0, 1), Point::new(1, 0)]);
    }

    #[test]
    fn neighbors4_interior_order() {
        let b = Board::new(3, 3);
        let ns: Vec<_> = b.neighbors4(Point::new(1, 1)).collect();
        assert_eq!(
            ns,
            vec![
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn clear_removes_walls() {
        let mut b = Board::new(3, 3);
        b.set_wall(Point::new(1, 1), true).unwrap();
        b.clear();
        assert!(!b.is_wall(Point::new(1, 1)));
    }
}
