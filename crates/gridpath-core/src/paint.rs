//! External-collaborator contracts: rendering and input.
//!
//! The engine never computes pixel geometry. It emits logical cell
//! coordinates plus a semantic [`ColorTag`]; mapping those to pixels,
//! terminal cells or anything else is the back-end's concern. Input
//! collaborators do the reverse translation, delivering an already-resolved
//! `(Point, InputIntent)` pair.

use crate::geom::Point;

/// Semantic color intent for a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ColorTag {
    /// An open, untouched cell.
    Empty,
    /// A wall cell.
    Wall,
    /// The search start marker.
    Start,
    /// The search end marker.
    End,
    /// A cell popped from a search frontier.
    Exploring,
    /// A cell on the final path.
    Path,
}

/// A rendering back-end the engine drives one cell at a time.
pub trait CellPainter {
    /// Color the cell at `p` with the given semantic tag.
    fn paint_cell(&mut self, p: Point, tag: ColorTag);
}

/// What a pointer event at a given cell means.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InputIntent {
    /// Flip the wall flag of the cell.
    ToggleWall,
    /// Place the start marker.
    SetStart,
    /// Place the end marker.
    SetEnd,
}

/// A painter that discards everything. Useful for headless runs and tests
/// that only care about search results.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPainter;

impl CellPainter for NullPainter {
    fn paint_cell(&mut self, _p: Point, _tag: ColorTag) {}
}
