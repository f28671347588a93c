//! Typed error conditions shared across the workspace.

use std::fmt;

use crate::geom::Point;

/// Recoverable error conditions raised by board and session operations.
///
/// None of these are fatal: out-of-range input is rejected without
/// mutation, and the search/session layers surface the rest to the caller
/// as distinguishable outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A coordinate operation fell outside the board extent.
    OutOfBounds(Point),
    /// A search was requested before both start and end were set.
    InputsNotReady,
    /// A search exhausted its frontier without reaching the end cell.
    NoPathFound,
    /// Input or a new search arrived while an animation was in flight.
    Busy,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds(p) => write!(f, "coordinate {p} is outside the board"),
            Error::InputsNotReady => f.write_str("start and end must both be set"),
            Error::NoPathFound => f.write_str("no path found"),
            Error::Busy => f.write_str("an animation is already running"),
        }
    }
}

impl std::error::Error for Error {}
