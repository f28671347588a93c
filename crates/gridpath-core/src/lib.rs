//! Core types for the grid-pathfinding visualizer.
//!
//! This crate holds everything the rest of the workspace agrees on:
//!
//! - [`Point`] / [`Range`] geometry;
//! - the [`Board`] — a fixed-size grid of [`Cell`]s with wall state and
//!   per-search scratch state (`visited`, `distance`, `prev`);
//! - the typed [`Error`] conditions;
//! - the external-collaborator contracts ([`CellPainter`], [`ColorTag`],
//!   [`InputIntent`]).
//!
//! Search algorithms live in `gridpath-search`; animation, maze generation
//! and the session gatekeeper live in `gridpath-viz`.

pub mod board;
pub mod cell;
pub mod error;
pub mod geom;
pub mod paint;

pub use board::Board;
pub use cell::{Cell, UNREACHABLE};
pub use error::Error;
pub use geom::{Point, Range};
pub use paint::{CellPainter, ColorTag, InputIntent, NullPainter};
