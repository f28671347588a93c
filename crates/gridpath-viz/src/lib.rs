//! Visualization layer: maze generation, animated playback, session state.
//!
//! The search engine (`gridpath-search`) is pure; this crate owns
//! everything around it that involves randomness, wall-clock time or user
//! interaction ordering:
//!
//! - [`mazegen`] — randomized wall placement;
//! - [`Animator`] / [`Context`] — fixed-delay sequential playback of visit
//!   logs and paths, with cooperative cancellation;
//! - [`Session`] — the gatekeeper that owns the board, tracks start/end
//!   markers, blocks input while an animation is in flight, and remembers
//!   the most recent path per algorithm.

pub mod animate;
pub mod mazegen;
pub mod session;

pub use animate::{Animator, Context};
pub use mazegen::DEFAULT_WALL_PROBABILITY;
pub use session::Session;
