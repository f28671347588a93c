//! Playback of search results: [`Context`] and [`Animator`].
//!
//! Searches produce an ordered visit log and a path; this module replays
//! them against a [`CellPainter`] with a fixed per-step delay. Keeping the
//! timing out of the algorithms makes them unit-testable without fake
//! timers, and the cancellation token lets a caller stop a playback
//! mid-sequence instead of having to sit through it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use gridpath_core::{CellPainter, ColorTag, Point};

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A simple cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    /// Create a new, non-cancelled context.
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Animator
// ---------------------------------------------------------------------------

/// Sequential playback with fixed per-step delays.
///
/// Playback is strictly ordered: one cell's paint-and-delay completes
/// before the next begins, and a path is only ever played after the full
/// visit sequence. The context is checked before every step; once it is
/// cancelled no further cells are painted.
#[derive(Clone, Copy, Debug)]
pub struct Animator {
    /// Delay after painting one explored cell.
    pub visit_delay: Duration,
    /// Delay after painting one final-path cell.
    pub path_delay: Duration,
}

impl Default for Animator {
    fn default() -> Self {
        Self {
            visit_delay: Duration::from_millis(10),
            path_delay: Duration::from_millis(50),
        }
    }
}

impl Animator {
    /// An animator with no delays, for headless use and tests.
    pub fn immediate() -> Self {
        Self {
            visit_delay: Duration::ZERO,
            path_delay: Duration::ZERO,
        }
    }

    /// Play a visit sequence as [`ColorTag::Exploring`].
    ///
    /// Returns how many cells were painted (fewer than `points.len()` only
    /// on cancellation).
    pub fn play_visits<P: CellPainter>(
        &self,
        painter: &mut P,
        ctx: &Context,
        points: &[Point],
    ) -> usize {
        self.play(painter, ctx, points, ColorTag::Exploring, self.visit_delay)
    }

    /// Play a final path as [`ColorTag::Path`].
    pub fn play_path<P: CellPainter>(
        &self,
        painter: &mut P,
        ctx: &Context,
        points: &[Point],
    ) -> usize {
        self.play(painter, ctx, points, ColorTag::Path, self.path_delay)
    }

    fn play<P: CellPainter>(
        &self,
        painter: &mut P,
        ctx: &Context,
        points: &[Point],
        tag: ColorTag,
        delay: Duration,
    ) -> usize {
        let mut painted = 0;
        for &p in points {
            if ctx.is_done() {
                break;
            }
            painter.paint_cell(p, tag);
            painted += 1;
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        }
        painted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records every paint call, in order.
    #[derive(Default)]
    pub(crate) struct RecordingPainter {
        pub(crate) calls: Vec<(Point, ColorTag)>,
    }

    impl CellPainter for RecordingPainter {
        fn paint_cell(&mut self, p: Point, tag: ColorTag) {
            self.calls.push((p, tag));
        }
    }

    fn pts(n: i32) -> Vec<Point> {
        (0..n).map(|x| Point::new(x, 0)).collect()
    }

    #[test]
    fn visits_then_path_in_order() {
        let mut painter = RecordingPainter::default();
        let ctx = Context::new();
        let anim = Animator::immediate();
        anim.play_visits(&mut painter, &ctx, &pts(3));
        anim.play_path(&mut painter, &ctx, &pts(2));
        let tags: Vec<ColorTag> = painter.calls.iter().map(|&(_, t)| t).collect();
        assert_eq!(
            tags,
            vec![
                ColorTag::Exploring,
                ColorTag::Exploring,
                ColorTag::Exploring,
                ColorTag::Path,
                ColorTag::Path,
            ]
        );
        assert_eq!(painter.calls[0].0, Point::new(0, 0));
        assert_eq!(painter.calls[2].0, Point::new(2, 0));
    }

    #[test]
    fn cancelled_context_paints_nothing() {
        let mut painter = RecordingPainter::default();
        let ctx = Context::new();
        ctx.cancel();
        let painted = Animator::immediate().play_visits(&mut painter, &ctx, &pts(5));
        assert_eq!(painted, 0);
        assert!(painter.calls.is_empty());
    }

    #[test]
    fn cancellation_mid_sequence_stops_playback() {
        /// Cancels its context after `limit` paints.
        struct CancellingPainter {
            ctx: Context,
            limit: usize,
            painted: usize,
        }
        impl CellPainter for CancellingPainter {
            fn paint_cell(&mut self, _p: Point, _tag: ColorTag) {
                self.painted += 1;
                if self.painted == self.limit {
                    self.ctx.cancel();
                }
            }
        }

        let ctx = Context::new();
        let mut painter = CancellingPainter {
            ctx: ctx.clone(),
            limit: 2,
            painted: 0,
        };
        let painted = Animator::immediate().play_visits(&mut painter, &ctx, &pts(10));
        assert_eq!(painted, 2);
    }
}
