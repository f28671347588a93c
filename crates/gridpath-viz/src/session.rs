//! The [`Session`] — gatekeeper for every entry point of the visualizer.

use std::collections::HashMap;

use gridpath_core::{Board, CellPainter, ColorTag, Error, InputIntent, Point};
use gridpath_search::{Algorithm, SearchOutcome, SearchReport, search};
use rand::Rng;

use crate::animate::{Animator, Context};
use crate::mazegen;

/// Owns the board plus the interactive state around it: the start/end
/// markers, the animation gate, and the most recent path per algorithm.
///
/// Invariants enforced here rather than scattered over the UI:
/// - start is set before end, and both before any search;
/// - while an animation is in flight every mutating entry point returns
///   [`Error::Busy`];
/// - `animating` only returns to `false` once playback of the result has
///   finished.
pub struct Session {
    board: Board,
    start: Option<Point>,
    end: Option<Point>,
    animating: bool,
    last_paths: HashMap<Algorithm, Vec<Point>>,
}

impl Session {
    /// Create a session over a fresh open board.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            board: Board::new(width, height),
            start: None,
            end: None,
            animating: false,
            last_paths: HashMap::new(),
        }
    }

    /// The owned board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The start marker, if placed.
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// The end marker, if placed.
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Whether a playback is currently in flight.
    pub fn animating(&self) -> bool {
        self.animating
    }

    /// The most recent path found by `algorithm`, if any.
    pub fn last_path(&self, algorithm: Algorithm) -> Option<&[Point]> {
        self.last_paths.get(&algorithm).map(Vec::as_slice)
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    /// Apply a translated input event.
    ///
    /// Rejected with [`Error::Busy`] while animating and with
    /// [`Error::OutOfBounds`] for coordinates outside the board. Placing
    /// the end before the start is [`Error::InputsNotReady`].
    pub fn apply_input<P: CellPainter>(
        &mut self,
        p: Point,
        intent: InputIntent,
        painter: &mut P,
    ) -> Result<(), Error> {
        if self.animating {
            return Err(Error::Busy);
        }
        if !self.board.contains(p) {
            return Err(Error::OutOfBounds(p));
        }
        match intent {
            InputIntent::SetStart => {
                log::debug!("start set to {p}");
                self.start = Some(p);
                painter.paint_cell(p, ColorTag::Start);
            }
            InputIntent::SetEnd => {
                if self.start.is_none() {
                    return Err(Error::InputsNotReady);
                }
                log::debug!("end set to {p}");
                self.end = Some(p);
                painter.paint_cell(p, ColorTag::End);
            }
            InputIntent::ToggleWall => {
                let wall = self.board.toggle_wall(p)?;
                painter.paint_cell(p, if wall { ColorTag::Wall } else { ColorTag::Empty });
            }
        }
        Ok(())
    }

    /// A primary click: places the start first, the end on the next click,
    /// mirroring the two-click flow of the reference canvas.
    pub fn click<P: CellPainter>(&mut self, p: Point, painter: &mut P) -> Result<(), Error> {
        let intent = if self.start.is_none() {
            InputIntent::SetStart
        } else {
            InputIntent::SetEnd
        };
        self.apply_input(p, intent, painter)
    }

    // -----------------------------------------------------------------------
    // Maze generation
    // -----------------------------------------------------------------------

    /// Rebuild the walls at random and repaint the whole board.
    ///
    /// Clears the start/end markers and the stored paths; the session is
    /// back to its "nothing placed yet" state.
    pub fn generate_maze<R: Rng, P: CellPainter>(
        &mut self,
        rng: &mut R,
        wall_probability: f64,
        painter: &mut P,
    ) -> Result<(), Error> {
        if self.animating {
            return Err(Error::Busy);
        }
        mazegen::generate(&mut self.board, rng, wall_probability);
        self.start = None;
        self.end = None;
        self.last_paths.clear();
        log::debug!(
            "maze generated, {} walls",
            self.board.count_fn(|_, c| c.wall)
        );
        self.repaint_board(painter);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Run the search and raise the animation gate.
    ///
    /// Fails with [`Error::Busy`] mid-playback and with
    /// [`Error::InputsNotReady`] until both markers are placed. On success
    /// the gate stays up until [`finish_playback`](Self::finish_playback).
    pub fn start_search(&mut self, algorithm: Algorithm) -> Result<SearchReport, Error> {
        if self.animating {
            return Err(Error::Busy);
        }
        let (Some(start), Some(end)) = (self.start, self.end) else {
            return Err(Error::InputsNotReady);
        };
        let report = search(&mut self.board, algorithm, start, end)?;
        match &report.outcome {
            SearchOutcome::Path(path) => {
                log::info!(
                    "{algorithm}: path of {} cells after {} visits",
                    path.len(),
                    report.visits.len()
                );
                self.last_paths.insert(algorithm, path.clone());
            }
            SearchOutcome::NoPath => {
                log::info!("{algorithm}: no path after {} visits", report.visits.len());
            }
        }
        self.animating = true;
        Ok(report)
    }

    /// Lower the animation gate once playback is done (or cancelled).
    pub fn finish_playback(&mut self) {
        self.animating = false;
    }

    /// Full search-and-play: run the algorithm, animate its visit log and
    /// path through `painter`, repaint the markers, and release the gate.
    pub fn run_search<P: CellPainter>(
        &mut self,
        algorithm: Algorithm,
        painter: &mut P,
        animator: &Animator,
        ctx: &Context,
    ) -> Result<SearchOutcome, Error> {
        let report = self.start_search(algorithm)?;
        animator.play_visits(painter, ctx, &report.visits);
        if let SearchOutcome::Path(path) = &report.outcome {
            animator.play_path(painter, ctx, path);
        }
        self.repaint_markers(painter);
        self.finish_playback();
        Ok(report.outcome)
    }

    // -----------------------------------------------------------------------
    // Painting
    // -----------------------------------------------------------------------

    /// Repaint every cell plus the markers (initial draw, maze rebuild).
    pub fn repaint_board<P: CellPainter>(&self, painter: &mut P) {
        for (p, cell) in self.board.iter() {
            painter.paint_cell(p, if cell.wall { ColorTag::Wall } else { ColorTag::Empty });
        }
        self.repaint_markers(painter);
    }

    /// Repaint the start/end markers (they get flooded over by a run).
    pub fn repaint_markers<P: CellPainter>(&self, painter: &mut P) {
        if let Some(start) = self.start {
            painter.paint_cell(start, ColorTag::Start);
        }
        if let Some(end) = self.end {
            painter.paint_cell(end, ColorTag::End);
        }
    }
}
