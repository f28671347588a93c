//! Crossterm back-end for the grid-pathfinding visualizer.
//!
//! Implements the two collaborator contracts from `gridpath-core` for a
//! terminal: [`TermPainter`] maps logical cells and [`ColorTag`]s to
//! colored character blocks, and [`translate_mouse`] turns raw mouse
//! events back into `(Point, InputIntent)` pairs. The engine itself never
//! sees screen coordinates.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, MouseButton, MouseEvent, MouseEventKind},
    execute, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal::{self, ClearType},
};

use gridpath_core::{CellPainter, ColorTag, InputIntent, Point, Range};

/// Each board cell renders as this many terminal columns (one row high).
/// Two columns per cell keeps the board roughly square on screen.
pub const CELL_COLS: i32 = 2;

/// Maps a semantic [`ColorTag`] to a terminal background color.
///
/// The palette follows the reference look: light empty cells, dark walls,
/// blue/red markers, light-blue exploration, green path.
pub fn tag_color(tag: ColorTag) -> Color {
    match tag {
        ColorTag::Empty => Color::Rgb {
            r: 0xee,
            g: 0xee,
            b: 0xee,
        },
        ColorTag::Wall => Color::Rgb {
            r: 0x55,
            g: 0x55,
            b: 0x55,
        },
        ColorTag::Start => Color::Blue,
        ColorTag::End => Color::Red,
        ColorTag::Exploring => Color::Rgb {
            r: 0xad,
            g: 0xd8,
            b: 0xe6,
        },
        ColorTag::Path => Color::Rgb {
            r: 0x90,
            g: 0xee,
            b: 0x90,
        },
    }
}

// ---------------------------------------------------------------------------
// TermPainter
// ---------------------------------------------------------------------------

/// A [`CellPainter`] that draws onto the terminal at a fixed origin.
///
/// Every paint is flushed immediately: the animation driver relies on one
/// cell becoming visible before the next delay starts.
pub struct TermPainter {
    origin: Point,
}

impl TermPainter {
    /// Create a painter whose board cell (0, 0) lands at `origin`
    /// (in terminal columns/rows).
    pub fn new(origin: Point) -> Self {
        Self { origin }
    }

    fn draw(&self, p: Point, tag: ColorTag) -> io::Result<()> {
        let col = self.origin.x + p.x * CELL_COLS;
        let row = self.origin.y + p.y;
        if col < 0 || row < 0 {
            return Ok(());
        }
        let mut out = io::stdout();
        queue!(
            out,
            cursor::MoveTo(col as u16, row as u16),
            SetBackgroundColor(tag_color(tag)),
            Print("  "),
            ResetColor,
        )?;
        out.flush()
    }
}

impl CellPainter for TermPainter {
    fn paint_cell(&mut self, p: Point, tag: ColorTag) {
        if let Err(e) = self.draw(p, tag) {
            log::warn!("paint of {p} failed: {e}");
        }
    }
}

// ---------------------------------------------------------------------------
// Input translation
// ---------------------------------------------------------------------------

/// Convert a terminal position to a board cell for a painter at `origin`.
pub fn cell_from_screen(col: u16, row: u16, origin: Point) -> Point {
    Point::new(
        (col as i32 - origin.x).div_euclid(CELL_COLS),
        row as i32 - origin.y,
    )
}

/// Translate a raw mouse event into an engine input.
///
/// Left click places the start marker first and the end marker afterwards
/// (`start_set` tells us which phase the session is in); right click
/// toggles a wall. Events outside `bounds` and non-press events are
/// dropped.
pub fn translate_mouse(
    ev: &MouseEvent,
    origin: Point,
    bounds: Range,
    start_set: bool,
) -> Option<(Point, InputIntent)> {
    let intent = match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if start_set {
                InputIntent::SetEnd
            } else {
                InputIntent::SetStart
            }
        }
        MouseEventKind::Down(MouseButton::Right) => InputIntent::ToggleWall,
        _ => return None,
    };
    let p = cell_from_screen(ev.column, ev.row, origin);
    if !bounds.contains(p) {
        return None;
    }
    Some((p, intent))
}

// ---------------------------------------------------------------------------
// Terminal setup
// ---------------------------------------------------------------------------

/// Enter raw mode, the alternate screen, and mouse capture.
pub fn init() -> io::Result<()> {
    terminal::enable_raw_mode()?;
    execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(ClearType::All),
        event::EnableMouseCapture,
    )
}

/// Restore the terminal. Errors are logged, not propagated: this runs on
/// the way out.
pub fn close() {
    let res = execute!(
        io::stdout(),
        event::DisableMouseCapture,
        cursor::Show,
        terminal::LeaveAlternateScreen,
    );
    if let Err(e) = res {
        log::warn!("terminal restore failed: {e}");
    }
    if let Err(e) = terminal::disable_raw_mode() {
        log::warn!("disabling raw mode failed: {e}");
    }
}
