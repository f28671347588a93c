//! Mazeboard — an interactive grid-pathfinding visualizer for the terminal.
//!
//! A 20×20 board renders as colored blocks. Left click places the start
//! marker, then the end marker; right click toggles walls; `m` regenerates
//! the maze; `1`–`4` animate BFS, DFS, Dijkstra and A*.

use std::io::{self, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute,
    style::Print,
    terminal::{self, ClearType},
};

use gridpath_core::{Error, Point};
use gridpath_crossterm::{self as term, TermPainter};
use gridpath_search::{Algorithm, SearchOutcome};
use gridpath_viz::{Animator, Context, DEFAULT_WALL_PROBABILITY, Session};

const BOARD_WIDTH: i32 = 20;
const BOARD_HEIGHT: i32 = 20;
/// Board cell (0, 0) lands here, leaving row 0 for the help line.
const BOARD_ORIGIN: Point = Point::new(0, 1);

const HELP: &str =
    "m: new maze   1: bfs  2: dfs  3: dijkstra  4: astar   left: start/end  right: wall   q: quit";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    term::init()?;
    let result = run();
    term::close();
    result
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(BOARD_WIDTH, BOARD_HEIGHT);
    let mut painter = TermPainter::new(BOARD_ORIGIN);
    let animator = Animator::default();
    let ctx = Context::new();
    let mut rng = rand::rng();

    print_line(0, HELP)?;
    session.generate_maze(&mut rng, DEFAULT_WALL_PROBABILITY, &mut painter)?;
    status("click a start cell")?;

    loop {
        match event::read()? {
            Event::Key(KeyEvent { code, .. }) => match code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('m') => {
                    match session.generate_maze(&mut rng, DEFAULT_WALL_PROBABILITY, &mut painter) {
                        Ok(()) => status("maze regenerated, click a start cell")?,
                        Err(e) => status(&e.to_string())?,
                    }
                }
                KeyCode::Char(c @ '1'..='4') => {
                    let algorithm = Algorithm::ALL[(c as usize) - ('1' as usize)];
                    status(&format!("running {algorithm}..."))?;
                    match session.run_search(algorithm, &mut painter, &animator, &ctx) {
                        Ok(SearchOutcome::Path(path)) => {
                            status(&format!("{algorithm}: path of {} cells", path.len()))?
                        }
                        Ok(SearchOutcome::NoPath) => status("no path found!")?,
                        Err(Error::InputsNotReady) => {
                            status("please set both start and end cells!")?
                        }
                        Err(e) => status(&e.to_string())?,
                    }
                }
                _ => {}
            },
            Event::Mouse(me) => {
                let translated = term::translate_mouse(
                    &me,
                    BOARD_ORIGIN,
                    session.board().bounds(),
                    session.start().is_some(),
                );
                if let Some((p, intent)) = translated {
                    match session.apply_input(p, intent, &mut painter) {
                        Ok(()) => {
                            if session.end().is_some() {
                                status("press 1-4 to run a search")?;
                            } else if session.start().is_some() {
                                status("click an end cell")?;
                            }
                        }
                        Err(e) => status(&e.to_string())?,
                    }
                }
            }
            _ => {}
        }
    }

    Ok(())
}

/// Overwrite one full terminal line with `text`.
fn print_line(row: u16, text: &str) -> io::Result<()> {
    let mut out = io::stdout();
    execute!(
        out,
        cursor::MoveTo(0, row),
        terminal::Clear(ClearType::CurrentLine),
        Print(text),
    )?;
    out.flush()
}

/// The status line sits just below the board.
fn status(text: &str) -> io::Result<()> {
    print_line((BOARD_ORIGIN.y + BOARD_HEIGHT + 1) as u16, text)
}
