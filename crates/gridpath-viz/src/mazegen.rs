//! Randomized maze generation.

use gridpath_core::Board;
use rand::{Rng, RngExt};

/// Wall probability used by the interactive board.
pub const DEFAULT_WALL_PROBABILITY: f64 = 0.35;

/// Replace the board's walls: every cell independently becomes a wall with
/// probability `wall_probability`, else open.
///
/// The whole board is rebuilt from defaults first, so no search-scratch
/// state survives either. Walls are a pure function of `rng` and the
/// probability. Values outside `[0, 1]` are clamped.
pub fn generate<R: Rng>(board: &mut Board, rng: &mut R, wall_probability: f64) {
    let p = wall_probability.clamp(0.0, 1.0);
    board.clear();
    for point in board.bounds().iter() {
        if rng.random_bool(p) {
            // In bounds by construction.
            let _ = board.set_wall(point, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath_core::Point;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn probability_zero_leaves_board_open() {
        let mut board = Board::new(10, 10);
        let mut rng = StdRng::seed_from_u64(1);
        generate(&mut board, &mut rng, 0.0);
        assert_eq!(board.count_fn(|_, c| c.wall), 0);
    }

    #[test]
    fn probability_one_walls_everything() {
        let mut board = Board::new(10, 10);
        let mut rng = StdRng::seed_from_u64(1);
        generate(&mut board, &mut rng, 1.0);
        assert_eq!(board.count_fn(|_, c| c.wall), 100);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let mut a = Board::new(20, 20);
        let mut b = Board::new(20, 20);
        generate(&mut a, &mut StdRng::seed_from_u64(42), 0.35);
        generate(&mut b, &mut StdRng::seed_from_u64(42), 0.35);
        for (pa, pb) in a.iter().zip(b.iter()) {
            assert_eq!(pa, pb);
        }
    }

    #[test]
    fn generation_discards_previous_state() {
        let mut board = Board::new(5, 5);
        board.set_wall(Point::new(0, 0), true).unwrap();
        board.at_mut(Point::new(1, 1)).unwrap().visited = true;
        let mut rng = StdRng::seed_from_u64(3);
        generate(&mut board, &mut rng, 0.0);
        assert!(!board.is_wall(Point::new(0, 0)));
        assert!(!board.at(Point::new(1, 1)).unwrap().visited);
    }
}
