//! Tile Spawner and the randomness source it draws from.

use log::trace;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::Board;

/// Probability that a spawned tile is a 2 rather than a 4.
pub const TWO_PROBABILITY: f64 = 0.9;

/// The only source of non-determinism in the engine.
///
/// Implement this to script spawns in tests; use [`SeededRng`] for play.
pub trait TileRng {
    /// Uniform integer in `0..upper`. `upper` is always non-zero.
    fn uniform(&mut self, upper: usize) -> usize;

    /// Returns true with probability `p`.
    fn chance(&mut self, p: f64) -> bool;
}

impl<R: TileRng + ?Sized> TileRng for &mut R {
    fn uniform(&mut self, upper: usize) -> usize {
        (**self).uniform(upper)
    }

    fn chance(&mut self, p: f64) -> bool {
        (**self).chance(p)
    }
}

/// Deterministic, seedable randomness for reproducible games.
#[derive(Debug, Clone)]
pub struct SeededRng {
    rng: SmallRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        SeededRng {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileRng for SeededRng {
    fn uniform(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }
}

/// Place one new tile in a uniformly chosen empty cell.
///
/// The tile is a 2 with probability [`TWO_PROBABILITY`], otherwise a 4. A full
/// board is returned unchanged.
pub fn spawn<R: TileRng + ?Sized>(board: Board, rng: &mut R) -> Board {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return board;
    }

    let (row, col) = empty[rng.uniform(empty.len())];
    let value = if rng.chance(TWO_PROBABILITY) { 2 } else { 4 };
    trace!("spawned {} at ({}, {})", value, row, col);
    board.with_cell(row, col, value)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::collections::VecDeque;

    /// Replays fixed cell indices and fixed 2-or-4 outcomes.
    pub(crate) struct ScriptedRng {
        pub cells: VecDeque<usize>,
        pub twos: VecDeque<bool>,
    }

    impl ScriptedRng {
        pub(crate) fn new(cells: &[usize], twos: &[bool]) -> Self {
            ScriptedRng {
                cells: cells.iter().copied().collect(),
                twos: twos.iter().copied().collect(),
            }
        }
    }

    impl TileRng for ScriptedRng {
        fn uniform(&mut self, upper: usize) -> usize {
            let idx = self.cells.pop_front().unwrap_or(0);
            assert!(idx < upper, "scripted index {} out of 0..{}", idx, upper);
            idx
        }

        fn chance(&mut self, _p: f64) -> bool {
            self.twos.pop_front().unwrap_or(true)
        }
    }

    #[test]
    fn test_spawn_picks_scripted_cell() {
        let mut rng = ScriptedRng::new(&[5], &[true]);
        let board = spawn(Board::empty(), &mut rng);
        assert_eq!(board.get(1, 1), 2);
        assert_eq!(board.tile_count(), 1);
    }

    #[test]
    fn test_spawn_four() {
        let mut rng = ScriptedRng::new(&[0], &[false]);
        let board = spawn(Board::empty(), &mut rng);
        assert_eq!(board.get(0, 0), 4);
    }

    #[test]
    fn test_spawn_indexes_empty_cells_only() {
        let start = Board::from_rows([[2, 2, 2, 2], [2, 0, 2, 2], [2, 2, 2, 2], [2, 2, 2, 0]]);
        let mut rng = ScriptedRng::new(&[1], &[false]);
        let board = spawn(start, &mut rng);
        assert_eq!(board.get(3, 3), 4);
        assert_eq!(board.get(1, 1), 0);
        assert_eq!(start.get(3, 3), 0);
    }

    #[test]
    fn test_spawn_full_board_is_noop() {
        let full = Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        let mut rng = ScriptedRng::new(&[], &[]);
        assert_eq!(spawn(full, &mut rng), full);
    }

    #[test]
    fn test_spawn_adds_exactly_one_tile() {
        let mut rng = SeededRng::new(7);
        let mut board = Board::empty();
        for expected in 1..=16 {
            let next = spawn(board, &mut rng);
            assert_eq!(next.tile_count(), expected);
            let diffs = board
                .cells()
                .iter()
                .zip(next.cells().iter())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(diffs, 1);
            board = next;
        }
        assert!(board.cells().iter().all(|&v| v == 2 || v == 4));
    }

    #[test]
    fn test_seeded_determinism() {
        let mut a = SeededRng::new(12345);
        let mut b = SeededRng::new(12345);
        let x = spawn(spawn(Board::empty(), &mut a), &mut a);
        let y = spawn(spawn(Board::empty(), &mut b), &mut b);
        assert_eq!(x, y);
    }

    #[test]
    fn test_value_distribution() {
        let mut rng = SeededRng::new(99);
        let trials = 10_000;
        let fours = (0..trials)
            .filter(|_| spawn(Board::empty(), &mut rng).max_tile() == 4)
            .count();
        // Expect about 1000; allow wide slack.
        assert!((700..1300).contains(&fours), "got {} fours", fours);
    }

    #[test]
    fn test_cell_choice_is_uniform_over_empty_cells() {
        let start = Board::from_rows([[2, 4, 2, 4], [4, 0, 4, 2], [2, 4, 0, 4], [4, 2, 4, 0]]);
        let empty = start.empty_cells();
        assert_eq!(empty, vec![(1, 1), (2, 2), (3, 3)]);

        let mut rng = SeededRng::new(2024);
        let trials = 9_000;
        let mut hits = [0usize; 3];
        for _ in 0..trials {
            let next = spawn(start, &mut rng);
            assert_eq!(next.tile_count(), start.tile_count() + 1);
            for (r, row) in start.rows().iter().enumerate() {
                for (c, &value) in row.iter().enumerate() {
                    if value != 0 {
                        assert_eq!(next.get(r, c), value, "filled cell ({}, {}) changed", r, c);
                    }
                }
            }
            let idx = empty
                .iter()
                .position(|&(r, c)| next.get(r, c) != 0)
                .expect("one empty cell gets the tile");
            hits[idx] += 1;
        }
        // Expect about 3000 each.
        for (cell, &count) in empty.iter().zip(&hits) {
            assert!((2700..3300).contains(&count), "cell {:?} hit {} times", cell, count);
        }
    }
}
