//! Whole-engine properties checked over many seeded random boards.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tile2048_core::{
    create_empty_board, has_moves, reduce_left, resolve, reverse, spawn, transpose, Board,
    Direction, SeededRng,
};

const SAMPLES: usize = 2_000;

/// Random board with a mix of empty cells and small tiles, so merges are common.
fn random_board(rng: &mut StdRng) -> Board {
    let mut cells = [0u32; 16];
    let density = rng.gen_range(0.2..1.0);
    for cell in cells.iter_mut() {
        if rng.gen_bool(density) {
            *cell = 1u32 << rng.gen_range(1..=5u32);
        }
    }
    Board::from_cells(&cells).unwrap()
}

fn boards(seed: u64) -> impl Iterator<Item = Board> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..SAMPLES).map(move |_| random_board(&mut rng))
}

#[test]
fn adapters_are_involutions() {
    for board in boards(1) {
        assert_eq!(transpose(transpose(board)), board);
        assert_eq!(reverse(reverse(board)), board);
    }
}

#[test]
fn no_op_moves_are_idempotent() {
    for board in boards(2) {
        for dir in Direction::ALL {
            let first = resolve(board, dir);
            if first.board == board {
                assert!(!first.changed);
                let second = resolve(first.board, dir);
                assert_eq!(second.board, board);
                assert!(!second.changed);
            } else {
                assert!(first.changed);
            }
        }
    }
}

#[test]
fn tile_sum_is_conserved_by_moves() {
    // Each merge of two v tiles scores 2v and replaces 2v worth of tiles with
    // one 2v tile, so the sum is conserved while the score grows.
    for board in boards(3) {
        for dir in Direction::ALL {
            let result = resolve(board, dir);
            assert_eq!(result.board.tile_sum(), board.tile_sum());
            let merges = board.tile_count() - result.board.tile_count();
            assert_eq!(result.score_delta == 0, merges == 0);
        }
    }
}

#[test]
fn tile_count_never_grows_on_move() {
    let mut rng = SeededRng::new(4);
    for board in boards(4) {
        for dir in Direction::ALL {
            let moved = resolve(board, dir);
            assert!(moved.board.tile_count() <= board.tile_count());
            let spawned = spawn(moved.board, &mut rng);
            if moved.board.empty_count() > 0 {
                assert_eq!(spawned.tile_count(), moved.board.tile_count() + 1);
            } else {
                assert_eq!(spawned, moved.board);
            }
        }
    }
}

#[test]
fn directions_reduce_to_left() {
    for board in boards(5) {
        let right = resolve(board, Direction::Right);
        let via_left = resolve(reverse(board), Direction::Left);
        assert_eq!(right.board, reverse(via_left.board));
        assert_eq!(right.score_delta, via_left.score_delta);

        let up = resolve(board, Direction::Up);
        let via_left = resolve(transpose(board), Direction::Left);
        assert_eq!(up.board, transpose(via_left.board));
        assert_eq!(up.score_delta, via_left.score_delta);

        let down = resolve(board, Direction::Down);
        let via_right = resolve(transpose(board), Direction::Right);
        assert_eq!(down.board, transpose(via_right.board));
        assert_eq!(down.score_delta, via_right.score_delta);
    }
}

#[test]
fn left_move_is_row_wise_reduction() {
    for board in boards(6) {
        let result = resolve(board, Direction::Left);
        let mut total = 0;
        for (row, out) in board.rows().iter().zip(result.board.rows()) {
            let (reduced, delta) = reduce_left(*row);
            assert_eq!(&reduced, out);
            total += delta;
        }
        assert_eq!(result.score_delta, total);
    }
}

#[test]
fn terminal_detection_matches_move_availability() {
    for board in boards(7) {
        let any_change = Direction::ALL
            .iter()
            .any(|&dir| resolve(board, dir).changed);
        assert_eq!(has_moves(board), any_change);
        if board.empty_count() > 0 {
            assert!(has_moves(board));
        }
    }
}

#[test]
fn moves_do_not_mutate_input() {
    for board in boards(8) {
        let copy = board;
        for dir in Direction::ALL {
            let _ = resolve(board, dir);
        }
        assert_eq!(board, copy);
    }
}

#[test]
fn end_to_end_single_merge() {
    let board = Board::try_from(vec![
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ])
    .unwrap();
    let result = resolve(board, Direction::Left);
    let expected: Vec<Vec<u32>> = vec![
        vec![4, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ];
    assert_eq!(Vec::<Vec<u32>>::from(result.board), expected);
    assert_eq!(result.score_delta, 4);
    assert_ne!(result.board, create_empty_board());
}
