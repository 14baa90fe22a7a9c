//! End-to-end games through the public API
//!
//! Covers the starting layout, a full player/opponent exchange, and the
//! apply-then-undo round trip over many random positions.

use chess_core::{Board, Color, PieceKind, Square};
use chess_game::{GameConfig, GameState, OPPONENT, PLAYER, TurnStatus};
use std::time::Duration;

fn sq(row: u8, col: u8) -> Square {
    Square::new(row as i8, col as i8).unwrap()
}

fn seeded(seed: u64) -> GameState {
    GameState::new(GameConfig {
        seed: Some(seed),
        ..Default::default()
    })
}

#[test]
fn reset_produces_standard_material() {
    let mut game = seeded(5);
    for _ in 0..6 {
        if let Some(hint) = game.request_hint() {
            game.run_pending();
            game.select_piece(hint.from);
            game.apply_move(hint.from, hint.to);
            game.run_pending();
        }
    }
    game.reset_game();

    let board = game.board();
    let expected = [
        (PieceKind::Pawn, 8),
        (PieceKind::Rook, 2),
        (PieceKind::Knight, 2),
        (PieceKind::Bishop, 2),
        (PieceKind::Queen, 1),
        (PieceKind::King, 1),
    ];
    for color in [Color::White, Color::Black] {
        assert_eq!(board.pieces(color).count(), 16);
        for (kind, n) in expected {
            assert_eq!(board.count(kind, color), n, "{kind:?} {color:?}");
        }
    }
    assert_eq!(board, &Board::startpos());
    assert!(board.pieces(Color::White).all(|(_, pc)| !pc.has_moved));
}

#[test]
fn player_move_then_opponent_reply() {
    let mut game = seeded(21);
    assert!(game.select_piece_at(6, 4));
    assert_eq!(game.candidate_moves(), &[sq(5, 4), sq(4, 4)]);
    assert!(game.attempt_move(4, 4));

    let view = game.view();
    assert_eq!(view.move_count, 1);
    assert_eq!(view.status, TurnStatus::OpponentTurn);
    assert_eq!(view.status_label, "AI Thinking...");
    assert!(view.board.get(sq(6, 4)).is_none());
    assert!(view.board.get(sq(4, 4)).unwrap().has_moved);

    // the reply waits for the configured delay
    let wait = game.time_until_next_task().unwrap();
    assert_eq!(wait, Duration::from_millis(1000));
    game.advance(wait);

    assert_eq!(game.status(), TurnStatus::PlayerTurn);
    assert_eq!(game.move_count(), 2);
    assert_eq!(game.board().pieces(OPPONENT).count(), 16);
    assert_eq!(game.board().pieces(PLAYER).count(), 16);
}

#[test]
fn apply_then_undo_restores_position() {
    for seed in 0..8 {
        let mut game = seeded(seed);
        for _ in 0..20 {
            if game.status() != TurnStatus::PlayerTurn {
                break;
            }
            let Some(hint) = game.request_hint() else {
                break;
            };
            game.run_pending();

            let board = game.board().clone();
            let counts = (
                game.move_count(),
                game.captured(Color::White),
                game.captured(Color::Black),
            );

            assert!(game.select_piece(hint.from));
            assert!(game.apply_move(hint.from, hint.to));
            assert!(game.undo());

            assert_eq!(game.board(), &board, "seed {seed}");
            assert_eq!(
                (
                    game.move_count(),
                    game.captured(Color::White),
                    game.captured(Color::Black)
                ),
                counts
            );
            assert_eq!(game.run_pending(), 0, "undo must cancel the reply");

            // play it for real this time
            game.select_piece(hint.from);
            game.apply_move(hint.from, hint.to);
            game.run_pending();
        }
    }
}

#[test]
fn counters_track_history() {
    let mut game = GameState::new(GameConfig {
        seed: Some(99),
        opponent_sampling: random_engine::SamplingMode::WithoutReplacement,
        ..Default::default()
    });
    for _ in 0..40 {
        let Some(hint) = game.request_hint() else {
            break;
        };
        game.run_pending();
        game.select_piece(hint.from);
        game.apply_move(hint.from, hint.to);
        game.run_pending();
    }

    let history = game.history();
    assert_eq!(game.move_count() as usize, history.len());
    let captured_white = history
        .iter()
        .filter(|r| r.captured.is_some_and(|p| p.color == Color::White))
        .count();
    let captured_black = history
        .iter()
        .filter(|r| r.captured.is_some_and(|p| p.color == Color::Black))
        .count();
    assert_eq!(game.captured(Color::White) as usize, captured_white);
    assert_eq!(game.captured(Color::Black) as usize, captured_black);
    assert_eq!(
        game.board().pieces(Color::White).count() + captured_white,
        16
    );
    assert_eq!(
        game.board().pieces(Color::Black).count() + captured_black,
        16
    );
}
