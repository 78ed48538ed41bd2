//! Move application.
//!
//! `apply_move` never touches its input: it clones, edits the clone and hands
//! it back with the new position counted in the repetition ledger.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::game_state::slice_rotation::rotate_layer;
use crate::moves::move_descriptions::{CubeMove, Move, PieceMove};

pub fn apply_move(game_state: &GameState, mv: &Move) -> Result<GameState, ChessErrors> {
    let mut next = advance(game_state, mv)?;
    next.record_position();
    log::debug!(
        "applied {:?}; position seen {} time(s)",
        mv,
        next.current_repetition_count()
    );
    Ok(next)
}

/// Builds the successor state without counting it in the repetition ledger.
/// Used for trial moves during legality checks.
pub(crate) fn advance(game_state: &GameState, mv: &Move) -> Result<GameState, ChessErrors> {
    let mut next = match mv {
        Move::Piece(piece_move) => advance_piece_move(game_state, piece_move)?,
        Move::Cube(cube_move) => advance_cube_move(game_state, cube_move),
    };
    next.turn = game_state.turn.opposite();
    if game_state.turn == Color::Black {
        next.fullmove_number = next.fullmove_number.saturating_add(1);
    }
    next.last_move = Some(*mv);
    Ok(next)
}

fn advance_piece_move(game_state: &GameState, piece_move: &PieceMove) -> Result<GameState, ChessErrors> {
    let moving = game_state
        .board
        .piece_at(piece_move.from)
        .ok_or(ChessErrors::NoPieceOnSquare(piece_move.from))?;

    let mut next = game_state.clone();
    if piece_move.capture {
        next.board.remove(piece_move.to);
    }
    next.board.remove(piece_move.from);

    let mut updated = moving;
    updated.kind = piece_move.promotion.unwrap_or(moving.kind);
    updated.has_moved = true;
    next.board.place(piece_move.to, updated);

    if moving.kind == PieceKind::Pawn || piece_move.capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    }
    Ok(next)
}

fn advance_cube_move(game_state: &GameState, cube_move: &CubeMove) -> GameState {
    let mut next = game_state.clone();
    next.board = rotate_layer(&game_state.board, cube_move);
    next.en_passant_target = None;
    next.halfmove_clock = next.halfmove_clock.saturating_add(1);
    next
}
