use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_shared::generate_pseudo_legal_moves;
use crate::topology::rays::DEFAULT_RAY_LIMIT;
use crate::topology::square::Square;

#[inline]
pub fn king_square(game_state: &GameState, color: Color) -> Option<Square> {
    game_state.board.king_square(color)
}

/// `false` when `color` has no king on the board.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_king_in_check_on(&game_state.board, color, DEFAULT_RAY_LIMIT)
}

pub(crate) fn is_king_in_check_on(board: &Board, color: Color, ray_limit: usize) -> bool {
    let Some(king_sq) = board.king_square(color) else {
        return false;
    };
    is_square_attacked_on(board, king_sq, color.opposite(), ray_limit)
}

/// Whether any `attacker_color` piece has a capturing move onto `square`.
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    is_square_attacked_on(&game_state.board, square, attacker_color, DEFAULT_RAY_LIMIT)
}

pub(crate) fn is_square_attacked_on(
    board: &Board,
    square: Square,
    attacker_color: Color,
    ray_limit: usize,
) -> bool {
    generate_pseudo_legal_moves(board, attacker_color, ray_limit)
        .iter()
        .any(|m| m.capture && m.to == square)
}

/// Squares of `attacker_color` pieces that capture onto `square`.
pub fn attackers_to_square(game_state: &GameState, square: Square, attacker_color: Color) -> Vec<Square> {
    let mut attackers: Vec<Square> = generate_pseudo_legal_moves(&game_state.board, attacker_color, DEFAULT_RAY_LIMIT)
        .into_iter()
        .filter(|m| m.capture && m.to == square)
        .map(|m| m.from)
        .collect();
    attackers.dedup();
    attackers
}
