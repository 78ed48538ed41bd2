use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_descriptions::{CubeMove, PieceMove};
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;
use crate::topology::cube_types::{ALL_AXES, ALL_ROTATION_DIRECTIONS, BOARD_SIZE};
use crate::topology::square::Square;

/// Number of distinct cube moves: 3 axes x N layers x 3 directions.
pub const CUBE_MOVE_COUNT: usize = ALL_AXES.len() * BOARD_SIZE as usize * ALL_ROTATION_DIRECTIONS.len();

pub fn generate_moves_for_piece(
    board: &Board,
    from: Square,
    piece: Piece,
    ray_limit: usize,
    out: &mut Vec<PieceMove>,
) {
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece, out),
        PieceKind::Knight => generate_knight_moves(board, from, piece, out),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece, ray_limit, out),
        PieceKind::Rook => generate_rook_moves(board, from, piece, ray_limit, out),
        PieceKind::Queen => generate_queen_moves(board, from, piece, ray_limit, out),
        PieceKind::King => generate_king_moves(board, from, piece, out),
    }
}

/// Every pseudo-legal piece move for `color`, in board order.
pub fn generate_pseudo_legal_moves(board: &Board, color: Color, ray_limit: usize) -> Vec<PieceMove> {
    let mut out = Vec::with_capacity(128);
    for (from, piece) in board.pieces_of(color) {
        generate_moves_for_piece(board, from, piece, ray_limit, &mut out);
    }
    out
}

/// All cube moves, axis then layer then direction.
pub fn all_cube_moves() -> impl Iterator<Item = CubeMove> {
    ALL_AXES.into_iter().flat_map(|axis| {
        (0..BOARD_SIZE).flat_map(move |layer| {
            ALL_ROTATION_DIRECTIONS
                .into_iter()
                .map(move |direction| CubeMove::new(axis, layer, direction))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::starting_layout;
    use crate::topology::cube_types::{Axis, RotationDirection};
    use crate::topology::rays::DEFAULT_RAY_LIMIT;
    use std::collections::HashSet;

    #[test]
    fn cube_moves_are_distinct_and_ordered() {
        let moves: Vec<CubeMove> = all_cube_moves().collect();
        assert_eq!(moves.len(), CUBE_MOVE_COUNT);
        assert_eq!(moves.len(), 72);
        assert_eq!(moves[0], CubeMove::new(Axis::X, 0, RotationDirection::Clockwise));
        assert_eq!(moves[1], CubeMove::new(Axis::X, 0, RotationDirection::CounterClockwise));
        assert_eq!(moves[71], CubeMove::new(Axis::Z, 7, RotationDirection::Half));
        let unique: HashSet<CubeMove> = moves.into_iter().collect();
        assert_eq!(unique.len(), CUBE_MOVE_COUNT);
    }

    #[test]
    fn pseudo_moves_only_come_from_own_pieces() {
        let mut board = Board::new_empty();
        for (square, piece) in starting_layout() {
            board.place(square, piece);
        }
        let white = generate_pseudo_legal_moves(&board, Color::White, DEFAULT_RAY_LIMIT);
        assert!(!white.is_empty());
        assert!(white
            .iter()
            .all(|m| board.piece_at(m.from).map(|p| p.color) == Some(Color::White)));
    }
}
