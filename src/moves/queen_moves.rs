use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::move_descriptions::PieceMove;
use crate::moves::rook_moves::generate_rook_moves;
use crate::topology::square::Square;

/// Rook rays then bishop rays.
pub fn generate_queen_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    ray_limit: usize,
    out: &mut Vec<PieceMove>,
) {
    generate_rook_moves(board, from, piece, ray_limit, out);
    generate_bishop_moves(board, from, piece, ray_limit, out);
}
