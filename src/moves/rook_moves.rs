use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::PieceMove;
use crate::moves::slider_moves::push_slider_ray;
use crate::topology::rays::trace_ray;
use crate::topology::square::Square;
use crate::topology::stepper::ORTHOGONAL_DIRECTIONS;

pub fn generate_rook_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    ray_limit: usize,
    out: &mut Vec<PieceMove>,
) {
    for direction in ORTHOGONAL_DIRECTIONS {
        push_slider_ray(board, from, piece, trace_ray(from, direction, ray_limit), out);
    }
}
