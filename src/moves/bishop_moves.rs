use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::PieceMove;
use crate::moves::slider_moves::push_slider_ray;
use crate::topology::rays::trace_diagonal_ray;
use crate::topology::square::Square;
use crate::topology::stepper::DIAGONAL_DIRECTIONS;

pub fn generate_bishop_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    ray_limit: usize,
    out: &mut Vec<PieceMove>,
) {
    for diagonal in DIAGONAL_DIRECTIONS {
        push_slider_ray(
            board,
            from,
            piece,
            trace_diagonal_ray(from, diagonal, ray_limit),
            out,
        );
    }
}
