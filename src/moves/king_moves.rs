use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::PieceMove;
use crate::moves::slider_moves::push_landing;
use crate::topology::square::Square;
use crate::topology::stepper::{step, step_diagonal, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};

/// One step in each of the four cardinal and four diagonal directions.
///
/// Near a corner a diagonal can land on the same square as a cardinal step;
/// each destination is emitted once.
pub fn generate_king_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<PieceMove>) {
    let orthogonal = ORTHOGONAL_DIRECTIONS.iter().filter_map(|&d| step(from, d));
    let diagonal = DIAGONAL_DIRECTIONS
        .iter()
        .filter_map(|&(first, second)| step_diagonal(from, first, second));

    let mut targets: Vec<Square> = Vec::with_capacity(8);
    for to in orthogonal.chain(diagonal) {
        if to == from || targets.contains(&to) {
            continue;
        }
        targets.push(to);
        push_landing(board, from, to, piece, out);
    }
}
