use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::PieceMove;
use crate::topology::square::Square;

/// Walks one ray for a sliding piece.
///
/// Empty squares are quiet moves; the first occupied square ends the ray and
/// is a capture when it holds an enemy. A ray that comes back to a square it
/// already produced (after a fold or a full lap) ends there.
pub fn push_slider_ray(
    board: &Board,
    from: Square,
    piece: Piece,
    ray: impl Iterator<Item = Square>,
    out: &mut Vec<PieceMove>,
) {
    let mut seen: Vec<Square> = Vec::new();
    for to in ray {
        if seen.contains(&to) {
            break;
        }
        seen.push(to);
        match board.piece_at(to) {
            Some(occupant) => {
                if occupant.color != piece.color {
                    out.push(PieceMove::new(from, to, piece.kind, true));
                }
                break;
            }
            None => out.push(PieceMove::new(from, to, piece.kind, false)),
        }
    }
}

/// Single-square landing used by king and knight: empty or enemy only.
pub fn push_landing(board: &Board, from: Square, to: Square, piece: Piece, out: &mut Vec<PieceMove>) {
    match board.piece_at(to) {
        Some(occupant) if occupant.color == piece.color => {}
        Some(_) => out.push(PieceMove::new(from, to, piece.kind, true)),
        None => out.push(PieceMove::new(from, to, piece.kind, false)),
    }
}
