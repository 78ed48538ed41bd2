//! Pawn pushes and captures.
//!
//! "Forward" is face-local north for white and south for black, carried
//! across edges by the stepper. A pawn that lands on a square with no further
//! forward neighbour promotes to a queen.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::moves::move_descriptions::PieceMove;
use crate::topology::square::Square;
use crate::topology::stepper::{has_forward_neighbor, step, step_diagonal, Direction};

pub const fn forward_direction(color: Color) -> Direction {
    match color {
        Color::White => Direction::North,
        Color::Black => Direction::South,
    }
}

pub fn generate_pawn_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<PieceMove>) {
    let forward = forward_direction(piece.color);

    if let Some(one) = step(from, forward) {
        if !board.is_occupied(one) {
            push_pawn_move(from, one, piece, false, forward, out);

            // No double step through a promotion square.
            if !piece.has_moved && has_forward_neighbor(one, forward) {
                if let Some(two) = step(one, forward) {
                    if two != from && !board.is_occupied(two) {
                        push_pawn_move(from, two, piece, false, forward, out);
                    }
                }
            }
        }
    }

    for side in [Direction::East, Direction::West] {
        let Some(to) = step_diagonal(from, forward, side) else {
            continue;
        };
        if let Some(target) = board.piece_at(to) {
            if target.color != piece.color {
                push_pawn_move(from, to, piece, true, forward, out);
            }
        }
    }
}

fn push_pawn_move(
    from: Square,
    to: Square,
    piece: Piece,
    capture: bool,
    forward: Direction,
    out: &mut Vec<PieceMove>,
) {
    let mut mv = PieceMove::new(from, to, piece.kind, capture);
    if !has_forward_neighbor(to, forward) {
        mv.promotion = Some(PieceKind::Queen);
    }
    out.push(mv);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceId;
    use crate::topology::cube_types::Face;

    fn sq(face: Face, u: u8, v: u8) -> Square {
        Square::new(face, u, v).expect("test square should be valid")
    }

    fn pawn(color: Color, has_moved: bool) -> Piece {
        let mut piece = Piece::new(PieceId(0), color, PieceKind::Pawn);
        piece.has_moved = has_moved;
        piece
    }

    #[test]
    fn unmoved_pawn_may_double_step() {
        let mut board = Board::new_empty();
        let from = sq(Face::Front, 3, 1);
        let white = pawn(Color::White, false);
        board.place(from, white);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, white, &mut moves);
        let targets: Vec<Square> = moves.iter().map(|m| m.to).collect();
        assert_eq!(targets, vec![sq(Face::Front, 3, 2), sq(Face::Front, 3, 3)]);
    }

    #[test]
    fn moved_pawn_single_steps_only() {
        let mut board = Board::new_empty();
        let from = sq(Face::Back, 5, 6);
        let black = pawn(Color::Black, true);
        board.place(from, black);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, black, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq(Face::Back, 5, 5));
    }

    #[test]
    fn blocked_pawn_cannot_push() {
        let mut board = Board::new_empty();
        let from = sq(Face::Front, 3, 1);
        let white = pawn(Color::White, false);
        board.place(from, white);
        board.place(sq(Face::Front, 3, 2), Piece::new(PieceId(1), Color::Black, PieceKind::Knight));

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, white, &mut moves);
        assert!(moves.is_empty());
    }

    #[test]
    fn pawn_captures_diagonally_forward() {
        let mut board = Board::new_empty();
        let from = sq(Face::Front, 3, 3);
        let white = pawn(Color::White, true);
        board.place(from, white);
        board.place(sq(Face::Front, 4, 4), Piece::new(PieceId(1), Color::Black, PieceKind::Rook));
        board.place(sq(Face::Front, 2, 4), Piece::new(PieceId(2), Color::White, PieceKind::Rook));

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, white, &mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == sq(Face::Front, 4, 4) && m.capture));
        assert!(moves.iter().any(|m| m.to == sq(Face::Front, 3, 4) && !m.capture));
    }

    #[test]
    fn white_promotes_at_the_top_seam() {
        let mut board = Board::new_empty();
        let from = sq(Face::Top, 3, 6);
        let white = pawn(Color::White, true);
        board.place(from, white);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, white, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq(Face::Top, 3, 7));
        assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn black_promotes_at_the_back_seam() {
        let mut board = Board::new_empty();
        let from = sq(Face::Back, 2, 1);
        let black = pawn(Color::Black, true);
        board.place(from, black);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, black, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq(Face::Back, 2, 0));
        assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn crossing_the_front_edge_does_not_promote() {
        let mut board = Board::new_empty();
        let from = sq(Face::Front, 3, 7);
        let white = pawn(Color::White, true);
        board.place(from, white);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, white, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq(Face::Top, 3, 0));
        assert_eq!(moves[0].promotion, None);
    }

    #[test]
    fn unmoved_pawn_stops_on_its_promotion_square() {
        // A layer turn can carry an unmoved pawn next to its promotion rank.
        let mut board = Board::new_empty();
        let from = sq(Face::Back, 6, 6);
        let white = pawn(Color::White, false);
        board.place(from, white);

        let mut moves = Vec::new();
        generate_pawn_moves(&board, from, white, &mut moves);
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, sq(Face::Back, 6, 7));
        assert_eq!(moves[0].promotion, Some(PieceKind::Queen));
    }
}
