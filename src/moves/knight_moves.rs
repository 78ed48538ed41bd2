use crate::game_state::board::Board;
use crate::game_state::chess_types::Piece;
use crate::moves::move_descriptions::PieceMove;
use crate::moves::slider_moves::push_landing;
use crate::topology::square::Square;
use crate::topology::stepper::{step, Direction};

use Direction::{East, North, South, West};

/// Knight jumps as three face-local legs: two along one axis, one across it.
pub const KNIGHT_VECTORS: [[Direction; 3]; 8] = [
    [North, North, East],
    [North, North, West],
    [South, South, East],
    [South, South, West],
    [East, East, North],
    [East, East, South],
    [West, West, North],
    [West, West, South],
];

fn follow_legs(from: Square, legs: &[Direction; 3]) -> Option<Square> {
    legs.iter().try_fold(from, |current, &leg| step(current, leg))
}

pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, out: &mut Vec<PieceMove>) {
    let mut targets: Vec<Square> = Vec::with_capacity(KNIGHT_VECTORS.len());
    for legs in &KNIGHT_VECTORS {
        let Some(to) = follow_legs(from, legs) else {
            continue;
        };
        if to == from || targets.contains(&to) {
            continue;
        }
        targets.push(to);
        push_landing(board, from, to, piece, out);
    }
}
