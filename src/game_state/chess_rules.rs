//! Starting layout.
//!
//! White lines up on the front face (back rank `v = 0`, pawns on `v = 1`),
//! black on the back face (back rank `v = 7`, pawns on `v = 6`).

use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind};
use crate::game_state::game_state::GameState;
use crate::topology::cube_types::{Face, BOARD_SIZE};
use crate::topology::square::Square;

pub const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

struct SideSetup {
    color: Color,
    face: Face,
    back_rank: u8,
    pawn_rank: u8,
}

const SIDE_SETUPS: [SideSetup; 2] = [
    SideSetup {
        color: Color::White,
        face: Face::Front,
        back_rank: 0,
        pawn_rank: 1,
    },
    SideSetup {
        color: Color::Black,
        face: Face::Back,
        back_rank: BOARD_SIZE - 1,
        pawn_rank: BOARD_SIZE - 2,
    },
];

/// `(square, piece)` pairs of the standard starting position.
pub fn starting_layout() -> Vec<(Square, Piece)> {
    let mut entries = Vec::with_capacity(4 * BOARD_SIZE as usize);
    let mut next_id = 0u16;
    for setup in &SIDE_SETUPS {
        for (file, kind) in BACK_RANK.iter().enumerate() {
            let square = Square::new_unchecked(setup.face, file as u8, setup.back_rank);
            entries.push((square, Piece::new(PieceId(next_id), setup.color, *kind)));
            next_id += 1;
        }
        for file in 0..BOARD_SIZE {
            let square = Square::new_unchecked(setup.face, file, setup.pawn_rank);
            entries.push((square, Piece::new(PieceId(next_id), setup.color, PieceKind::Pawn)));
            next_id += 1;
        }
    }
    entries
}

pub fn build_initial_state() -> GameState {
    GameState::new_game()
}
