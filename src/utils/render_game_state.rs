//! Terminal-oriented Unicode cube renderer.
//!
//! Lays the six faces out as an unfolded net for debugging and diagnostics:
//!
//! ```text
//!          top
//! left  front  right  back
//!         bottom
//! ```
//!
//! Every face is drawn in its own frame, highest rank first.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::topology::cube_types::{Face, BOARD_SIZE};
use crate::topology::square::Square;

const EMPTY_CELL: char = '·';
/// Width of one rendered face row plus the gap that follows it.
const FACE_STRIDE: usize = 2 * BOARD_SIZE as usize;

/// Render the whole cube to a Unicode string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let board = game_state.board();
    let indent = " ".repeat(FACE_STRIDE);
    let mut out = String::new();

    push_label_row(&mut out, &[(1, Face::Top)]);
    for row in face_rows(board, Face::Top) {
        out.push_str(&indent);
        out.push_str(&row);
        out.push('\n');
    }

    let band = [Face::Left, Face::Front, Face::Right, Face::Back];
    push_label_row(&mut out, &[(0, Face::Left), (1, Face::Front), (2, Face::Right), (3, Face::Back)]);
    let band_rows: Vec<Vec<String>> = band.iter().map(|&face| face_rows(board, face)).collect();
    for r in 0..BOARD_SIZE as usize {
        let line: Vec<&str> = band_rows.iter().map(|rows| rows[r].as_str()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    push_label_row(&mut out, &[(1, Face::Bottom)]);
    for row in face_rows(board, Face::Bottom) {
        out.push_str(&indent);
        out.push_str(&row);
        out.push('\n');
    }

    out.push_str(&format!(
        "{} to move, move {}",
        game_state.turn().name(),
        game_state.fullmove_number()
    ));
    out
}

fn push_label_row(out: &mut String, slots: &[(usize, Face)]) {
    let mut line = String::new();
    for &(slot, face) in slots {
        let column = slot * FACE_STRIDE;
        while line.chars().count() < column {
            line.push(' ');
        }
        line.push_str(face.name());
    }
    out.push_str(&line);
    out.push('\n');
}

fn face_rows(board: &Board, face: Face) -> Vec<String> {
    (0..BOARD_SIZE)
        .rev()
        .map(|v| {
            let cells: Vec<String> = (0..BOARD_SIZE)
                .map(|u| {
                    board
                        .piece_at(Square::new_unchecked(face, u, v))
                        .map_or(EMPTY_CELL, piece_to_unicode)
                        .to_string()
                })
                .collect();
            cells.join(" ")
        })
        .collect()
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::White, PieceKind::Pawn) => '♙',
        (Color::White, PieceKind::Knight) => '♘',
        (Color::White, PieceKind::Bishop) => '♗',
        (Color::White, PieceKind::Rook) => '♖',
        (Color::White, PieceKind::Queen) => '♕',
        (Color::White, PieceKind::King) => '♔',
        (Color::Black, PieceKind::Pawn) => '♟',
        (Color::Black, PieceKind::Knight) => '♞',
        (Color::Black, PieceKind::Bishop) => '♝',
        (Color::Black, PieceKind::Rook) => '♜',
        (Color::Black, PieceKind::Queen) => '♛',
        (Color::Black, PieceKind::King) => '♚',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_renders_every_square_once() {
        let text = render_game_state(&GameState::new_game());
        assert_eq!(text.chars().filter(|&c| c == '♙').count(), 8);
        assert_eq!(text.chars().filter(|&c| c == '♟').count(), 8);
        assert_eq!(text.chars().filter(|&c| c == '♔').count(), 1);
        assert_eq!(text.chars().filter(|&c| c == '♚').count(), 1);
        assert_eq!(text.chars().filter(|&c| c == EMPTY_CELL).count(), 384 - 32);
        assert!(text.ends_with("white to move, move 1"));
    }

    #[test]
    fn front_face_prints_highest_rank_first() {
        let rows = face_rows(GameState::new_game().board(), Face::Front);
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[7], "♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
        assert_eq!(rows[6], "♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙");
        assert_eq!(rows[0], "· · · · · · · ·");
    }
}
