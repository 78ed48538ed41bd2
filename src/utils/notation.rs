//! Human-readable labels for squares and moves.
//!
//! Square label: face letter (`F B L R T D`), file letter `a + u`, rank digit
//! `v + 1`, e.g. `Fe2`. Piece move: piece symbol (none for pawns), from label,
//! `-` or `x`, to label, optional `=Q`, e.g. `NFb1xLh2`. Cube move: axis,
//! `layer + 1`, then `CW`, `CCW` or `180`, e.g. `Y1CW`.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::{CubeMove, Move, PieceMove};
use crate::topology::cube_types::{Axis, Face, RotationDirection, ALL_ROTATION_DIRECTIONS, BOARD_SIZE};
use crate::topology::square::Square;

const SQUARE_LABEL_LEN: usize = 3;

pub const fn face_letter(face: Face) -> char {
    match face {
        Face::Front => 'F',
        Face::Back => 'B',
        Face::Left => 'L',
        Face::Right => 'R',
        Face::Top => 'T',
        Face::Bottom => 'D',
    }
}

pub fn face_from_letter(letter: char) -> Option<Face> {
    match letter {
        'F' => Some(Face::Front),
        'B' => Some(Face::Back),
        'L' => Some(Face::Left),
        'R' => Some(Face::Right),
        'T' => Some(Face::Top),
        'D' => Some(Face::Bottom),
        _ => None,
    }
}

pub fn square_label(square: Square) -> String {
    let file = char::from(b'a' + square.u());
    let rank = char::from(b'1' + square.v());
    format!("{}{file}{rank}", face_letter(square.face()))
}

pub fn parse_square_label(label: &str) -> Result<Square, ChessErrors> {
    let invalid = || ChessErrors::InvalidSquareString(label.to_owned());
    let chars: Vec<char> = label.chars().collect();
    if chars.len() != SQUARE_LABEL_LEN {
        return Err(invalid());
    }
    let face = face_from_letter(chars[0]).ok_or_else(invalid)?;
    let last_file = char::from(b'a' + BOARD_SIZE - 1);
    let last_rank = char::from(b'1' + BOARD_SIZE - 1);
    if !('a'..=last_file).contains(&chars[1]) || !('1'..=last_rank).contains(&chars[2]) {
        return Err(invalid());
    }
    let u = chars[1] as u8 - b'a';
    let v = chars[2] as u8 - b'1';
    Square::new(face, u, v)
}

pub fn cube_move_label(cube_move: &CubeMove) -> String {
    format!(
        "{}{}{}",
        cube_move.axis.symbol(),
        cube_move.layer + 1,
        cube_move.direction.label()
    )
}

pub fn piece_move_label(piece_move: &PieceMove) -> String {
    let mut out = String::with_capacity(10);
    out.push_str(piece_move.piece_kind.symbol());
    out.push_str(&square_label(piece_move.from));
    out.push(if piece_move.capture { 'x' } else { '-' });
    out.push_str(&square_label(piece_move.to));
    if let Some(promoted) = piece_move.promotion {
        out.push('=');
        out.push_str(promoted.symbol());
    }
    out
}

pub fn describe_move(mv: &Move) -> String {
    match mv {
        Move::Piece(piece_move) => piece_move_label(piece_move),
        Move::Cube(cube_move) => cube_move_label(cube_move),
    }
}

/// Parses a label produced by [`describe_move`].
pub fn parse_move(label: &str) -> Result<Move, ChessErrors> {
    let trimmed = label.trim();
    match trimmed.chars().next() {
        Some('X' | 'Y' | 'Z') => parse_cube_move(trimmed).map(Move::Cube),
        Some(_) => parse_piece_move(trimmed).map(Move::Piece),
        None => Err(ChessErrors::InvalidNotation(label.to_owned())),
    }
}

fn parse_cube_move(label: &str) -> Result<CubeMove, ChessErrors> {
    let invalid = || ChessErrors::InvalidNotation(label.to_owned());
    let mut chars = label.chars();
    let axis = match chars.next() {
        Some('X') => Axis::X,
        Some('Y') => Axis::Y,
        Some('Z') => Axis::Z,
        _ => return Err(invalid()),
    };
    let digit = chars
        .next()
        .and_then(|c| c.to_digit(10))
        .filter(|d| (1..=u32::from(BOARD_SIZE)).contains(d))
        .ok_or_else(invalid)?;
    let layer = digit as u8 - 1;
    let rest = chars.as_str();
    let direction = ALL_ROTATION_DIRECTIONS
        .into_iter()
        .find(|d: &RotationDirection| d.label() == rest)
        .ok_or_else(invalid)?;
    Ok(CubeMove::new(axis, layer, direction))
}

fn parse_piece_move(label: &str) -> Result<PieceMove, ChessErrors> {
    let invalid = || ChessErrors::InvalidNotation(label.to_owned());

    let (body, promotion) = match label.split_once('=') {
        Some((body, promoted)) => {
            let mut symbol = promoted.chars();
            let kind = symbol
                .next()
                .and_then(PieceKind::from_symbol)
                .filter(|_| symbol.next().is_none())
                .ok_or_else(invalid)?;
            (body, Some(kind))
        }
        None => (label, None),
    };

    // A square label is three characters; a leading piece symbol makes the
    // body one longer.
    let chars: Vec<char> = body.chars().collect();
    let (piece_kind, rest) = match chars.len() {
        7 => (PieceKind::Pawn, &chars[..]),
        8 => (PieceKind::from_symbol(chars[0]).ok_or_else(invalid)?, &chars[1..]),
        _ => return Err(invalid()),
    };

    let from: String = rest[..3].iter().collect();
    let to: String = rest[4..].iter().collect();
    let capture = match rest[3] {
        'x' => true,
        '-' => false,
        _ => return Err(invalid()),
    };
    let from = parse_square_label(&from).map_err(|_| invalid())?;
    let to = parse_square_label(&to).map_err(|_| invalid())?;

    let mut piece_move = PieceMove::new(from, to, piece_kind, capture);
    piece_move.promotion = promotion;
    Ok(piece_move)
}
