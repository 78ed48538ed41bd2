//! Move values.
//!
//! A turn is either a piece move between two squares or a cube move that
//! turns one layer of the cube.

use crate::game_state::chess_types::PieceKind;
use crate::topology::cube_types::{Axis, RotationDirection};
use crate::topology::square::Square;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PieceMove {
    pub from: Square,
    pub to: Square,
    pub piece_kind: PieceKind,
    pub capture: bool,
    pub promotion: Option<PieceKind>,
}

impl PieceMove {
    pub const fn new(from: Square, to: Square, piece_kind: PieceKind, capture: bool) -> Self {
        Self {
            from,
            to,
            piece_kind,
            capture,
            promotion: None,
        }
    }
}

/// Turn of the layer whose `axis` component equals `layer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeMove {
    pub axis: Axis,
    pub layer: u8,
    pub direction: RotationDirection,
}

impl CubeMove {
    pub const fn new(axis: Axis, layer: u8, direction: RotationDirection) -> Self {
        Self {
            axis,
            layer,
            direction,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Move {
    Piece(PieceMove),
    Cube(CubeMove),
}

impl Move {
    pub fn as_piece_move(&self) -> Option<&PieceMove> {
        match self {
            Move::Piece(piece_move) => Some(piece_move),
            Move::Cube(_) => None,
        }
    }

    pub fn as_cube_move(&self) -> Option<&CubeMove> {
        match self {
            Move::Cube(cube_move) => Some(cube_move),
            Move::Piece(_) => None,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        matches!(self, Move::Piece(PieceMove { capture: true, .. }))
    }

    #[inline]
    pub fn is_promotion(&self) -> bool {
        matches!(self, Move::Piece(PieceMove { promotion: Some(_), .. }))
    }
}

impl From<PieceMove> for Move {
    fn from(piece_move: PieceMove) -> Self {
        Move::Piece(piece_move)
    }
}

impl From<CubeMove> for Move {
    fn from(cube_move: CubeMove) -> Self {
        Move::Cube(cube_move)
    }
}
