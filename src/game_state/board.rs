//! Piece placement over all six faces.
//!
//! One cell per square, indexed by `Square::index`, so lookups on the hot
//! paths (ray walks, attack scans) never hash or parse a key.

use crate::game_state::chess_types::{Color, Piece, PieceKind};
use crate::topology::cube_types::SQUARE_COUNT;
use crate::topology::square::Square;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Piece>; SQUARE_COUNT],
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [None; SQUARE_COUNT],
        }
    }
}

impl Board {
    pub fn new_empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.index()]
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.cells[square.index()].is_some()
    }

    /// Places `piece`, returning whatever was there before.
    #[inline]
    pub fn place(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.cells[square.index()].replace(piece)
    }

    #[inline]
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.index()].take()
    }

    /// Occupied squares in index order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter_map(|(index, cell)| Some((Square::from_index(index)?, (*cell)?)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
