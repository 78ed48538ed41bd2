//! Immutable game snapshots.
//!
//! A `GameState` is built once (from a layout) and every applied move yields
//! a fresh one; nothing mutates a state after it is handed out. Undo/redo is
//! therefore just keeping older snapshots around. The repetition ledger sits
//! behind an `Arc` so cloning a state for a trial move stays cheap.

use std::collections::HashMap;
use std::sync::Arc;

use crate::chess_errors::ChessErrors;
use crate::game_state::board::Board;
use crate::game_state::chess_rules::starting_layout;
use crate::game_state::chess_types::*;
use crate::moves::move_descriptions::Move;
use crate::topology::square::Square;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,

    // Carried for completeness; move generation never reads these.
    pub(crate) castling: [CastlingRights; 2],
    pub(crate) en_passant_target: Option<Square>,

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    pub(crate) repetition: Arc<HashMap<String, u32>>,
    pub(crate) last_move: Option<Move>,
}

impl GameState {
    /// Builds a white-to-move state from explicit placements and records it
    /// once in the repetition ledger.
    pub fn from_squares(entries: &[(Square, Piece)]) -> Result<Self, ChessErrors> {
        Self::from_squares_with_turn(entries, Color::White)
    }

    /// Same as [`GameState::from_squares`] with `turn` to move.
    pub fn from_squares_with_turn(entries: &[(Square, Piece)], turn: Color) -> Result<Self, ChessErrors> {
        let mut board = Board::new_empty();
        for (square, piece) in entries {
            if board.place(*square, *piece).is_some() {
                return Err(ChessErrors::SquareOccupied(*square));
            }
        }
        let mut state = Self {
            board,
            turn,
            castling: [CastlingRights::default(); 2],
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            repetition: Arc::new(HashMap::new()),
            last_move: None,
        };
        state.record_position();
        Ok(state)
    }

    pub fn new_game() -> Self {
        Self::from_squares(&starting_layout()).expect("starting layout should never overlap")
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn castling_rights(&self, color: Color) -> CastlingRights {
        self.castling[color.index()]
    }

    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    /// How often the position with this fingerprint has occurred in the game
    /// that produced this state.
    pub fn repetition_count(&self, fingerprint: &str) -> u32 {
        self.repetition.get(fingerprint).copied().unwrap_or(0)
    }

    /// Occurrences of the current position, this one included.
    pub fn current_repetition_count(&self) -> u32 {
        self.repetition_count(&self.fingerprint())
    }

    pub fn repetition_ledger(&self) -> &HashMap<String, u32> {
        &self.repetition
    }

    /// Canonical position key: `square:<colour initial><kind>` pairs sorted
    /// by square key, joined by `|`, then the side to move.
    pub fn fingerprint(&self) -> String {
        let mut entries: Vec<(String, Piece)> = self
            .board
            .occupied()
            .map(|(square, piece)| (square.encode(), piece))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let mut out = String::with_capacity(entries.len() * 20 + 8);
        for (key, piece) in &entries {
            out.push_str(key);
            out.push(':');
            out.push(piece.color.initial());
            out.push_str(piece.kind.name());
            out.push('|');
        }
        out.push_str(self.turn.name());
        out
    }

    pub fn has_only_king(&self, color: Color) -> bool {
        self.board
            .pieces_of(color)
            .all(|(_, piece)| piece.kind == PieceKind::King)
    }

    pub(crate) fn record_position(&mut self) {
        let fingerprint = self.fingerprint();
        *Arc::make_mut(&mut self.repetition).entry(fingerprint).or_insert(0) += 1;
    }
}
