//! Game history with undo/redo.
//!
//! Every position is an immutable `GameState`, so history is just two stacks
//! of retained snapshots. Nothing is ever un-applied.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{status_from_legal_moves, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::generate_legal_moves_with_config;
use crate::move_generation::move_generator::MoveGenConfig;
use crate::moves::move_descriptions::Move;
use crate::utils::notation::{describe_move, parse_move};

#[derive(Debug, Clone)]
struct HistoryEntry {
    state: GameState,
    notation: String,
}

#[derive(Debug, Clone)]
pub struct GameRecord {
    initial: GameState,
    current: GameState,
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
    notation: Vec<String>,
    config: MoveGenConfig,
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new(GameState::new_game())
    }
}

impl GameRecord {
    pub fn new(initial: GameState) -> Self {
        Self::with_config(initial, MoveGenConfig::default())
    }

    pub fn with_config(initial: GameState, config: MoveGenConfig) -> Self {
        Self {
            current: initial.clone(),
            initial,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            notation: Vec::new(),
            config,
        }
    }

    pub fn current(&self) -> &GameState {
        &self.current
    }

    pub fn initial(&self) -> &GameState {
        &self.initial
    }

    /// Labels of the moves leading to the current position.
    pub fn notation(&self) -> &[String] {
        &self.notation
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn legal_moves(&self) -> Vec<Move> {
        generate_legal_moves_with_config(&self.current, self.config)
    }

    pub fn status(&self) -> GameStatus {
        status_from_legal_moves(&self.current, &self.legal_moves(), self.config)
    }

    /// Plays `mv` if it is legal in the current position. Clears redo history.
    pub fn play(&mut self, mv: &Move) -> Result<&GameState, ChessErrors> {
        let label = describe_move(mv);
        if !self.legal_moves().contains(mv) {
            return Err(ChessErrors::IllegalMove(label));
        }

        let next = apply_move(&self.current, mv)?;
        let previous = std::mem::replace(&mut self.current, next);
        self.undo_stack.push(HistoryEntry {
            state: previous,
            notation: label.clone(),
        });
        self.notation.push(label);
        self.redo_stack.clear();
        Ok(&self.current)
    }

    /// Parses `label` and plays it.
    pub fn play_notation(&mut self, label: &str) -> Result<&GameState, ChessErrors> {
        let parsed = parse_move(label)?;
        self.play(&parsed)
    }

    pub fn undo(&mut self) -> Result<&GameState, ChessErrors> {
        let entry = self.undo_stack.pop().ok_or(ChessErrors::NothingToUndo)?;
        let undone = std::mem::replace(&mut self.current, entry.state);
        self.notation.pop();
        self.redo_stack.push(HistoryEntry {
            state: undone,
            notation: entry.notation,
        });
        Ok(&self.current)
    }

    pub fn redo(&mut self) -> Result<&GameState, ChessErrors> {
        let entry = self.redo_stack.pop().ok_or(ChessErrors::NothingToRedo)?;
        let previous = std::mem::replace(&mut self.current, entry.state);
        self.notation.push(entry.notation.clone());
        self.undo_stack.push(HistoryEntry {
            state: previous,
            notation: entry.notation,
        });
        Ok(&self.current)
    }

    /// PGN-like text dated today.
    pub fn export_text(&self) -> String {
        self.export_text_dated(Local::now().date_naive())
    }

    pub fn export_text_dated(&self, date: NaiveDate) -> String {
        let result = self.status().result_token();

        let mut headers = BTreeMap::<&str, String>::new();
        headers.insert("Event", "Cube Chess Game".to_owned());
        headers.insert("Date", date.format("%Y.%m.%d").to_string());
        headers.insert("White", "White".to_owned());
        headers.insert("Black", "Black".to_owned());
        headers.insert("Result", result.to_owned());

        let mut out = String::new();
        for (key, value) in &headers {
            out.push_str(&format!("[{key} \"{value}\"]\n"));
        }
        out.push('\n');

        let mut movetext_parts = Vec::<String>::with_capacity(self.notation.len() + 1);
        for (ply, label) in self.notation.iter().enumerate() {
            if ply % 2 == 0 {
                movetext_parts.push(format!("{}. {}", (ply / 2) + 1, label));
            } else {
                movetext_parts.push(label.clone());
            }
        }
        movetext_parts.push(result.to_owned());
        out.push_str(&movetext_parts.join(" "));
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::PieceKind;
    use crate::moves::move_descriptions::{CubeMove, PieceMove};
    use crate::topology::cube_types::{Axis, Face, RotationDirection};
    use crate::topology::square::Square;

    fn sq(face: Face, u: u8, v: u8) -> Square {
        Square::new(face, u, v).expect("test square should be valid")
    }

    fn knight(from: Square, to: Square) -> Move {
        Move::Piece(PieceMove::new(from, to, PieceKind::Knight, false))
    }

    #[test]
    fn illegal_moves_are_refused() {
        let mut record = GameRecord::default();
        let bogus = Move::Piece(PieceMove::new(
            sq(Face::Front, 4, 1),
            sq(Face::Front, 4, 5),
            PieceKind::Pawn,
            false,
        ));
        assert_eq!(
            record.play(&bogus).err(),
            Some(ChessErrors::IllegalMove("Fe2-Fe6".to_owned()))
        );
        assert!(!record.can_undo());
        assert!(record.notation().is_empty());
    }

    #[test]
    fn undo_and_redo_walk_retained_snapshots() {
        let mut record = GameRecord::default();
        let start = record.current().fingerprint();

        record
            .play(&knight(sq(Face::Front, 1, 0), sq(Face::Front, 2, 2)))
            .expect("knight move should be legal");
        let after_one = record.current().fingerprint();
        record
            .play_notation("Y1CW")
            .expect("cube move should be legal");
        assert_eq!(record.notation(), ["NFb1-Fc3", "Y1CW"]);

        record.undo().expect("undo should work");
        assert_eq!(record.current().fingerprint(), after_one);
        record.undo().expect("undo should work");
        assert_eq!(record.current().fingerprint(), start);
        assert_eq!(record.undo().err(), Some(ChessErrors::NothingToUndo));

        record.redo().expect("redo should work");
        assert_eq!(record.current().fingerprint(), after_one);
        assert_eq!(record.notation(), ["NFb1-Fc3"]);
        assert!(record.can_redo());
    }

    #[test]
    fn playing_after_undo_discards_redo() {
        let mut record = GameRecord::default();
        record
            .play(&Move::Cube(CubeMove::new(Axis::X, 0, RotationDirection::Half)))
            .expect("cube move should be legal");
        record.undo().expect("undo should work");
        record
            .play(&knight(sq(Face::Front, 6, 0), sq(Face::Front, 5, 2)))
            .expect("knight move should be legal");
        assert!(!record.can_redo());
        assert_eq!(record.redo().err(), Some(ChessErrors::NothingToRedo));
    }

    #[test]
    fn unknown_or_illegal_labels_fail() {
        let mut record = GameRecord::default();
        assert!(matches!(record.play_notation("nonsense"), Err(ChessErrors::InvalidNotation(_))));
        assert!(matches!(record.play_notation("Fe2-Fe6"), Err(ChessErrors::IllegalMove(_))));
    }

    #[test]
    fn knight_shuffle_repeats_the_start_three_times() {
        let mut record = GameRecord::default();
        let shuffle = [
            knight(sq(Face::Front, 1, 0), sq(Face::Front, 2, 2)),
            knight(sq(Face::Back, 1, 7), sq(Face::Back, 2, 5)),
            knight(sq(Face::Front, 2, 2), sq(Face::Front, 1, 0)),
            knight(sq(Face::Back, 2, 5), sq(Face::Back, 1, 7)),
        ];
        for _ in 0..2 {
            for mv in &shuffle {
                record.play(mv).expect("shuffle move should be legal");
            }
        }
        let current = record.current();
        assert_eq!(current.fingerprint(), record.initial().fingerprint());
        assert_eq!(current.current_repetition_count(), 3);
    }

    #[test]
    fn cube_turn_and_back_repeats_too() {
        let mut record = GameRecord::default();
        // Each pair of turns cancels out, so the start recurs every two plies.
        for label in ["X1CW", "X1CCW", "X1CCW", "X1CW"] {
            record.play_notation(label).expect("cube move should be legal");
        }
        assert_eq!(record.current().fingerprint(), record.initial().fingerprint());
        assert_eq!(record.current().current_repetition_count(), 3);
    }

    #[test]
    fn export_lists_headers_and_numbered_moves() {
        let mut record = GameRecord::default();
        record.play_notation("Fe2-Fe4").expect("pawn push should be legal");
        record.play_notation("Be7-Be5").expect("pawn push should be legal");
        record.play_notation("Z3180").expect("cube move should be legal");

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        let text = record.export_text_dated(date);
        assert!(text.contains("[Date \"2024.03.09\"]\n"));
        assert!(text.contains("[Event \"Cube Chess Game\"]\n"));
        assert!(text.contains("[Result \"*\"]\n"));
        assert!(text.ends_with("1. Fe2-Fe4 Be7-Be5 2. Z3180 *\n"));
    }
}
