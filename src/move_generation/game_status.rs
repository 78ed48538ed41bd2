//! Terminal-state detection. None of these outcomes are errors; callers
//! decide what to do with them.

use crate::game_state::chess_types::{Color, ALL_COLORS};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check_on;
use crate::move_generation::legal_move_generator::generate_legal_moves_with_config;
use crate::move_generation::move_generator::MoveGenConfig;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Ongoing,
    Checkmate { winner: Color },
    Stalemate,
    /// `loser` has nothing but its king left.
    KingOnly { loser: Color },
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }

    pub fn winner(&self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(*winner),
            GameStatus::KingOnly { loser } => Some(loser.opposite()),
            GameStatus::Ongoing | GameStatus::Stalemate => None,
        }
    }

    /// PGN-style result token.
    pub fn result_token(&self) -> &'static str {
        match self.winner() {
            Some(Color::White) => "1-0",
            Some(Color::Black) => "0-1",
            None if *self == GameStatus::Stalemate => "1/2-1/2",
            None => "*",
        }
    }
}

pub fn evaluate_status(game_state: &GameState) -> GameStatus {
    evaluate_status_with_config(game_state, MoveGenConfig::default())
}

pub fn evaluate_status_with_config(game_state: &GameState, config: MoveGenConfig) -> GameStatus {
    if let Some(status) = king_only_status(game_state) {
        return status;
    }
    let legal = generate_legal_moves_with_config(game_state, config);
    status_from_legal_moves(game_state, &legal, config)
}

/// Status when the legal move list for `game_state` is already known.
pub fn status_from_legal_moves(game_state: &GameState, legal: &[Move], config: MoveGenConfig) -> GameStatus {
    if let Some(status) = king_only_status(game_state) {
        return status;
    }
    let in_check = is_king_in_check_on(&game_state.board, game_state.turn, config.ray_limit);
    classify(game_state.turn, !legal.is_empty(), in_check)
}

fn king_only_status(game_state: &GameState) -> Option<GameStatus> {
    ALL_COLORS
        .into_iter()
        .find(|&color| game_state.has_only_king(color))
        .map(|loser| GameStatus::KingOnly { loser })
}

fn classify(to_move: Color, has_moves: bool, in_check: bool) -> GameStatus {
    match (has_moves, in_check) {
        (true, _) => GameStatus::Ongoing,
        (false, true) => GameStatus::Checkmate {
            winner: to_move.opposite(),
        },
        (false, false) => GameStatus::Stalemate,
    }
}
