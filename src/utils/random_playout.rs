//! Seeded random playouts.
//!
//! Picks uniformly among legal moves until a terminal status or the ply
//! limit. Used for soak testing and benchmarking; there is no evaluation.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::move_generation::game_status::{status_from_legal_moves, GameStatus};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenConfig;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub seed: u64,
    pub max_plies: usize,
    pub move_gen: MoveGenConfig,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            max_plies: 200,
            move_gen: MoveGenConfig::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub status: GameStatus,
}

pub fn random_playout(start: &GameState, config: &PlayoutConfig) -> Result<PlayoutResult, ChessErrors> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let generator = LegalMoveGenerator::with_config(config.move_gen);

    let mut state = start.clone();
    let mut moves = Vec::with_capacity(config.max_plies);
    loop {
        let legal = generator.legal_moves(&state)?;
        let status = status_from_legal_moves(&state, &legal, config.move_gen);
        if status.is_terminal() || moves.len() >= config.max_plies {
            log::debug!("playout seed {} stopped after {} plies: {status:?}", config.seed, moves.len());
            return Ok(PlayoutResult {
                moves,
                final_state: state,
                status,
            });
        }

        let Some(picked) = legal.choose(&mut rng) else {
            return Err(ChessErrors::InvalidState("ongoing position without legal moves".to_owned()));
        };
        state = apply_move(&state, picked)?;
        moves.push(*picked);
    }
}
