//! Crate root module declarations for the cube chess core.
//!
//! Chess played on the six faces of an 8x8x8 cube whose layers can be turned
//! like a twisty puzzle. This file exposes the subsystems (cube topology,
//! game state, per-piece move rules, legal move generation and utility
//! helpers) so binaries, benches and external tooling can import stable
//! module paths.

pub mod chess_errors;

pub mod topology {
    pub mod cube_types;
    pub mod face_frames;
    pub mod lattice_rotation;
    pub mod rays;
    pub mod square;
    pub mod stepper;
}

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod slice_rotation;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod slider_moves;
}

pub mod move_generation {
    pub mod game_status;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod game_record;
    pub mod notation;
    pub mod random_playout;
    pub mod render_game_state;
}

pub use chess_errors::ChessErrors;
pub use game_state::chess_rules::build_initial_state;
pub use game_state::game_state::GameState;
pub use move_generation::game_status::{evaluate_status, GameStatus};
pub use move_generation::legal_move_apply::apply_move;
pub use move_generation::legal_move_checks::is_king_in_check;
pub use move_generation::legal_move_generator::generate_legal_moves;
pub use moves::move_descriptions::{CubeMove, Move, PieceMove};
pub use topology::square::Square;
