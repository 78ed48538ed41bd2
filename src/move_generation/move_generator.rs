use crate::chess_errors::ChessErrors;
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;
use crate::topology::rays::DEFAULT_RAY_LIMIT;

pub type MoveGenResult<T> = Result<T, ChessErrors>;

/// Knobs for legal move generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveGenConfig {
    /// Maximum squares a sliding ray may visit.
    pub ray_limit: usize,
    /// Drop cube moves that would leave the mover's king attacked. Off by
    /// default: rotations are offered unchecked whenever the mover is not in
    /// check.
    pub verify_cube_moves: bool,
}

impl Default for MoveGenConfig {
    fn default() -> Self {
        Self {
            ray_limit: DEFAULT_RAY_LIMIT,
            verify_cube_moves: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
}

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>>;
}
