//! Full legal move generation pipeline.
//!
//! Generates pseudo-legal piece moves for the side to move, applies each to a
//! trial state and drops those that leave the mover's own king attacked.
//! Cube moves follow the piece moves and are only offered when the mover is
//! not in check.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::advance;
use crate::move_generation::legal_move_checks::is_king_in_check_on;
use crate::move_generation::legal_move_shared::{
    all_cube_moves, generate_pseudo_legal_moves, CUBE_MOVE_COUNT,
};
use crate::move_generation::move_generator::{
    GeneratedMove, MoveAnnotations, MoveGenConfig, MoveGenResult, MoveGenerator,
};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator {
    config: MoveGenConfig,
}

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<GeneratedMove>> {
        self.generate_legal_moves_internal(game_state, true)
    }
}

impl LegalMoveGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MoveGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MoveGenConfig {
        &self.config
    }

    /// Legal moves only, without successor states.
    pub fn legal_moves(&self, game_state: &GameState) -> MoveGenResult<Vec<Move>> {
        Ok(self
            .generate_legal_moves_internal(game_state, false)?
            .into_iter()
            .map(|generated| generated.mv)
            .collect())
    }

    fn generate_legal_moves_internal(
        &self,
        game_state: &GameState,
        full_successors: bool,
    ) -> MoveGenResult<Vec<GeneratedMove>> {
        let mover = game_state.turn;
        let ray_limit = self.config.ray_limit;
        let pseudo = generate_pseudo_legal_moves(&game_state.board, mover, ray_limit);

        let mut legal = Vec::with_capacity(pseudo.len() + CUBE_MOVE_COUNT);
        for piece_move in pseudo {
            let mv = Move::Piece(piece_move);
            let next = advance(game_state, &mv)?;

            // Illegal if own king is attacked after the move.
            if is_king_in_check_on(&next.board, mover, ray_limit) {
                log::trace!("rejected {mv:?}: leaves {} king attacked", mover.name());
                continue;
            }
            legal.push(self.finish(mv, next, full_successors));
        }

        if is_king_in_check_on(&game_state.board, mover, ray_limit) {
            return Ok(legal);
        }

        for cube_move in all_cube_moves() {
            let mv = Move::Cube(cube_move);
            let next = advance(game_state, &mv)?;
            if self.config.verify_cube_moves && is_king_in_check_on(&next.board, mover, ray_limit) {
                log::trace!("rejected {mv:?}: rotation exposes {} king", mover.name());
                continue;
            }
            legal.push(self.finish(mv, next, full_successors));
        }

        Ok(legal)
    }

    fn finish(&self, mv: Move, mut next: GameState, full_successors: bool) -> GeneratedMove {
        let mut annotations = MoveAnnotations::default();
        if full_successors {
            annotations.gives_check = is_king_in_check_on(&next.board, next.turn, self.config.ray_limit);
            next.record_position();
        }
        GeneratedMove {
            mv,
            game_after_move: next,
            annotations,
        }
    }
}

/// Legal moves for the side to move under the default configuration.
pub fn generate_legal_moves(game_state: &GameState) -> Vec<Move> {
    generate_legal_moves_with_config(game_state, MoveGenConfig::default())
}

pub fn generate_legal_moves_with_config(game_state: &GameState, config: MoveGenConfig) -> Vec<Move> {
    match LegalMoveGenerator::with_config(config).legal_moves(game_state) {
        Ok(moves) => moves,
        Err(err) => {
            // Pseudo-legal moves always start on an occupied square.
            log::warn!("legal move generation failed: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Color, Piece, PieceId, PieceKind};
    use crate::move_generation::legal_move_apply::apply_move;
    use crate::move_generation::legal_move_checks::is_king_in_check;
    use crate::moves::move_descriptions::{CubeMove, PieceMove};
    use crate::topology::cube_types::{Axis, Face, RotationDirection};
    use crate::topology::square::Square;

    fn sq(face: Face, u: u8, v: u8) -> Square {
        Square::new(face, u, v).expect("test square should be valid")
    }

    fn piece_moves(moves: &[Move]) -> Vec<PieceMove> {
        moves.iter().filter_map(|m| m.as_piece_move().copied()).collect()
    }

    fn cube_moves(moves: &[Move]) -> Vec<CubeMove> {
        moves.iter().filter_map(|m| m.as_cube_move().copied()).collect()
    }

    #[test]
    fn initial_position_offers_pawn_pushes_knights_and_every_rotation() {
        let state = GameState::new_game();
        let moves = generate_legal_moves(&state);
        let pieces = piece_moves(&moves);
        let cubes = cube_moves(&moves);

        let pawn_moves: Vec<&PieceMove> = pieces.iter().filter(|m| m.piece_kind == PieceKind::Pawn).collect();
        assert_eq!(pawn_moves.len(), 16);
        let double_steps = pawn_moves.iter().filter(|m| m.to.v() == 3).count();
        assert_eq!(double_steps, 8);
        for u in 0..8 {
            assert!(pawn_moves.iter().any(|m| m.from == sq(Face::Front, u, 1) && m.to == sq(Face::Front, u, 3)));
        }

        let knight_from = sq(Face::Front, 1, 0);
        for target in [sq(Face::Front, 2, 2), sq(Face::Front, 0, 2), sq(Face::Left, 7, 1), sq(Face::Bottom, 2, 6)] {
            assert!(
                pieces.iter().any(|m| m.from == knight_from && m.to == target),
                "knight should reach {target}"
            );
        }

        assert_eq!(cubes.len(), CUBE_MOVE_COUNT);
        assert_eq!(moves.len(), pieces.len() + CUBE_MOVE_COUNT);
        // Piece moves come first.
        assert!(moves[..pieces.len()].iter().all(|m| m.as_piece_move().is_some()));
    }

    #[test]
    fn no_generated_move_leaves_own_king_in_check() {
        let state = GameState::new_game();
        let mut frontier = vec![state];
        for _ in 0..2 {
            let mut next_frontier = Vec::new();
            for game in frontier.iter().take(6) {
                for mv in generate_legal_moves(game).iter().filter(|m| m.as_piece_move().is_some()) {
                    let next = apply_move(game, mv).expect("legal move should apply");
                    assert!(!is_king_in_check(&next, game.turn()), "{mv:?} exposes the king");
                    next_frontier.push(next);
                }
            }
            frontier = next_frontier;
        }
    }

    fn mated_white() -> GameState {
        let mut pawn = Piece::new(PieceId(6), Color::White, PieceKind::Pawn);
        pawn.has_moved = true;
        GameState::from_squares(&[
            (sq(Face::Front, 0, 0), Piece::new(PieceId(0), Color::White, PieceKind::King)),
            (sq(Face::Back, 5, 5), pawn),
            (sq(Face::Front, 0, 5), Piece::new(PieceId(1), Color::Black, PieceKind::Rook)),
            (sq(Face::Front, 5, 0), Piece::new(PieceId(2), Color::Black, PieceKind::Rook)),
            (sq(Face::Front, 5, 1), Piece::new(PieceId(3), Color::Black, PieceKind::Rook)),
            (sq(Face::Front, 1, 5), Piece::new(PieceId(4), Color::Black, PieceKind::Rook)),
            (sq(Face::Back, 4, 7), Piece::new(PieceId(5), Color::Black, PieceKind::King)),
        ])
        .expect("state should build")
    }

    #[test]
    fn checked_side_gets_no_cube_moves() {
        let state = mated_white();
        assert!(is_king_in_check(&state, Color::White));
        let moves = generate_legal_moves(&state);
        assert!(cube_moves(&moves).is_empty());
    }

    #[test]
    fn boxed_in_king_has_no_legal_moves() {
        let state = mated_white();
        assert!(generate_legal_moves(&state).is_empty());
    }

    #[test]
    fn king_may_escape_check_by_capturing() {
        let state = GameState::from_squares(&[
            (sq(Face::Front, 0, 0), Piece::new(PieceId(0), Color::White, PieceKind::King)),
            (sq(Face::Front, 1, 1), Piece::new(PieceId(1), Color::Black, PieceKind::Queen)),
            (sq(Face::Back, 4, 7), Piece::new(PieceId(2), Color::Black, PieceKind::King)),
        ])
        .expect("state should build");
        let moves = generate_legal_moves(&state);
        assert!(cube_moves(&moves).is_empty());
        assert!(moves
            .iter()
            .any(|m| matches!(m, Move::Piece(p) if p.to == sq(Face::Front, 1, 1) && p.capture)));
        for mv in &moves {
            let next = apply_move(&state, mv).expect("legal move should apply");
            assert!(!is_king_in_check(&next, Color::White));
        }
    }

    fn exposed_by_rotation() -> GameState {
        let mut pawn = Piece::new(PieceId(1), Color::White, PieceKind::Pawn);
        pawn.has_moved = true;
        GameState::from_squares(&[
            (sq(Face::Front, 4, 4), Piece::new(PieceId(0), Color::White, PieceKind::King)),
            (sq(Face::Front, 4, 5), pawn),
            (sq(Face::Front, 4, 7), Piece::new(PieceId(2), Color::Black, PieceKind::Rook)),
            (sq(Face::Back, 0, 0), Piece::new(PieceId(3), Color::Black, PieceKind::King)),
        ])
        .expect("state should build")
    }

    #[test]
    fn rotations_are_offered_unverified_by_default() {
        let state = exposed_by_rotation();
        assert!(!is_king_in_check(&state, Color::White));
        let moves = generate_legal_moves(&state);
        assert_eq!(cube_moves(&moves).len(), CUBE_MOVE_COUNT);
    }

    #[test]
    fn verified_rotations_never_expose_the_king() {
        let state = exposed_by_rotation();
        let config = MoveGenConfig {
            verify_cube_moves: true,
            ..MoveGenConfig::default()
        };
        let moves = generate_legal_moves_with_config(&state, config);
        let cubes = cube_moves(&moves);

        // Turning the pawn's row away opens the file to the rook.
        for direction in [RotationDirection::Clockwise, RotationDirection::CounterClockwise, RotationDirection::Half] {
            assert!(!cubes.contains(&CubeMove::new(Axis::Y, 5, direction)));
        }
        assert!(!cubes.is_empty());
        assert!(cubes.len() < CUBE_MOVE_COUNT);
        for cube_move in cubes {
            let next = apply_move(&state, &Move::Cube(cube_move)).expect("cube move should apply");
            assert!(!is_king_in_check(&next, Color::White), "{cube_move:?} exposes the king");
        }
    }

    #[test]
    fn generated_successors_are_recorded_and_annotated() {
        let state = GameState::from_squares(&[
            (sq(Face::Front, 0, 0), Piece::new(PieceId(0), Color::White, PieceKind::King)),
            (sq(Face::Front, 3, 3), Piece::new(PieceId(1), Color::White, PieceKind::Rook)),
            (sq(Face::Front, 6, 6), Piece::new(PieceId(2), Color::Black, PieceKind::King)),
        ])
        .expect("state should build");
        let generated = LegalMoveGenerator::new()
            .generate_legal_moves(&state)
            .expect("generation should succeed");

        let check = generated
            .iter()
            .find(|g| matches!(g.mv, Move::Piece(p) if p.to == sq(Face::Front, 3, 6)))
            .expect("rook lift should be generated");
        assert!(check.annotations.gives_check);
        assert_eq!(check.game_after_move.current_repetition_count(), 1);
        assert_eq!(check.game_after_move.turn(), Color::Black);
    }

    #[test]
    fn generated_promotion_crowns_a_queen() {
        let from = sq(Face::Top, 3, 6);
        let to = sq(Face::Top, 3, 7);
        let mut pawn = Piece::new(PieceId(2), Color::White, PieceKind::Pawn);
        pawn.has_moved = true;
        let state = GameState::from_squares(&[
            (sq(Face::Front, 4, 0), Piece::new(PieceId(0), Color::White, PieceKind::King)),
            (sq(Face::Back, 4, 7), Piece::new(PieceId(1), Color::Black, PieceKind::King)),
            (from, pawn),
        ])
        .expect("state should build");

        let moves = generate_legal_moves(&state);
        let promotion = moves
            .iter()
            .find(|m| matches!(m, Move::Piece(p) if p.from == from))
            .expect("pawn push should be legal");
        assert!(promotion.is_promotion());

        let next = apply_move(&state, promotion).expect("promotion should apply");
        let queen = next.piece_at(to).expect("queen should stand on the seam");
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.id, PieceId(2));
        assert!(next.piece_at(from).is_none());
        // The new queen looks straight over the edge at the black king.
        assert!(is_king_in_check(&next, Color::Black));
    }
}
