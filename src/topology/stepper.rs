//! Directional stepping across the cube surface.
//!
//! Inside a face a step is `u ± 1` (east/west) or `v ± 1` (north/south). At an
//! edge the step turns onto the neighbouring face: the lattice direction of the
//! step becomes the new normal and the same voxel is read back from it.

use crate::topology::cube_types::{Coord, Normal, BOARD_SIZE};
use crate::topology::face_frames::face_frame;
use crate::topology::square::Square;

const LAST: u8 = BOARD_SIZE - 1;

/// Face-local cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

/// Two orthogonal legs taken in order.
pub type Diagonal = (Direction, Direction);

pub const DIAGONAL_DIRECTIONS: [Diagonal; 4] = [
    (Direction::North, Direction::East),
    (Direction::North, Direction::West),
    (Direction::South, Direction::East),
    (Direction::South, Direction::West),
];

/// Neighbouring square one step in `direction`, or `None` if the step would
/// leave the cube.
pub fn step(square: Square, direction: Direction) -> Option<Square> {
    let (face, u, v) = (square.face(), square.u(), square.v());
    match direction {
        Direction::East if u < LAST => Some(Square::new_unchecked(face, u + 1, v)),
        Direction::West if u > 0 => Some(Square::new_unchecked(face, u - 1, v)),
        Direction::North if v < LAST => Some(Square::new_unchecked(face, u, v + 1)),
        Direction::South if v > 0 => Some(Square::new_unchecked(face, u, v - 1)),
        _ => wrap(square, direction),
    }
}

fn wrap(square: Square, direction: Direction) -> Option<Square> {
    let heading = direction_vector(square, direction);
    let normal = Normal::from_vector(heading)?;
    let current = square.normal();
    debug_assert_ne!(normal, current, "step from {square} {direction:?} points off the cube");
    if normal == current {
        log::warn!("step from {square} towards {direction:?} would leave the cube");
        return None;
    }
    Square::from_coord_and_normal(square.coord(), normal)
}

fn direction_vector(square: Square, direction: Direction) -> Coord {
    let frame = face_frame(square.face());
    match direction {
        Direction::East => frame.u_axis,
        Direction::West => frame.u_axis.negate(),
        Direction::North => frame.v_axis,
        Direction::South => frame.v_axis.negate(),
    }
}

/// Two orthogonal steps; `None` if either leg fails.
pub fn step_diagonal(square: Square, first: Direction, second: Direction) -> Option<Square> {
    step(square, first).and_then(|mid| step(mid, second))
}

/// Whether a straight line in `direction` continues past `square`.
///
/// Some seams fold a line back on itself: the next square's own next square is
/// `square` again. Such a square has no further neighbour in that direction.
pub fn has_forward_neighbor(square: Square, direction: Direction) -> bool {
    match step(square, direction) {
        None => false,
        Some(next) => step(next, direction) != Some(square),
    }
}
