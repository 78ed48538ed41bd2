//! Layer turns.
//!
//! Every square whose voxel lies on the turned layer is carried to the square
//! at the rotated voxel seen from the rotated normal. A layer is closed under
//! its own rotation, so the destinations are a permutation of the origins.

use crate::game_state::board::Board;
use crate::moves::move_descriptions::CubeMove;
use crate::topology::cube_types::{Axis, RotationDirection};
use crate::topology::lattice_rotation::{rotate_coord, rotate_normal};
use crate::topology::square::{all_squares, Square};

#[inline]
pub fn is_square_on_layer(square: Square, axis: Axis, layer: u8) -> bool {
    square.coord().component(axis) == i32::from(layer)
}

/// All squares of one layer, in index order.
pub fn layer_squares(axis: Axis, layer: u8) -> Vec<Square> {
    all_squares()
        .filter(|square| is_square_on_layer(*square, axis, layer))
        .collect()
}

/// Where `square` lands when its layer turns about `axis`.
pub fn rotate_square(square: Square, axis: Axis, direction: RotationDirection) -> Option<Square> {
    let descriptor = square.descriptor();
    let coord = rotate_coord(descriptor.coord, axis, direction);
    let normal = rotate_normal(descriptor.normal, axis, direction);
    Square::from_coord_and_normal(coord, normal)
}

/// Returns `board` with the layer selected by `cube_move` turned.
///
/// Pieces are lifted off all origin squares before any is put down, so
/// overlapping origin and destination sets never drop or duplicate a piece.
/// Turning never captures.
pub fn rotate_layer(board: &Board, cube_move: &CubeMove) -> Board {
    let CubeMove {
        axis,
        layer,
        direction,
    } = *cube_move;

    let impacted: Vec<_> = board
        .occupied()
        .filter(|(square, _)| is_square_on_layer(*square, axis, layer))
        .collect();

    let mut next = board.clone();
    let mut updates = Vec::with_capacity(impacted.len());
    for (from, piece) in impacted {
        next.remove(from);
        match rotate_square(from, axis, direction) {
            Some(to) => updates.push((to, piece)),
            None => {
                // Unreachable on a closed cube; keep the piece where it was.
                log::warn!("layer turn {cube_move:?} has no destination for {from}");
                updates.push((from, piece));
            }
        }
    }
    for (to, piece) in updates {
        next.place(to, piece);
    }
    next
}
