//! Quarter and half turns of lattice voxels and normals about a world axis.
//!
//! Voxels rotate about the cube's centre, which sits on half-integer
//! coordinates. Working on doubled coordinates (`2c - (N - 1)`) keeps every
//! value an odd integer, so the turn is exact and needs no rounding.

use crate::topology::cube_types::{Axis, Coord, Normal, RotationDirection, BOARD_SIZE};

const SPAN: i32 = BOARD_SIZE as i32 - 1;

/// One right-hand quarter turn (`clockwise`) or its inverse.
fn quarter_turn(vector: Coord, axis: Axis, clockwise: bool) -> Coord {
    let Coord { x, y, z } = vector;
    match (axis, clockwise) {
        (Axis::X, true) => Coord::new(x, -z, y),
        (Axis::X, false) => Coord::new(x, z, -y),
        (Axis::Y, true) => Coord::new(z, y, -x),
        (Axis::Y, false) => Coord::new(-z, y, x),
        (Axis::Z, true) => Coord::new(-y, x, z),
        (Axis::Z, false) => Coord::new(y, -x, z),
    }
}

/// Rotates a direction vector (no translation).
pub fn rotate_vector(vector: Coord, axis: Axis, direction: RotationDirection) -> Coord {
    match direction {
        RotationDirection::Clockwise => quarter_turn(vector, axis, true),
        RotationDirection::CounterClockwise => quarter_turn(vector, axis, false),
        RotationDirection::Half => quarter_turn(quarter_turn(vector, axis, false), axis, false),
    }
}

/// Rotates a voxel about the centre of the cube.
pub fn rotate_coord(coord: Coord, axis: Axis, direction: RotationDirection) -> Coord {
    let doubled = Coord::new(2 * coord.x - SPAN, 2 * coord.y - SPAN, 2 * coord.z - SPAN);
    let turned = rotate_vector(doubled, axis, direction);
    Coord::new(
        (turned.x + SPAN) / 2,
        (turned.y + SPAN) / 2,
        (turned.z + SPAN) / 2,
    )
}

pub fn rotate_normal(normal: Normal, axis: Axis, direction: RotationDirection) -> Normal {
    let turned = rotate_vector(normal.to_vector(), axis, direction);
    // A quarter turn maps unit axes onto unit axes.
    Normal::from_vector(turned).unwrap_or(normal)
}
