//! Face frames: how each face's local `(u, v)` grid sits in the lattice.
//!
//! A face is an origin voxel plus a u-axis and a v-axis unit vector, so
//! `coord = origin + u * u_axis + v * v_axis`. Each axis vector has a single
//! non-zero component, which makes the inverse a per-component division.

use crate::topology::cube_types::{Coord, Face, Normal, BOARD_SIZE};

const TOP: i32 = BOARD_SIZE as i32 - 1;

/// Placement of one face in the lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceFrame {
    pub normal: Normal,
    pub origin: Coord,
    pub u_axis: Coord,
    pub v_axis: Coord,
}

static FACE_FRAMES: [FaceFrame; 6] = [
    // Front
    FaceFrame {
        normal: Normal::PosZ,
        origin: Coord::new(0, 0, TOP),
        u_axis: Coord::new(1, 0, 0),
        v_axis: Coord::new(0, 1, 0),
    },
    // Back
    FaceFrame {
        normal: Normal::NegZ,
        origin: Coord::new(TOP, 0, 0),
        u_axis: Coord::new(-1, 0, 0),
        v_axis: Coord::new(0, 1, 0),
    },
    // Left
    FaceFrame {
        normal: Normal::NegX,
        origin: Coord::new(0, 0, 0),
        u_axis: Coord::new(0, 0, 1),
        v_axis: Coord::new(0, 1, 0),
    },
    // Right
    FaceFrame {
        normal: Normal::PosX,
        origin: Coord::new(TOP, 0, TOP),
        u_axis: Coord::new(0, 0, -1),
        v_axis: Coord::new(0, 1, 0),
    },
    // Top
    FaceFrame {
        normal: Normal::PosY,
        origin: Coord::new(0, TOP, TOP),
        u_axis: Coord::new(1, 0, 0),
        v_axis: Coord::new(0, 0, -1),
    },
    // Bottom
    FaceFrame {
        normal: Normal::NegY,
        origin: Coord::new(0, 0, 0),
        u_axis: Coord::new(1, 0, 0),
        v_axis: Coord::new(0, 0, 1),
    },
];

#[inline]
pub fn face_frame(face: Face) -> &'static FaceFrame {
    &FACE_FRAMES[face.index()]
}

#[inline]
pub fn face_to_normal(face: Face) -> Normal {
    face_frame(face).normal
}

#[inline]
pub const fn normal_to_face(normal: Normal) -> Face {
    match normal {
        Normal::PosX => Face::Right,
        Normal::NegX => Face::Left,
        Normal::PosY => Face::Top,
        Normal::NegY => Face::Bottom,
        Normal::PosZ => Face::Front,
        Normal::NegZ => Face::Back,
    }
}

/// Lattice voxel of local square `(u, v)` on `face`.
pub fn face_position_to_coord(face: Face, u: u8, v: u8) -> Coord {
    let frame = face_frame(face);
    frame
        .origin
        .add(frame.u_axis.scale(i32::from(u)))
        .add(frame.v_axis.scale(i32::from(v)))
}

/// Local `(face, u, v)` of a voxel seen from `normal`.
///
/// Returns `None` when the voxel does not lie on that face's plane or the
/// projected `u`/`v` falls outside the face.
pub fn coord_and_normal_to_face_position(coord: Coord, normal: Normal) -> Option<(Face, u8, u8)> {
    let face = normal_to_face(normal);
    let frame = face_frame(face);
    let u = project_axis(coord, frame.origin, frame.u_axis)?;
    let v = project_axis(coord, frame.origin, frame.v_axis)?;
    let range = 0..i32::from(BOARD_SIZE);
    if !range.contains(&u) || !range.contains(&v) {
        return None;
    }
    // The projection ignores the normal component; reject voxels off the plane.
    if face_position_to_coord(face, u as u8, v as u8) != coord {
        return None;
    }
    Some((face, u as u8, v as u8))
}

fn project_axis(coord: Coord, origin: Coord, axis: Coord) -> Option<i32> {
    if axis.x != 0 {
        Some((coord.x - origin.x) / axis.x)
    } else if axis.y != 0 {
        Some((coord.y - origin.y) / axis.y)
    } else if axis.z != 0 {
        Some((coord.z - origin.z) / axis.z)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::cube_types::ALL_FACES;

    #[test]
    fn every_face_position_resolves_back_to_itself() {
        for face in ALL_FACES {
            for u in 0..BOARD_SIZE {
                for v in 0..BOARD_SIZE {
                    let coord = face_position_to_coord(face, u, v);
                    assert!(coord.is_inside_cube(), "{face:?} {u} {v} left the cube");
                    let resolved = coord_and_normal_to_face_position(coord, face_to_normal(face));
                    assert_eq!(resolved, Some((face, u, v)));
                }
            }
        }
    }

    #[test]
    fn face_and_normal_tables_agree() {
        for face in ALL_FACES {
            assert_eq!(normal_to_face(face_to_normal(face)), face);
        }
    }

    #[test]
    fn each_face_lies_on_its_normal_plane() {
        for face in ALL_FACES {
            let frame = face_frame(face);
            let n = frame.normal.to_vector();
            // Axis vectors are perpendicular to the normal.
            assert_eq!(n.x * frame.u_axis.x + n.y * frame.u_axis.y + n.z * frame.u_axis.z, 0);
            assert_eq!(n.x * frame.v_axis.x + n.y * frame.v_axis.y + n.z * frame.v_axis.z, 0);
        }
    }

    #[test]
    fn shared_edge_voxels_belong_to_both_faces() {
        // front u=7 and right u=0 are the same column of voxels.
        let front_edge = face_position_to_coord(Face::Front, 7, 3);
        assert_eq!(
            coord_and_normal_to_face_position(front_edge, Normal::PosX),
            Some((Face::Right, 0, 3))
        );
    }

    #[test]
    fn interior_voxel_is_not_on_any_face_plane() {
        let interior = Coord::new(3, 3, 3);
        for face in ALL_FACES {
            assert_eq!(coord_and_normal_to_face_position(interior, face_to_normal(face)), None);
        }
    }
}
