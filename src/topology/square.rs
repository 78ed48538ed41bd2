//! Square addresses.
//!
//! A `Square` is the compact `(face, u, v)` triple used by every hot path. Its
//! stable text key is `face:u:v` (for example `front:4:1`), which is what
//! `Display`/`FromStr` produce and accept.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessErrors;
use crate::topology::cube_types::{Coord, Face, Normal, ALL_FACES, BOARD_SIZE, SQUARE_COUNT};
use crate::topology::face_frames::{
    coord_and_normal_to_face_position, face_position_to_coord, face_to_normal,
};

/// Serialized as its `face:u:v` key so deserializing goes through the same
/// bounds check as [`Square::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Square {
    face: Face,
    u: u8,
    v: u8,
}

/// Lattice voxel plus outward normal of a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareDescriptor {
    pub square: Square,
    pub coord: Coord,
    pub normal: Normal,
}

impl Square {
    pub fn new(face: Face, u: u8, v: u8) -> Result<Self, ChessErrors> {
        if u >= BOARD_SIZE || v >= BOARD_SIZE {
            return Err(ChessErrors::InvalidFileOrRank((u, v)));
        }
        Ok(Self { face, u, v })
    }

    /// Caller guarantees `u, v < BOARD_SIZE`.
    #[inline]
    pub(crate) const fn new_unchecked(face: Face, u: u8, v: u8) -> Self {
        Self { face, u, v }
    }

    #[inline]
    pub const fn face(self) -> Face {
        self.face
    }

    #[inline]
    pub const fn u(self) -> u8 {
        self.u
    }

    #[inline]
    pub const fn v(self) -> u8 {
        self.v
    }

    /// Dense index in `0..SQUARE_COUNT`: face-major, then `u`, then `v`.
    #[inline]
    pub const fn index(self) -> usize {
        let n = BOARD_SIZE as usize;
        self.face.index() * n * n + (self.u as usize) * n + self.v as usize
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index >= SQUARE_COUNT {
            return None;
        }
        let n = BOARD_SIZE as usize;
        let Some(face) = Face::from_index(index / (n * n)) else {
            return None;
        };
        let within = index % (n * n);
        Some(Self::new_unchecked(face, (within / n) as u8, (within % n) as u8))
    }

    #[inline]
    pub fn coord(self) -> Coord {
        face_position_to_coord(self.face, self.u, self.v)
    }

    #[inline]
    pub fn normal(self) -> Normal {
        face_to_normal(self.face)
    }

    pub fn descriptor(self) -> SquareDescriptor {
        SquareDescriptor {
            square: self,
            coord: self.coord(),
            normal: self.normal(),
        }
    }

    /// Inverse of [`Square::descriptor`].
    pub fn from_coord_and_normal(coord: Coord, normal: Normal) -> Option<Self> {
        coord_and_normal_to_face_position(coord, normal)
            .map(|(face, u, v)| Self::new_unchecked(face, u, v))
    }

    /// Stable `face:u:v` key.
    pub fn encode(self) -> String {
        self.to_string()
    }

    pub fn decode(key: &str) -> Result<Self, ChessErrors> {
        key.parse()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.face.name(), self.u, self.v)
    }
}

impl FromStr for Square {
    type Err = ChessErrors;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let mut parts = key.split(':');
        let (Some(face), Some(u), Some(v), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(ChessErrors::InvalidSquareString(key.to_owned()));
        };
        let face = Face::from_name(face).ok_or_else(|| ChessErrors::InvalidFaceName(face.to_owned()))?;
        let u = u
            .parse::<u8>()
            .map_err(|_| ChessErrors::InvalidSquareString(key.to_owned()))?;
        let v = v
            .parse::<u8>()
            .map_err(|_| ChessErrors::InvalidSquareString(key.to_owned()))?;
        Square::new(face, u, v)
    }
}

impl TryFrom<String> for Square {
    type Error = ChessErrors;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        key.parse()
    }
}

impl From<Square> for String {
    fn from(square: Square) -> Self {
        square.to_string()
    }
}

/// Every square in index order.
pub fn all_squares() -> impl Iterator<Item = Square> {
    ALL_FACES.into_iter().flat_map(|face| {
        (0..BOARD_SIZE).flat_map(move |u| (0..BOARD_SIZE).map(move |v| Square::new_unchecked(face, u, v)))
    })
}
