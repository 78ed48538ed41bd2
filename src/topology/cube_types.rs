//! Primitive geometric types for the cube board.
//!
//! The six faces share one integer lattice: every square sits on a voxel
//! `(x, y, z)` with each component in `0..BOARD_SIZE`, and is told apart from
//! the other squares on that voxel by its outward face normal.

/// Number of files/ranks on one face.
pub const BOARD_SIZE: u8 = 8;

/// Total number of squares across all six faces.
pub const SQUARE_COUNT: usize = 6 * (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// One of the six faces of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Face {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

pub const ALL_FACES: [Face; 6] = [
    Face::Front,
    Face::Back,
    Face::Left,
    Face::Right,
    Face::Top,
    Face::Bottom,
];

impl Face {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Back => 1,
            Face::Left => 2,
            Face::Right => 3,
            Face::Top => 4,
            Face::Bottom => 5,
        }
    }

    #[inline]
    pub const fn from_index(index: usize) -> Option<Face> {
        match index {
            0 => Some(Face::Front),
            1 => Some(Face::Back),
            2 => Some(Face::Left),
            3 => Some(Face::Right),
            4 => Some(Face::Top),
            5 => Some(Face::Bottom),
            _ => None,
        }
    }

    /// Lower-case name used in square keys (`front:3:4`).
    pub const fn name(self) -> &'static str {
        match self {
            Face::Front => "front",
            Face::Back => "back",
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
        }
    }

    pub fn from_name(name: &str) -> Option<Face> {
        ALL_FACES.into_iter().find(|face| face.name() == name)
    }
}

/// Outward unit normal of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normal {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Normal {
    pub const fn to_vector(self) -> Coord {
        match self {
            Normal::PosX => Coord::new(1, 0, 0),
            Normal::NegX => Coord::new(-1, 0, 0),
            Normal::PosY => Coord::new(0, 1, 0),
            Normal::NegY => Coord::new(0, -1, 0),
            Normal::PosZ => Coord::new(0, 0, 1),
            Normal::NegZ => Coord::new(0, 0, -1),
        }
    }

    /// Maps a unit axis vector to its normal. Anything else has no normal.
    pub const fn from_vector(vector: Coord) -> Option<Normal> {
        match (vector.x, vector.y, vector.z) {
            (1, 0, 0) => Some(Normal::PosX),
            (-1, 0, 0) => Some(Normal::NegX),
            (0, 1, 0) => Some(Normal::PosY),
            (0, -1, 0) => Some(Normal::NegY),
            (0, 0, 1) => Some(Normal::PosZ),
            (0, 0, -1) => Some(Normal::NegZ),
            _ => None,
        }
    }
}

/// World axis a layer is selected along and rotated about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    X,
    Y,
    Z,
}

pub const ALL_AXES: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

impl Axis {
    pub const fn symbol(self) -> char {
        match self {
            Axis::X => 'X',
            Axis::Y => 'Y',
            Axis::Z => 'Z',
        }
    }
}

/// Quarter turn either way, or a half turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationDirection {
    Clockwise,
    CounterClockwise,
    Half,
}

pub const ALL_ROTATION_DIRECTIONS: [RotationDirection; 3] = [
    RotationDirection::Clockwise,
    RotationDirection::CounterClockwise,
    RotationDirection::Half,
];

impl RotationDirection {
    pub const fn label(self) -> &'static str {
        match self {
            RotationDirection::Clockwise => "CW",
            RotationDirection::CounterClockwise => "CCW",
            RotationDirection::Half => "180",
        }
    }
}

/// Integer lattice position (or a direction vector in the same frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Coord {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn component(self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    #[inline]
    pub const fn negate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }

    #[inline]
    pub const fn add(self, rhs: Coord) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }

    #[inline]
    pub const fn scale(self, factor: i32) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn is_inside_cube(self) -> bool {
        let range = 0..i32::from(BOARD_SIZE);
        range.contains(&self.x) && range.contains(&self.y) && range.contains(&self.z)
    }
}
