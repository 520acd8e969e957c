//! Robot orientation (compass facing).

use serde::{Deserialize, Serialize};

/// Compass orientation of the robot.
///
/// Encoded as an index 0–3 so that a quarter turn is ±1 mod 4.
/// Row indices grow southward, so the unit step for `North` is (−1, 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Facing decreasing row indices (wire token `nord`)
    North = 0,
    /// Facing increasing column indices (wire token `est`)
    East = 1,
    /// Facing increasing row indices (wire token `sud`)
    South = 2,
    /// Facing decreasing column indices (wire token `ouest`)
    West = 3,
}

impl Orientation {
    /// All orientations in index order
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// Index 0–3 (rotation is ±1 mod 4)
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Orientation for an index, taken mod 4
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Orientation after a quarter turn counter-clockwise
    #[inline]
    pub fn rotate_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Orientation after a quarter turn clockwise
    #[inline]
    pub fn rotate_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Unit step (di, dj) for one rail in this direction
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::North => (-1, 0),
            Orientation::East => (0, 1),
            Orientation::South => (1, 0),
            Orientation::West => (0, -1),
        }
    }

    /// Parse an instance-file orientation token (case-insensitive)
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "nord" => Some(Orientation::North),
            "est" => Some(Orientation::East),
            "sud" => Some(Orientation::South),
            "ouest" => Some(Orientation::West),
            _ => None,
        }
    }

    /// Instance-file token for this orientation
    pub fn token(self) -> &'static str {
        match self {
            Orientation::North => "nord",
            Orientation::East => "est",
            Orientation::South => "sud",
            Orientation::West => "ouest",
        }
    }
}
