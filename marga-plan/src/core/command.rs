//! Robot commands and their wire tokens.

use serde::{Deserialize, Serialize};

/// One atomic robot action.
///
/// Every command costs exactly one unit, whatever the distance covered:
/// the planner's cost metric is command count, not rails traveled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Quarter turn counter-clockwise in place (wire token `G`)
    RotateLeft,
    /// Quarter turn clockwise in place (wire token `D`)
    RotateRight,
    /// Advance 1–3 rails in the current facing direction (tokens `a1`–`a3`)
    Advance(u8),
}

impl Command {
    /// Result-line token for this command
    pub fn token(self) -> &'static str {
        match self {
            Command::RotateLeft => "G",
            Command::RotateRight => "D",
            Command::Advance(1) => "a1",
            Command::Advance(2) => "a2",
            Command::Advance(3) => "a3",
            Command::Advance(n) => unreachable!("advance length {} out of range", n),
        }
    }

    /// Parse a result-line token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "G" => Some(Command::RotateLeft),
            "D" => Some(Command::RotateRight),
            "a1" => Some(Command::Advance(1)),
            "a2" => Some(Command::Advance(2)),
            "a3" => Some(Command::Advance(3)),
            _ => None,
        }
    }

    /// Number of rails this command moves the robot (0 for rotations)
    #[inline]
    pub fn rails(self) -> i32 {
        match self {
            Command::Advance(n) => n as i32,
            _ => 0,
        }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip() {
        let commands = [
            Command::RotateLeft,
            Command::RotateRight,
            Command::Advance(1),
            Command::Advance(2),
            Command::Advance(3),
        ];
        for c in commands {
            assert_eq!(Command::from_token(c.token()), Some(c));
        }
        assert_eq!(Command::from_token("a4"), None);
        assert_eq!(Command::from_token("g"), None);
    }
}
