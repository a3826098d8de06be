//! The four growth directions and their grid offsets

use std::fmt;

/// Side of a structure, and the direction a region grows towards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Towards lower columns
    Left,
    /// Towards higher rows
    Down,
    /// Towards higher columns
    Right,
    /// Towards lower rows
    Up,
}

impl Direction {
    /// Clockwise order in which growth directions are tried
    pub const CYCLE: [Self; 4] = [Self::Left, Self::Down, Self::Right, Self::Up];

    /// The direction facing the other way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Unit step as `[d_row, d_col]`
    pub const fn delta(self) -> [i32; 2] {
        match self {
            Self::Left => [0, -1],
            Self::Down => [1, 0],
            Self::Right => [0, 1],
            Self::Up => [-1, 0],
        }
    }

    /// Whether the direction moves along rows
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// Right and Up stand for their axis when pairing connectors
    pub const fn is_canonical(self) -> bool {
        matches!(self, Self::Right | Self::Up)
    }

    /// Position one step away from `position`
    pub const fn step(self, position: [i32; 2]) -> [i32; 2] {
        let [dr, dc] = self.delta();
        [position[0] + dr, position[1] + dc]
    }

    /// Arrow drawn for a connector facing this way
    pub const fn glyph(self) -> char {
        match self {
            Self::Left => '<',
            Self::Down => 'v',
            Self::Right => '>',
            Self::Up => '^',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Down => "down",
            Self::Right => "right",
            Self::Up => "up",
        };
        f.write_str(name)
    }
}
