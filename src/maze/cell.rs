use std::fmt;

/// Cardinal direction from a cell towards one of its grid neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::North => write!(f, "north"),
            Direction::East => write!(f, "east"),
            Direction::South => write!(f, "south"),
            Direction::West => write!(f, "west"),
        }
    }
}

/// Which sides of a cell are closed. `true` means a wall is present.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl Walls {
    /// A cell closed on every side.
    pub const CLOSED: Walls = Walls {
        north: true,
        east: true,
        south: true,
        west: true,
    };

    pub fn has(&self, direction: Direction) -> bool {
        match direction {
            Direction::North => self.north,
            Direction::East => self.east,
            Direction::South => self.south,
            Direction::West => self.west,
        }
    }

    pub fn set(&mut self, direction: Direction, wall: bool) {
        match direction {
            Direction::North => self.north = wall,
            Direction::East => self.east = wall,
            Direction::South => self.south = wall,
            Direction::West => self.west = wall,
        }
    }

    /// Number of open sides.
    pub fn openings(&self) -> usize {
        Direction::ALL.iter().filter(|&&d| !self.has(d)).count()
    }
}
