//! Bounded integer coordinates and the six axis-unit directions
//!
//! Every cell of the universe is addressed by a [`Coordinate`] whose axes lie
//! in `[0, GRID_EXTENT)`. Coordinates are plain values: copied, compared,
//! ordered lexicographically and hashed by their axes.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::GRID_EXTENT;

/// Total number of addressable cells in the universe
pub const CELL_COUNT: usize = GRID_EXTENT as usize * GRID_EXTENT as usize * GRID_EXTENT as usize;

/// A cell position in the bounded three-dimensional grid
///
/// Field order gives the derived `Ord` its lexicographic (x, y, z) ordering,
/// which the searches rely on for deterministic tie-breaking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    x: u8,
    y: u8,
    z: u8,
}

impl Coordinate {
    /// Starting cell of every probe
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a coordinate, rejecting any axis outside the grid
    pub const fn new(x: u8, y: u8, z: u8) -> Option<Self> {
        if x < GRID_EXTENT && y < GRID_EXTENT && z < GRID_EXTENT {
            Some(Self { x, y, z })
        } else {
            None
        }
    }

    /// Create a coordinate from signed axis values
    pub fn from_axes(x: i64, y: i64, z: i64) -> Option<Self> {
        Self::new(
            u8::try_from(x).ok()?,
            u8::try_from(y).ok()?,
            u8::try_from(z).ok()?,
        )
    }

    /// Front/back axis
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Up/down axis
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Right/left axis
    pub const fn z(self) -> u8 {
        self.z
    }

    /// Sum of all three axes, used to rank goals by closeness to the origin
    pub const fn axis_sum(self) -> u32 {
        self.x as u32 + self.y as u32 + self.z as u32
    }

    /// Dense index in `[0, CELL_COUNT)`
    pub const fn linear_index(self) -> usize {
        let extent = GRID_EXTENT as usize;
        (self.x as usize * extent + self.y as usize) * extent + self.z as usize
    }

    /// The neighbouring cell one unit step away, or `None` past the boundary
    pub const fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy, dz) = direction.delta();
        match (
            offset_axis(self.x, dx),
            offset_axis(self.y, dy),
            offset_axis(self.z, dz),
        ) {
            (Some(x), Some(y), Some(z)) => Some(Self { x, y, z }),
            _ => None,
        }
    }

    /// Straight-line distance between two cells
    pub fn euclidean_distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        let dz = f64::from(self.z) - f64::from(other.z);
        dz.mul_add(dz, dx.mul_add(dx, dy * dy)).sqrt()
    }

    /// Number of unit steps on the 6-connected lattice between two cells
    pub const fn manhattan_distance(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) as u32
            + self.y.abs_diff(other.y) as u32
            + self.z.abs_diff(other.z) as u32
    }
}

const fn offset_axis(value: u8, delta: i8) -> Option<u8> {
    match value.checked_add_signed(delta) {
        Some(moved) if moved < GRID_EXTENT => Some(moved),
        _ => None,
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

/// Failure to read a coordinate from its `"x y z"` text form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordinateError {
    /// Description of what was wrong with the text
    pub reason: String,
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid coordinate: {}", self.reason)
    }
}

impl std::error::Error for ParseCoordinateError {}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut axes = [0i64; 3];
        let mut fields = s.split_whitespace();

        for (slot, name) in axes.iter_mut().zip(["x", "y", "z"]) {
            let field = fields.next().ok_or_else(|| ParseCoordinateError {
                reason: format!("missing {name} axis"),
            })?;
            *slot = field.parse().map_err(|err| ParseCoordinateError {
                reason: format!("{name} axis '{field}': {err}"),
            })?;
        }

        if let Some(extra) = fields.next() {
            return Err(ParseCoordinateError {
                reason: format!("unexpected trailing field '{extra}'"),
            });
        }

        let [x, y, z] = axes;
        Self::from_axes(x, y, z).ok_or_else(|| ParseCoordinateError {
            reason: format!("({x}, {y}, {z}) lies outside [0, {}]", GRID_EXTENT - 1),
        })
    }
}

/// One of the six unit steps along a grid axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// +x
    Front,
    /// -x
    Back,
    /// +y
    Up,
    /// -y
    Down,
    /// +z
    Right,
    /// -z
    Left,
}

impl Direction {
    /// All six directions in a fixed order
    pub const ALL: [Self; 6] = [
        Self::Up,
        Self::Down,
        Self::Right,
        Self::Left,
        Self::Front,
        Self::Back,
    ];

    /// The three positive directions (+x, +y, +z)
    pub const POSITIVE: [Self; 3] = [Self::Front, Self::Up, Self::Right];

    /// Axis offsets `(dx, dy, dz)` of this step
    pub const fn delta(self) -> (i8, i8, i8) {
        match self {
            Self::Front => (1, 0, 0),
            Self::Back => (-1, 0, 0),
            Self::Up => (0, 1, 0),
            Self::Down => (0, -1, 0),
            Self::Right => (0, 0, 1),
            Self::Left => (0, 0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        };
        f.write_str(name)
    }
}
