//! Sparse hazard grid keyed by cell coordinate
//!
//! Only cells that hold something (an occupant, or in augmented mode a
//! detection of a neighbouring occupant) are stored. Every other cell of the
//! 100×100×100 universe is implicitly empty and safe to enter.

use bitvec::prelude::*;
use std::collections::HashMap;
use std::fmt;

use crate::spatial::coordinate::{Coordinate, Direction};

const KIND_COUNT: usize = 4;

/// What occupies a cell
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TileKind {
    /// Swallows the probe on entry
    BlackHole,
    /// Roaming hazard, treated as static while planning
    Creature,
    /// Goal cell
    Planet,
    /// Cell the probe has detonated its bomb on
    Bomb,
}

impl TileKind {
    /// Parse the single-letter tag used by hazard lists (`B`, `K`, `P`)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "B" => Some(Self::BlackHole),
            "K" => Some(Self::Creature),
            "P" => Some(Self::Planet),
            "M" => Some(Self::Bomb),
            _ => None,
        }
    }

    /// Single-letter tag of this kind
    pub const fn tag(self) -> &'static str {
        match self {
            Self::BlackHole => "B",
            Self::Creature => "K",
            Self::Planet => "P",
            Self::Bomb => "M",
        }
    }

    /// Kinds that kill the probe and can be cleared with a bomb
    pub const fn is_hazard(self) -> bool {
        matches!(self, Self::BlackHole | Self::Creature)
    }

    /// Kinds that end a random-walk trial when entered
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::BlackHole | Self::Creature | Self::Planet)
    }

    const fn index(self) -> usize {
        match self {
            Self::BlackHole => 0,
            Self::Creature => 1,
            Self::Planet => 2,
            Self::Bomb => 3,
        }
    }

    const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::BlackHole),
            1 => Some(Self::Creature),
            2 => Some(Self::Planet),
            3 => Some(Self::Bomb),
            _ => None,
        }
    }
}

impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Set of occupant kinds sensed one axis-step away from a cell
#[derive(Clone, Copy)]
pub struct DetectedKinds {
    bits: BitArray<[u8; 1], Lsb0>,
}

impl Default for DetectedKinds {
    fn default() -> Self {
        Self {
            bits: BitArray::ZERO,
        }
    }
}

impl DetectedKinds {
    /// Record that a kind was sensed
    pub fn insert(&mut self, kind: TileKind) {
        self.bits.set(kind.index(), true);
    }

    /// Test if a kind was sensed
    pub fn contains(&self, kind: TileKind) -> bool {
        self.bits.get(kind.index()).as_deref() == Some(&true)
    }

    /// Test if nothing was sensed
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Sensed kinds in declaration order
    pub fn iter(&self) -> impl Iterator<Item = TileKind> + '_ {
        self.bits
            .iter_ones()
            .take_while(|&index| index < KIND_COUNT)
            .filter_map(TileKind::from_index)
    }
}

impl PartialEq for DetectedKinds {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for DetectedKinds {}

impl fmt::Debug for DetectedKinds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Contents of a stored cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tile {
    /// What actually sits in the cell, if anything
    pub occupant: Option<TileKind>,
    /// Kinds of occupants in axis-adjacent cells (augmented grids only)
    pub detected: DetectedKinds,
}

impl Tile {
    /// A cell holding a real occupant
    pub fn occupied(kind: TileKind) -> Self {
        Self {
            occupant: Some(kind),
            detected: DetectedKinds::default(),
        }
    }

    /// Whether a neighbouring occupant has been sensed from this cell
    pub fn has_detection(&self) -> bool {
        !self.detected.is_empty()
    }
}

/// One line of a hazard list
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HazardRecord {
    /// Occupant kind
    pub kind: TileKind,
    /// Cell it occupies
    pub position: Coordinate,
}

impl HazardRecord {
    /// Pair a kind with its position
    pub const fn new(kind: TileKind, position: Coordinate) -> Self {
        Self { kind, position }
    }
}

/// How much information the grid carries
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    /// Real occupants only
    Plain,
    /// Real occupants plus detections on every axis neighbour
    Augmented,
}

/// Sparse map from coordinates to stored tiles
#[derive(Clone, Debug)]
pub struct HazardGrid {
    tiles: HashMap<Coordinate, Tile>,
    mode: BuildMode,
}

impl HazardGrid {
    /// Build the grid from a hazard list
    ///
    /// Occupants are placed first (a repeated coordinate keeps the last
    /// record), then augmented mode merges detections into the neighbours of
    /// every record. Detection never changes an occupant.
    pub fn build(records: &[HazardRecord], mode: BuildMode) -> Self {
        let mut tiles: HashMap<Coordinate, Tile> = HashMap::with_capacity(match mode {
            BuildMode::Plain => records.len(),
            BuildMode::Augmented => records.len() * (Direction::ALL.len() + 1),
        });

        for record in records {
            tiles.insert(record.position, Tile::occupied(record.kind));
        }

        if mode == BuildMode::Augmented {
            for record in records {
                for neighbour in Self::neighbors(record.position, &Direction::ALL) {
                    tiles
                        .entry(neighbour)
                        .or_default()
                        .detected
                        .insert(record.kind);
                }
            }
        }

        Self { tiles, mode }
    }

    /// Mode the grid was built in
    pub const fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Stored tile at a cell, `None` for empty cells
    pub fn lookup(&self, cell: Coordinate) -> Option<&Tile> {
        self.tiles.get(&cell)
    }

    /// Real occupant of a cell
    pub fn occupant(&self, cell: Coordinate) -> Option<TileKind> {
        self.lookup(cell).and_then(|tile| tile.occupant)
    }

    /// Remove a cell's record entirely
    pub fn clear(&mut self, cell: Coordinate) {
        self.tiles.remove(&cell);
    }

    /// Replace a cell's occupant, keeping any detections it carries
    pub fn mark(&mut self, cell: Coordinate, kind: TileKind) {
        self.tiles.entry(cell).or_default().occupant = Some(kind);
    }

    /// In-bounds neighbours of a cell along the given directions, in order
    pub fn neighbors(
        cell: Coordinate,
        axes: &[Direction],
    ) -> impl Iterator<Item = Coordinate> + '_ {
        axes.iter().filter_map(move |&direction| cell.step(direction))
    }

    /// Cells occupied by planets
    pub fn planets(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.tiles
            .iter()
            .filter(|(_, tile)| tile.occupant == Some(TileKind::Planet))
            .map(|(&cell, _)| cell)
    }

    /// Number of stored cells
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether no cell is stored
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}
