//! Bounded 2-D integer grid.
//!
//! Positions are unsigned cell coordinates with the invariant
//! `0 <= x < size` and `0 <= y < size`.  The grid itself carries no state
//! beyond its side length; agents own their positions.

use std::fmt;

use crate::{AbmError, AbmResult};

// ── GridPos ───────────────────────────────────────────────────────────────────

/// A cell on the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: u32,
    pub y: u32,
}

impl GridPos {
    #[inline]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance between two cells.
    ///
    /// Each squared axis delta fits in `u64`; their sum saturates at
    /// `u64::MAX`.  Any contact threshold is at most `u32::MAX²`, so a
    /// saturated distance never compares as in range.
    #[inline]
    pub fn distance_sq(self, other: GridPos) -> u64 {
        let dx = u64::from(self.x.abs_diff(other.x));
        let dy = u64::from(self.y.abs_diff(other.y));
        (dx * dx).saturating_add(dy * dy)
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Direction ─────────────────────────────────────────────────────────────────

/// One of the four unit steps an agent can take in a tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `x - 1`
    West,
    /// `x + 1`
    East,
    /// `y - 1`
    North,
    /// `y + 1`
    South,
}

impl Direction {
    /// All directions, in the order the movement draw indexes them.
    pub const ALL: [Direction; 4] = [
        Direction::West,
        Direction::East,
        Direction::North,
        Direction::South,
    ];
}

// ── Grid ──────────────────────────────────────────────────────────────────────

/// Square grid of `size × size` cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    size: u32,
}

impl Grid {
    /// Create a grid with side length `size`.  A zero-sized grid has no cells
    /// for agents to occupy and is rejected.
    pub fn new(size: u32) -> AbmResult<Self> {
        if size == 0 {
            return Err(AbmError::Config("grid size must be positive".into()));
        }
        Ok(Self { size })
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// `true` if `pos` lies on the grid.
    #[inline]
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x < self.size && pos.y < self.size
    }

    /// The cell one step from `pos` in direction `dir`, or `None` if that
    /// step would leave the grid.
    #[inline]
    pub fn step(&self, pos: GridPos, dir: Direction) -> Option<GridPos> {
        let next = match dir {
            Direction::West  => GridPos::new(pos.x.checked_sub(1)?, pos.y),
            Direction::East  => GridPos::new(pos.x.checked_add(1)?, pos.y),
            Direction::North => GridPos::new(pos.x, pos.y.checked_sub(1)?),
            Direction::South => GridPos::new(pos.x, pos.y.checked_add(1)?),
        };
        self.contains(next).then_some(next)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.size, self.size)
    }
}
