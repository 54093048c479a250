//! Core types shared across the application.
//! This crate contains pure data types and tuning constants with no external
//! dependencies.

use std::f32::consts::{FRAC_PI_2, PI};

/// Fallback viewport when the terminal size cannot be queried.
pub const SCREEN_WIDTH: u16 = 120;
pub const SCREEN_HEIGHT: u16 = 40;

/// Frame tick budget (milliseconds). Input polling blocks at most this long.
pub const TICK_MS: u32 = 16;

/// Total angular width of the rendered view, split evenly across columns.
pub const FIELD_OF_VIEW: f32 = FRAC_PI_2;

/// Maximum ray travel distance before the view is treated as open sky.
pub const VISION_DEPTH: f32 = 8.0;

/// Movement speed in map units per second.
pub const MOVE_SPEED: f32 = 5.0;

/// Rotation rate as a fraction of `MOVE_SPEED` (radians per second factor).
pub const ROTATE_FACTOR: f32 = 0.75;

/// Ray march increment in map units.
pub const RAY_STEP: f32 = 0.1;

/// Angular threshold (radians) under which a ray counts as grazing a wall
/// corner and the column renders as an edge divider.
pub const BOUNDARY_RAD: f32 = 0.01;

/// Facing angle at spawn.
pub const INITIAL_FACING: f32 = PI;

/// Map character that marks a wall cell. Every other character is empty.
pub const WALL_CHAR: char = '#';

/// One cell of the map grid.
///
/// `Wall` cells never change after load. Exactly one cell is `Occupant`
/// (the player's current cell) at any time during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
    Occupant,
}

impl Tile {
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// Tile for one map character: `WALL_CHAR` is a wall, all else empty.
    pub fn from_map_char(ch: char) -> Self {
        if ch == WALL_CHAR {
            Tile::Wall
        } else {
            Tile::Empty
        }
    }
}

/// A discrete movement intent for one frame.
///
/// "No input this frame" is represented by `Option::<Intent>::None` at the
/// call sites; absence of input is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Forward,
    Backward,
    StrafeLeft,
    StrafeRight,
    RotateLeft,
    RotateRight,
    Quit,
}

/// Result of applying one intent to the player pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The pose changed (position or facing) and the grid marker is in sync.
    Moved,
    /// The destination cell was a wall (or out of bounds); pose unchanged.
    Blocked,
    /// No intent this frame; pose unchanged.
    Idle,
    /// Quit was requested; the frame loop should terminate.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_from_map_char() {
        assert_eq!(Tile::from_map_char('#'), Tile::Wall);
        assert_eq!(Tile::from_map_char('.'), Tile::Empty);
        assert_eq!(Tile::from_map_char(' '), Tile::Empty);
    }

    #[test]
    fn test_wall_predicate() {
        assert!(Tile::Wall.is_wall());
        assert!(!Tile::Empty.is_wall());
        assert!(!Tile::Occupant.is_wall());
    }
}
